//! Board state machine (pure).
//!
//! All state transitions are pure functions testable without a renderer.

pub mod board_store;
pub mod command_handler;
pub mod reorder;

// Re-export for convenience
pub use board_store::BoardStore;
pub use command_handler::handle_command;
pub use reorder::reorder;
