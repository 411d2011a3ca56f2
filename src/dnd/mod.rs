//! Drag-and-drop interpretation (pure).
//!
//! Gesture hit data in, index-level outcomes out.

pub mod gesture;
pub mod hitbox;
pub mod interpreter;

// Re-export for convenience
pub use gesture::{DragLocation, DragSource, DropEvent, DropTarget, DropTargetRecord};
pub use hitbox::{reorder_destination_index, Axis, Edge, InvalidEdge};
pub use interpreter::{interpret_drop, DropOutcome};
