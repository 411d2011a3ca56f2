//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod board_command;
pub mod board_state;
pub mod column;
pub mod error;
pub mod identifiers;
pub mod operation;

// Re-export for convenience
pub use board_command::BoardCommand;
pub use board_state::BoardState;
pub use column::{Column, Item};
pub use error::{
    BoardError, CommandError, DropError, EffectError, InputError, RegistryError, StateError,
};
pub use identifiers::{ColumnId, InstanceId, InvalidColumnId, InvalidItemId, ItemId};
pub use operation::{Operation, Outcome, Trigger};
