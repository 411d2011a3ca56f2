//! Error types for the board engine.
//!
//! This module defines a layered error taxonomy using `thiserror`. Each layer of
//! the engine owns one enum, and [`BoardError`] aggregates them so board-level
//! calls compose with `?`.
//!
//! # Error Hierarchy
//!
//! - [`BoardError`] - Top-level error returned by [`crate::board::Board`]
//!   - [`StateError`] - a store operation referenced a missing column/item or an out-of-range index
//!   - [`DropError`] - gesture data could not be interpreted against current state
//!   - [`EffectError`] - post-move feedback could not resolve its target
//!     - [`RegistryError`] - no live element is registered for an identifier
//! - [`InputError`] - board and replay files failed to load
//! - [`CommandError`] - a textual keyboard command did not parse
//!
//! # Recovery Strategy
//!
//! Every variant here is an integration error, not a user-facing failure. The
//! current gesture is abandoned and nothing is committed: store operations
//! validate before they build the next snapshot. Effect errors are the one
//! exception; they surface after the mutation committed and only cancel the
//! feedback for that operation.

use super::identifiers::{ColumnId, InvalidColumnId, InvalidItemId, ItemId};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for board component calls.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A store operation was rejected; state is unchanged.
    #[error("Board state rejected operation: {0}")]
    State(#[from] StateError),

    /// A drop gesture could not be interpreted; state is unchanged.
    #[error("Drop could not be interpreted: {0}")]
    Drop(#[from] DropError),

    /// The mutation committed but its feedback could not be delivered.
    #[error("Post-move effect failed: {0}")]
    Effect(#[from] EffectError),
}

/// Violations detected by the board state store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// No column with this identifier exists.
    #[error("Unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// No column contains an item with this identifier.
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// An index did not address the sequence it was applied to.
    ///
    /// `len` is the number of valid positions: the sequence length for
    /// removals, one more than that for insertions.
    #[error("Index {index} out of bounds for {len} positions")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of valid positions.
        len: usize,
    },

    /// Two columns share an identifier.
    #[error("Duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    /// An item identifier appears more than once on the board.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),
}

/// Gesture data that does not match the board it was dropped on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropError {
    /// Gesture referenced a column that is not on the board.
    #[error("Drop references unknown column {0}")]
    UnknownColumn(ColumnId),

    /// The dragged or hovered item is not in the column the gesture claims.
    #[error("Item {item} is not in column {column}")]
    ItemNotInColumn {
        /// Item named by the gesture.
        item: ItemId,
        /// Column it was expected in.
        column: ColumnId,
    },

    /// A card drag did not start inside a column.
    #[error("Card drag has no source column in its initial drop targets")]
    MissingSourceColumn,

    /// A target record at `position` was expected to be a column.
    #[error("Expected a column drop target at position {position}")]
    ExpectedColumnTarget {
        /// Index into the target stack.
        position: usize,
    },

    /// A target record at `position` was expected to be a card.
    #[error("Expected a card drop target at position {position}")]
    ExpectedCardTarget {
        /// Index into the target stack.
        position: usize,
    },

    /// Card drops are only understood with one or two nested targets.
    #[error("Unexpected drop target stack of depth {0}")]
    UnexpectedTargetDepth(usize),
}

/// Registry lookups that found no live element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Nothing is registered for this card.
    #[error("No element registered for card {0}")]
    CardNotRegistered(ItemId),

    /// Nothing is registered for this column.
    #[error("No element registered for column {0}")]
    ColumnNotRegistered(ColumnId),

    /// The entry exists but its element has already been torn down.
    #[error("Element for {0} was dropped before it was unregistered")]
    ElementGone(String),
}

/// Failures while producing post-move feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// The moved element is not registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The operation names a column missing from the current state.
    #[error("Operation references unknown column {0}")]
    UnknownColumn(ColumnId),

    /// The operation's finish index does not address an item.
    #[error("No item at position {index} in column {column}")]
    MissingItem {
        /// Column that was inspected.
        column: ColumnId,
        /// Finish index recorded by the operation.
        index: usize,
    },
}

/// Errors encountered while loading board or replay files.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading the file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("Invalid JSON in {path}: {reason}")]
    Json {
        /// Path being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A recorded drop is well-formed JSON but not a usable gesture.
    #[error("Invalid drop record #{index}: {reason}")]
    Replay {
        /// Zero-based position of the record in the file.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// An item identifier in the file is invalid.
    #[error("Invalid item id: {0}")]
    ItemId(#[from] InvalidItemId),

    /// A column identifier in the file is invalid.
    #[error("Invalid column id: {0}")]
    ColumnId(#[from] InvalidColumnId),

    /// The file describes a board that breaks a state invariant.
    #[error("Invalid board: {0}")]
    Board(#[from] StateError),
}

/// Errors parsing a textual keyboard command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command string was empty.
    #[error("Empty command")]
    Empty,

    /// The verb is not a known command.
    #[error("Unknown command '{0}'")]
    UnknownVerb(String),

    /// The command had the wrong number of arguments.
    #[error("'{verb}' expects {expected} argument(s), got {got}")]
    Arity {
        /// Command verb.
        verb: String,
        /// Expected argument count description.
        expected: &'static str,
        /// Supplied argument count.
        got: usize,
    },

    /// A positional index did not parse as a non-negative integer.
    #[error("Invalid index '{0}'")]
    InvalidIndex(String),

    /// An item identifier argument was invalid.
    #[error("Invalid item id: {0}")]
    ItemId(#[from] InvalidItemId),

    /// A column identifier argument was invalid.
    #[error("Invalid column id: {0}")]
    ColumnId(#[from] InvalidColumnId),
}
