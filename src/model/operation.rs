//! Recorded board operations.
//!
//! Every committed mutation is recorded as an [`Operation`]: the input
//! modality that produced it plus the [`Outcome`] describing what moved.
//! Post-move feedback is driven entirely from this record.

use super::identifiers::ColumnId;
use std::fmt;

/// Input modality that produced an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trigger {
    /// Drag and drop with a pointing device.
    Pointer,
    /// Discrete keyboard command (action menu, shortcuts).
    #[default]
    Keyboard,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Pointer => f.write_str("pointer"),
            Trigger::Keyboard => f.write_str("keyboard"),
        }
    }
}

/// Semantic result of a completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A column changed position in the column order.
    ColumnReorder {
        /// Column that moved.
        column_id: ColumnId,
        /// Index before the move.
        start_index: usize,
        /// Index after the move.
        finish_index: usize,
    },
    /// An item changed position inside its column.
    CardReorder {
        /// Column holding the item.
        column_id: ColumnId,
        /// Index before the move.
        start_index: usize,
        /// Index after the move.
        finish_index: usize,
    },
    /// An item left one column for another.
    CardMove {
        /// Column the item now lives in.
        finish_column_id: ColumnId,
        /// Index the item had in its start column.
        item_index_in_start_column: usize,
        /// Always resolved; an unspecified destination is recorded as 0.
        item_index_in_finish_column: usize,
    },
}

impl Outcome {
    /// Short kind label, as used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::ColumnReorder { .. } => "column-reorder",
            Outcome::CardReorder { .. } => "card-reorder",
            Outcome::CardMove { .. } => "card-move",
        }
    }
}

/// A trigger paired with the outcome it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// How the move was initiated.
    pub trigger: Trigger,
    /// What changed.
    pub outcome: Outcome,
}

impl Operation {
    /// Pair a trigger with its outcome.
    pub fn new(trigger: Trigger, outcome: Outcome) -> Self {
        Self { trigger, outcome }
    }
}
