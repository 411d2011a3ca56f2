//! Discrete keyboard commands, independent of key bindings.

use super::error::CommandError;
use super::identifiers::{ColumnId, ItemId};
use std::str::FromStr;

/// Keyboard-driven board commands.
///
/// The action-menu variants name *what* moves and let the board work out the
/// indices from current state. The index-level variants map one-to-one onto
/// store operations. Every command runs with [`crate::model::Trigger::Keyboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    // Card action menu
    /// Swap the card with the one above it. Unavailable at the top.
    MoveCardUp(ItemId),
    /// Swap the card with the one below it. Unavailable at the bottom.
    MoveCardDown(ItemId),
    /// Move the card to the top of another column.
    MoveCardToColumn {
        /// Card to move.
        item: ItemId,
        /// Destination column.
        column: ColumnId,
    },

    // Column action menu
    /// Unavailable for the first column.
    MoveColumnLeft(ColumnId),
    /// Unavailable for the last column.
    MoveColumnRight(ColumnId),

    // Index-level operations
    /// See [`crate::state::BoardStore::reorder_column`].
    ReorderColumn {
        /// Current column index.
        start_index: usize,
        /// Target column index.
        finish_index: usize,
    },
    /// See [`crate::state::BoardStore::reorder_card`].
    ReorderCard {
        /// Column holding the card.
        column_id: ColumnId,
        /// Current card index.
        start_index: usize,
        /// Target card index.
        finish_index: usize,
    },
    /// See [`crate::state::BoardStore::move_card`].
    MoveCard {
        /// Column the card leaves.
        start_column_id: ColumnId,
        /// Column the card joins.
        finish_column_id: ColumnId,
        /// Index of the card in its start column.
        item_index_in_start_column: usize,
        /// Destination index; `None` means the top.
        item_index_in_finish_column: Option<usize>,
    },
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidIndex(raw.to_string()))
}

fn arity(verb: &str, expected: &'static str, got: usize) -> CommandError {
    CommandError::Arity {
        verb: verb.to_string(),
        expected,
        got,
    }
}

impl FromStr for BoardCommand {
    type Err = CommandError;

    /// Parse the whitespace-separated text form, e.g. `move-card jira trello 0 2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match (verb, args.as_slice()) {
            ("move-card-up", [item]) => Ok(Self::MoveCardUp(ItemId::new(*item)?)),
            ("move-card-up", _) => Err(arity(verb, "1", args.len())),

            ("move-card-down", [item]) => Ok(Self::MoveCardDown(ItemId::new(*item)?)),
            ("move-card-down", _) => Err(arity(verb, "1", args.len())),

            ("move-card-to-column", [item, column]) => Ok(Self::MoveCardToColumn {
                item: ItemId::new(*item)?,
                column: ColumnId::new(*column)?,
            }),
            ("move-card-to-column", _) => Err(arity(verb, "2", args.len())),

            ("move-column-left", [column]) => Ok(Self::MoveColumnLeft(ColumnId::new(*column)?)),
            ("move-column-left", _) => Err(arity(verb, "1", args.len())),

            ("move-column-right", [column]) => {
                Ok(Self::MoveColumnRight(ColumnId::new(*column)?))
            }
            ("move-column-right", _) => Err(arity(verb, "1", args.len())),

            ("reorder-column", [start, finish]) => Ok(Self::ReorderColumn {
                start_index: parse_index(start)?,
                finish_index: parse_index(finish)?,
            }),
            ("reorder-column", _) => Err(arity(verb, "2", args.len())),

            ("reorder-card", [column, start, finish]) => Ok(Self::ReorderCard {
                column_id: ColumnId::new(*column)?,
                start_index: parse_index(start)?,
                finish_index: parse_index(finish)?,
            }),
            ("reorder-card", _) => Err(arity(verb, "3", args.len())),

            ("move-card", [from, to, start, rest @ ..]) if rest.len() <= 1 => Ok(Self::MoveCard {
                start_column_id: ColumnId::new(*from)?,
                finish_column_id: ColumnId::new(*to)?,
                item_index_in_start_column: parse_index(start)?,
                item_index_in_finish_column: rest.first().map(|raw| parse_index(raw)).transpose()?,
            }),
            ("move-card", _) => Err(arity(verb, "3 or 4", args.len())),

            _ => Err(CommandError::UnknownVerb(verb.to_string())),
        }
    }
}
