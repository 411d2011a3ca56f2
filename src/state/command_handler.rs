//! Keyboard command handler.
//!
//! Resolves [`BoardCommand`]s against the current board and forwards them to
//! the store with [`Trigger::Keyboard`].

use crate::model::{BoardCommand, ColumnId, ItemId, Operation, StateError, Trigger};
use crate::state::BoardStore;
use tracing::debug;

/// Execute a keyboard command.
///
/// Returns `Ok(None)` when the command is unavailable in the current state
/// (moving the first card up, the last column right, a card to the column it
/// is already in). Nothing is recorded in that case.
///
/// # Errors
///
/// [`StateError`] when the command names an item or column that is not on the
/// board, or carries indices the store rejects.
pub fn handle_command(
    store: &mut BoardStore,
    command: BoardCommand,
) -> Result<Option<Operation>, StateError> {
    let trigger = Trigger::Keyboard;

    match command {
        BoardCommand::MoveCardUp(item) => {
            let (column_id, index, _) = locate(store, &item)?;
            if index == 0 {
                return unavailable("move-card-up", &item);
            }
            store
                .reorder_card(&column_id, index, index - 1, trigger)
                .map(Some)
        }
        BoardCommand::MoveCardDown(item) => {
            let (column_id, index, len) = locate(store, &item)?;
            if index + 1 >= len {
                return unavailable("move-card-down", &item);
            }
            store
                .reorder_card(&column_id, index, index + 1, trigger)
                .map(Some)
        }
        BoardCommand::MoveCardToColumn { item, column } => {
            let (column_id, index, _) = locate(store, &item)?;
            if store.state().column(&column).is_none() {
                return Err(StateError::UnknownColumn(column));
            }
            if column_id == column {
                return unavailable("move-card-to-column", &item);
            }
            store.move_card(&column_id, &column, index, None, trigger)
        }
        BoardCommand::MoveColumnLeft(column) => {
            let index = column_index(store, &column)?;
            if index == 0 {
                return unavailable("move-column-left", &column);
            }
            store.reorder_column(index, index - 1, trigger).map(Some)
        }
        BoardCommand::MoveColumnRight(column) => {
            let index = column_index(store, &column)?;
            if index + 1 >= store.state().column_count() {
                return unavailable("move-column-right", &column);
            }
            store.reorder_column(index, index + 1, trigger).map(Some)
        }
        BoardCommand::ReorderColumn {
            start_index,
            finish_index,
        } => store
            .reorder_column(start_index, finish_index, trigger)
            .map(Some),
        BoardCommand::ReorderCard {
            column_id,
            start_index,
            finish_index,
        } => store
            .reorder_card(&column_id, start_index, finish_index, trigger)
            .map(Some),
        BoardCommand::MoveCard {
            start_column_id,
            finish_column_id,
            item_index_in_start_column,
            item_index_in_finish_column,
        } => store.move_card(
            &start_column_id,
            &finish_column_id,
            item_index_in_start_column,
            item_index_in_finish_column,
            trigger,
        ),
    }
}

/// Column id, index and column length for an item.
fn locate(store: &BoardStore, item: &ItemId) -> Result<(ColumnId, usize, usize), StateError> {
    store
        .state()
        .locate_item(item)
        .map(|(column, index)| (column.id().clone(), index, column.len()))
        .ok_or_else(|| StateError::UnknownItem(item.clone()))
}

fn column_index(store: &BoardStore, column: &ColumnId) -> Result<usize, StateError> {
    store
        .state()
        .column_index(column)
        .ok_or_else(|| StateError::UnknownColumn(column.clone()))
}

fn unavailable(
    command: &str,
    subject: &dyn std::fmt::Display,
) -> Result<Option<Operation>, StateError> {
    debug!(command, subject = %subject, "Command unavailable in current state");
    Ok(None)
}

// ===== Tests =====

#[cfg(test)]
#[path = "command_handler_tests.rs"]
mod tests;
