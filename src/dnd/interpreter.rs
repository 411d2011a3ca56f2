//! Drop interpretation.
//!
//! Pure functions that turn a completed drag gesture plus the current board
//! into an index-level [`DropOutcome`]. Nothing here mutates state; the board
//! applies the outcome afterwards.

use super::gesture::{DragSource, DropEvent, DropTarget, DropTargetRecord};
use super::hitbox::{reorder_destination_index, Axis, Edge};
use crate::model::{BoardState, Column, ColumnId, DropError, ItemId};

/// What a drop should do to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside every target.
    Ignore,
    /// Move a column within the column order.
    ColumnReorder {
        /// Current index of the dragged column.
        start_index: usize,
        /// Index the column should end up at.
        finish_index: usize,
    },
    /// Move a card within its own column.
    CardReorder {
        /// Column holding the card.
        column_id: ColumnId,
        /// Current index of the card.
        start_index: usize,
        /// Index the card should end up at.
        finish_index: usize,
    },
    /// Move a card into another column.
    CardMove {
        /// Column the card leaves.
        start_column_id: ColumnId,
        /// Column the card joins.
        finish_column_id: ColumnId,
        /// Index of the card in its start column.
        item_index_in_start_column: usize,
        /// `None` lets the store pick its default (top of the column).
        item_index_in_finish_column: Option<usize>,
    },
}

/// Interpret a drop against the current board.
///
/// # Target shapes
///
/// - no current target: [`DropOutcome::Ignore`]
/// - column drag: the first current target is the column hovered
/// - card drag over a column body: one current target (the column)
/// - card drag over a card: two current targets (the card, then its column)
///
/// The card's source column is the second initial target (the card itself is
/// the first).
///
/// # Errors
///
/// Any other shape, or any identifier not present in `state`, is a
/// [`DropError`]. The caller must abandon the gesture.
pub fn interpret_drop(state: &BoardState, event: &DropEvent) -> Result<DropOutcome, DropError> {
    let current = &event.location.current;
    if current.is_empty() {
        return Ok(DropOutcome::Ignore);
    }

    match &event.source {
        DragSource::Column(column_id) => interpret_column_drop(state, column_id, &current[0]),
        DragSource::Card(item_id) => {
            let source_id = event
                .location
                .initial
                .get(1)
                .map(|record| expect_column(record, 1))
                .ok_or(DropError::MissingSourceColumn)??;
            let source = lookup_column(state, source_id)?;
            let item_index = item_position(source, item_id)?;

            match current.as_slice() {
                [column_record] => {
                    let destination = lookup_column(state, expect_column(column_record, 0)?)?;
                    Ok(card_onto_column(source, destination, item_index))
                }
                [card_record, column_record] => {
                    let hovered = expect_card(card_record, 0)?;
                    let destination = lookup_column(state, expect_column(column_record, 1)?)?;
                    let index_of_target = item_position(destination, hovered)?;
                    Ok(card_onto_card(
                        source,
                        destination,
                        item_index,
                        index_of_target,
                        card_record.closest_edge,
                    ))
                }
                other => Err(DropError::UnexpectedTargetDepth(other.len())),
            }
        }
    }
}

fn interpret_column_drop(
    state: &BoardState,
    column_id: &ColumnId,
    target: &DropTargetRecord,
) -> Result<DropOutcome, DropError> {
    let start_index = state
        .column_index(column_id)
        .ok_or_else(|| DropError::UnknownColumn(column_id.clone()))?;
    let target_id = expect_column(target, 0)?;
    let index_of_target = state
        .column_index(target_id)
        .ok_or_else(|| DropError::UnknownColumn(target_id.clone()))?;

    let finish_index = reorder_destination_index(
        start_index,
        index_of_target,
        target.closest_edge,
        Axis::Horizontal,
    );
    Ok(DropOutcome::ColumnReorder {
        start_index,
        finish_index,
    })
}

/// Card released over a column body rather than a specific card.
fn card_onto_column(source: &Column, destination: &Column, item_index: usize) -> DropOutcome {
    if source.id() == destination.id() {
        // The source holds the dragged card, so it is never empty here.
        let finish_index =
            reorder_destination_index(item_index, source.len() - 1, None, Axis::Vertical);
        return DropOutcome::CardReorder {
            column_id: source.id().clone(),
            start_index: item_index,
            finish_index,
        };
    }

    DropOutcome::CardMove {
        start_column_id: source.id().clone(),
        finish_column_id: destination.id().clone(),
        item_index_in_start_column: item_index,
        item_index_in_finish_column: None,
    }
}

/// Card released over another card.
fn card_onto_card(
    source: &Column,
    destination: &Column,
    item_index: usize,
    index_of_target: usize,
    closest_edge: Option<Edge>,
) -> DropOutcome {
    if source.id() == destination.id() {
        let finish_index =
            reorder_destination_index(item_index, index_of_target, closest_edge, Axis::Vertical);
        return DropOutcome::CardReorder {
            column_id: source.id().clone(),
            start_index: item_index,
            finish_index,
        };
    }

    // Nothing is removed from the destination, so no shift applies.
    let finish_index = match closest_edge {
        Some(Edge::Bottom) => index_of_target + 1,
        _ => index_of_target,
    };
    DropOutcome::CardMove {
        start_column_id: source.id().clone(),
        finish_column_id: destination.id().clone(),
        item_index_in_start_column: item_index,
        item_index_in_finish_column: Some(finish_index),
    }
}

fn expect_column(record: &DropTargetRecord, position: usize) -> Result<&ColumnId, DropError> {
    match &record.target {
        DropTarget::Column(id) => Ok(id),
        DropTarget::Card(_) => Err(DropError::ExpectedColumnTarget { position }),
    }
}

fn expect_card(record: &DropTargetRecord, position: usize) -> Result<&ItemId, DropError> {
    match &record.target {
        DropTarget::Card(id) => Ok(id),
        DropTarget::Column(_) => Err(DropError::ExpectedCardTarget { position }),
    }
}

fn lookup_column<'a>(state: &'a BoardState, id: &ColumnId) -> Result<&'a Column, DropError> {
    state
        .column(id)
        .ok_or_else(|| DropError::UnknownColumn(id.clone()))
}

fn item_position(column: &Column, item_id: &ItemId) -> Result<usize, DropError> {
    column
        .position_of(item_id)
        .ok_or_else(|| DropError::ItemNotInColumn {
            item: item_id.clone(),
            column: column.id().clone(),
        })
}

// ===== Tests =====

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod tests;
