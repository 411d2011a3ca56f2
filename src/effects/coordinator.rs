//! Post-move feedback.
//!
//! Pointer users see the item land, so a flash on the moved element is
//! enough. Keyboard users additionally get a positional announcement, and a
//! card that changed columns hands focus to its action-menu trigger so the
//! next command can follow immediately. Column moves are always announced.

use super::announcer::Announcer;
use crate::model::{BoardState, Column, ColumnId, EffectError, Item, Operation, Outcome, Trigger};
use crate::registry::EntryRegistry;
use tracing::debug;

/// "You've moved Jira from position 2 to position 1 of 3."
pub fn column_reorder_message(
    title: &str,
    start_index: usize,
    finish_index: usize,
    column_count: usize,
) -> String {
    format!(
        "You've moved {title} from position {} to position {} of {column_count}.",
        start_index + 1,
        finish_index + 1
    )
}

/// "You've moved Ed from position 10 to position 1 of 10 in the Jira column."
pub fn card_reorder_message(
    name: &str,
    start_index: usize,
    finish_index: usize,
    column: &Column,
) -> String {
    format!(
        "You've moved {name} from position {} to position {} of {} in the {} column.",
        start_index + 1,
        finish_index + 1,
        column.len(),
        column.title()
    )
}

/// "You've moved Ed from position 1 to position 3 in the Trello column."
pub fn card_move_message(
    name: &str,
    item_index_in_start_column: usize,
    item_index_in_finish_column: usize,
    destination: &Column,
) -> String {
    format!(
        "You've moved {name} from position {} to position {} in the {} column.",
        item_index_in_start_column + 1,
        item_index_in_finish_column + 1,
        destination.title()
    )
}

/// Turns recorded operations into flash, announcement and focus effects.
#[derive(Debug)]
pub struct PostMoveEffectCoordinator<A> {
    announcer: A,
}

impl<A: Announcer> PostMoveEffectCoordinator<A> {
    /// Create a coordinator announcing through `announcer`.
    pub fn new(announcer: A) -> Self {
        Self { announcer }
    }

    /// The announcement channel.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Mutable access to the announcement channel.
    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// Deliver feedback for `operation`, which must already be applied to
    /// `state`.
    ///
    /// # Errors
    ///
    /// [`EffectError`] when the operation does not match `state` or the moved
    /// element is not registered. No effect is emitted in that case.
    pub fn handle(
        &mut self,
        state: &BoardState,
        registry: &EntryRegistry,
        operation: &Operation,
    ) -> Result<(), EffectError> {
        debug!(kind = operation.outcome.kind(), trigger = %operation.trigger, "Post-move effects");

        match &operation.outcome {
            Outcome::ColumnReorder {
                column_id,
                start_index,
                finish_index,
            } => {
                let column = lookup_column(state, column_id)?;
                let element = registry.get_column(column_id)?;
                element.trigger_highlight();
                self.announcer.announce(&column_reorder_message(
                    column.title(),
                    *start_index,
                    *finish_index,
                    state.column_count(),
                ));
            }
            Outcome::CardReorder {
                column_id,
                start_index,
                finish_index,
            } => {
                let column = lookup_column(state, column_id)?;
                let item = item_at(column, *finish_index)?;
                let elements = registry.get_card(item.id())?;
                elements.element.trigger_highlight();

                if operation.trigger == Trigger::Keyboard {
                    self.announcer.announce(&card_reorder_message(
                        item.name(),
                        *start_index,
                        *finish_index,
                        column,
                    ));
                }
            }
            Outcome::CardMove {
                finish_column_id,
                item_index_in_start_column,
                item_index_in_finish_column,
            } => {
                let destination = lookup_column(state, finish_column_id)?;
                let item = item_at(destination, *item_index_in_finish_column)?;
                let elements = registry.get_card(item.id())?;
                elements.element.trigger_highlight();

                if operation.trigger == Trigger::Keyboard {
                    self.announcer.announce(&card_move_message(
                        item.name(),
                        *item_index_in_start_column,
                        *item_index_in_finish_column,
                        destination,
                    ));
                    elements.action_menu_trigger.focus();
                }
            }
        }
        Ok(())
    }
}

fn lookup_column<'a>(state: &'a BoardState, id: &ColumnId) -> Result<&'a Column, EffectError> {
    state
        .column(id)
        .ok_or_else(|| EffectError::UnknownColumn(id.clone()))
}

fn item_at(column: &Column, index: usize) -> Result<&Item, EffectError> {
    column
        .items()
        .get(index)
        .ok_or_else(|| EffectError::MissingItem {
            column: column.id().clone(),
            index,
        })
}

// ===== Tests =====

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
