//! Authoritative board state and its three mutations.
//!
//! Every mutation validates its inputs against the current snapshot, builds
//! the complete successor snapshot, and only then swaps it in. Readers holding
//! an earlier [`Arc<BoardState>`] keep seeing the old board; nobody can observe
//! a card that has left its source column but not yet reached its destination.

use crate::dnd::DropOutcome;
use crate::model::{
    BoardState, Column, ColumnId, InstanceId, Operation, Outcome, StateError, Trigger,
};
use crate::state::reorder::{check_index, check_insertion_index, reorder};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Owns the current [`BoardState`] snapshot.
#[derive(Debug)]
pub struct BoardStore {
    state: Arc<BoardState>,
    instance_id: InstanceId,
}

impl BoardStore {
    /// Create a store around the initial board. A fresh [`InstanceId`] is
    /// allocated for it.
    pub fn new(initial: BoardState) -> Self {
        Self {
            state: Arc::new(initial),
            instance_id: InstanceId::next(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Shared handle to the current snapshot; unaffected by later mutations.
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    /// Columns in display order.
    pub fn columns(&self) -> Vec<&Column> {
        self.state.columns()
    }

    /// Identifier of the board this store belongs to.
    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    /// Move the column at `start_index` to `finish_index`.
    ///
    /// `start_index == finish_index` changes nothing but is still recorded.
    ///
    /// # Errors
    ///
    /// [`StateError::IndexOutOfBounds`] unless both indices are below the
    /// column count.
    pub fn reorder_column(
        &mut self,
        start_index: usize,
        finish_index: usize,
        trigger: Trigger,
    ) -> Result<Operation, StateError> {
        let ids = self.state.ordered_column_ids();
        check_index(start_index, ids.len())?;
        check_index(finish_index, ids.len())?;

        let column_id = ids[start_index].clone();
        let ordered_column_ids = reorder(ids, start_index, finish_index);
        let operation = Operation::new(
            trigger,
            Outcome::ColumnReorder {
                column_id,
                start_index,
                finish_index,
            },
        );

        let column_map = self.state.column_map().clone();
        Ok(self.commit(column_map, ordered_column_ids, operation))
    }

    /// Move the item at `start_index` of `column_id` to `finish_index` of the
    /// same column.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownColumn`] or [`StateError::IndexOutOfBounds`].
    pub fn reorder_card(
        &mut self,
        column_id: &ColumnId,
        start_index: usize,
        finish_index: usize,
        trigger: Trigger,
    ) -> Result<Operation, StateError> {
        let column = self
            .state
            .column(column_id)
            .ok_or_else(|| StateError::UnknownColumn(column_id.clone()))?;
        check_index(start_index, column.len())?;
        check_index(finish_index, column.len())?;

        let updated = column.with_items(reorder(column.items(), start_index, finish_index));
        let mut column_map = self.state.column_map().clone();
        column_map.insert(column_id.clone(), updated);

        let operation = Operation::new(
            trigger,
            Outcome::CardReorder {
                column_id: column_id.clone(),
                start_index,
                finish_index,
            },
        );
        let ordered_column_ids = self.state.ordered_column_ids().to_vec();
        Ok(self.commit(column_map, ordered_column_ids, operation))
    }

    /// Move an item from one column into another.
    ///
    /// Returns `Ok(None)` without touching state when both columns are the
    /// same; same-column moves go through [`BoardStore::reorder_card`]. The
    /// destination index defaults to 0 (top of the column).
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownColumn`] for either column, or
    /// [`StateError::IndexOutOfBounds`] when the source index does not address
    /// an item or the destination index lies past the end of the destination.
    pub fn move_card(
        &mut self,
        start_column_id: &ColumnId,
        finish_column_id: &ColumnId,
        item_index_in_start_column: usize,
        item_index_in_finish_column: Option<usize>,
        trigger: Trigger,
    ) -> Result<Option<Operation>, StateError> {
        if start_column_id == finish_column_id {
            debug!(column = %start_column_id, "move_card within one column ignored");
            return Ok(None);
        }

        let source = self
            .state
            .column(start_column_id)
            .ok_or_else(|| StateError::UnknownColumn(start_column_id.clone()))?;
        let destination = self
            .state
            .column(finish_column_id)
            .ok_or_else(|| StateError::UnknownColumn(finish_column_id.clone()))?;

        check_index(item_index_in_start_column, source.len())?;
        let finish_index = item_index_in_finish_column.unwrap_or(0);
        check_insertion_index(finish_index, destination.len())?;

        let item = source.items()[item_index_in_start_column].clone();
        let source_items = source
            .items()
            .iter()
            .filter(|candidate| candidate.id() != item.id())
            .cloned()
            .collect();
        let mut destination_items = destination.items().to_vec();
        destination_items.insert(finish_index, item);

        let mut column_map: HashMap<ColumnId, Column> = self.state.column_map().clone();
        column_map.insert(start_column_id.clone(), source.with_items(source_items));
        column_map.insert(
            finish_column_id.clone(),
            destination.with_items(destination_items),
        );

        let operation = Operation::new(
            trigger,
            Outcome::CardMove {
                finish_column_id: finish_column_id.clone(),
                item_index_in_start_column,
                item_index_in_finish_column: finish_index,
            },
        );
        let ordered_column_ids = self.state.ordered_column_ids().to_vec();
        Ok(Some(self.commit(column_map, ordered_column_ids, operation)))
    }

    /// Apply an interpreted drop outcome.
    ///
    /// [`DropOutcome::Ignore`] yields `Ok(None)`.
    pub fn apply(
        &mut self,
        outcome: &DropOutcome,
        trigger: Trigger,
    ) -> Result<Option<Operation>, StateError> {
        match outcome {
            DropOutcome::Ignore => Ok(None),
            DropOutcome::ColumnReorder {
                start_index,
                finish_index,
            } => self
                .reorder_column(*start_index, *finish_index, trigger)
                .map(Some),
            DropOutcome::CardReorder {
                column_id,
                start_index,
                finish_index,
            } => self
                .reorder_card(column_id, *start_index, *finish_index, trigger)
                .map(Some),
            DropOutcome::CardMove {
                start_column_id,
                finish_column_id,
                item_index_in_start_column,
                item_index_in_finish_column,
            } => self.move_card(
                start_column_id,
                finish_column_id,
                *item_index_in_start_column,
                *item_index_in_finish_column,
                trigger,
            ),
        }
    }

    /// Swap in the successor snapshot and return the recorded operation.
    fn commit(
        &mut self,
        column_map: HashMap<ColumnId, Column>,
        ordered_column_ids: Vec<ColumnId>,
        operation: Operation,
    ) -> Operation {
        debug!(
            kind = operation.outcome.kind(),
            trigger = %operation.trigger,
            outcome = ?operation.outcome,
            "Committing board snapshot"
        );
        self.state = Arc::new(BoardState::from_parts(
            column_map,
            ordered_column_ids,
            Some(operation.clone()),
        ));
        operation
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "board_store_tests.rs"]
mod tests;
