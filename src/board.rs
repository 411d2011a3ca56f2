//! The board component.
//!
//! Ties the store, the drop interpreter, the element registry and the effect
//! coordinator together behind one surface. Every recorded operation is
//! followed by its post-move effects before the call returns.

use crate::dnd::{interpret_drop, DropEvent};
use crate::effects::{Announcer, LiveRegion, PostMoveEffectCoordinator};
use crate::model::{
    BoardCommand, BoardError, BoardState, Column, ColumnId, InstanceId, ItemId, Operation, Trigger,
};
use crate::registry::{CardEntry, ColumnEntry, EntryRegistry, Registration};
use crate::state::{handle_command, BoardStore};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What happened to a delivered drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropDisposition {
    /// The monitor is inactive or the drop belongs to another board.
    Skipped,
    /// Dropped outside every target, or a same-column move.
    Ignored,
    /// State changed and effects were delivered.
    Applied(Operation),
}

/// A kanban board with drag-and-drop and keyboard reordering.
#[derive(Debug)]
pub struct Board<A: Announcer = LiveRegion> {
    store: BoardStore,
    registry: EntryRegistry,
    effects: PostMoveEffectCoordinator<A>,
    active: bool,
}

impl<A: Announcer> Board<A> {
    /// Create an inactive board. Call [`Board::activate`] to accept drops.
    pub fn new(initial: BoardState, announcer: A) -> Self {
        Self {
            store: BoardStore::new(initial),
            registry: EntryRegistry::new(),
            effects: PostMoveEffectCoordinator::new(announcer),
            active: false,
        }
    }

    /// Current board state.
    pub fn state(&self) -> &BoardState {
        self.store.state()
    }

    /// Shared handle to the current state, cheap to hold across commits.
    pub fn snapshot(&self) -> Arc<BoardState> {
        self.store.snapshot()
    }

    /// Columns in display order.
    pub fn columns(&self) -> Vec<&Column> {
        self.store.columns()
    }

    /// Identifier tagging drops that belong to this board.
    pub fn instance_id(&self) -> InstanceId {
        self.store.instance_id()
    }

    /// Another handle onto this board's element registry.
    pub fn registry(&self) -> &EntryRegistry {
        &self.registry
    }

    /// The announcement channel.
    pub fn announcer(&self) -> &A {
        self.effects.announcer()
    }

    /// Register a mounted card. The entry lives until the guard drops.
    pub fn register_card(&self, id: ItemId, entry: CardEntry) -> Registration {
        self.registry.register_card(id, entry)
    }

    /// Register a mounted column. The entry lives until the guard drops.
    pub fn register_column(&self, id: ColumnId, entry: ColumnEntry) -> Registration {
        self.registry.register_column(id, entry)
    }

    /// Move the column at `start_index` to `finish_index`.
    ///
    /// # Errors
    ///
    /// [`BoardError::State`] for out-of-range indices (state unchanged),
    /// [`BoardError::Effect`] when feedback failed after the commit.
    pub fn reorder_column(
        &mut self,
        start_index: usize,
        finish_index: usize,
        trigger: Trigger,
    ) -> Result<Operation, BoardError> {
        let operation = self
            .store
            .reorder_column(start_index, finish_index, trigger)
            .inspect_err(|e| error!(error = %e, "Column reorder rejected"))?;
        self.handle_post_move_effects(&operation)?;
        Ok(operation)
    }

    /// Move a card within `column_id`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Board::reorder_column`].
    pub fn reorder_card(
        &mut self,
        column_id: &ColumnId,
        start_index: usize,
        finish_index: usize,
        trigger: Trigger,
    ) -> Result<Operation, BoardError> {
        let operation = self
            .store
            .reorder_card(column_id, start_index, finish_index, trigger)
            .inspect_err(|e| error!(error = %e, column = %column_id, "Card reorder rejected"))?;
        self.handle_post_move_effects(&operation)?;
        Ok(operation)
    }

    /// Move a card between columns. `None` as the finish index inserts at the
    /// top. Identical columns are a no-op and yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Board::reorder_column`].
    pub fn move_card(
        &mut self,
        start_column_id: &ColumnId,
        finish_column_id: &ColumnId,
        item_index_in_start_column: usize,
        item_index_in_finish_column: Option<usize>,
        trigger: Trigger,
    ) -> Result<Option<Operation>, BoardError> {
        let operation = self
            .store
            .move_card(
                start_column_id,
                finish_column_id,
                item_index_in_start_column,
                item_index_in_finish_column,
                trigger,
            )
            .inspect_err(|e| error!(error = %e, "Card move rejected"))?;
        self.after_commit(operation)
    }

    /// Execute a keyboard command from an action menu.
    ///
    /// # Errors
    ///
    /// Same contract as [`Board::reorder_column`].
    pub fn execute(&mut self, command: BoardCommand) -> Result<Option<Operation>, BoardError> {
        debug!(?command, "Executing command");
        let operation = handle_command(&mut self.store, command)
            .inspect_err(|e| error!(error = %e, "Command rejected"))?;
        self.after_commit(operation)
    }

    /// Deliver flash, announcement and focus for an operation that is already
    /// applied to the current state.
    ///
    /// # Errors
    ///
    /// [`BoardError::Effect`] when the moved element is not registered or the
    /// operation does not match the current state.
    pub fn handle_post_move_effects(&mut self, operation: &Operation) -> Result<(), BoardError> {
        self.effects
            .handle(self.store.state(), &self.registry, operation)
            .inspect_err(|e| {
                error!(error = %e, kind = operation.outcome.kind(), "Post-move effect failed")
            })?;
        Ok(())
    }

    /// Start accepting drops.
    pub fn activate(&mut self) {
        if !self.active {
            debug!(instance = %self.instance_id(), "Drop monitor installed");
            self.active = true;
        }
    }

    /// Stop accepting drops and clean up the announcement channel.
    pub fn deactivate(&mut self) {
        if self.active {
            debug!(instance = %self.instance_id(), "Drop monitor removed");
            self.active = false;
            self.effects.announcer_mut().cleanup();
        }
    }

    /// Whether drops are currently accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a completed drag gesture.
    ///
    /// Drops arriving while inactive, or tagged with another board's instance,
    /// are skipped without touching state.
    ///
    /// # Errors
    ///
    /// [`BoardError::Drop`] when the gesture does not match the board; state is
    /// unchanged. Otherwise the contract of [`Board::reorder_column`].
    pub fn handle_drop(&mut self, event: &DropEvent) -> Result<DropDisposition, BoardError> {
        if !self.active {
            debug!("Drop received while inactive");
            return Ok(DropDisposition::Skipped);
        }
        if event.instance_id != self.instance_id() {
            warn!(
                expected = %self.instance_id(),
                got = %event.instance_id,
                "Skipping drop from another board"
            );
            return Ok(DropDisposition::Skipped);
        }

        let outcome = interpret_drop(self.store.state(), event)
            .inspect_err(|e| error!(error = %e, source = ?event.source, "Drop rejected"))?;
        let operation = self
            .store
            .apply(&outcome, Trigger::Pointer)
            .inspect_err(|e| error!(error = %e, ?outcome, "Drop outcome rejected"))?;

        match self.after_commit(operation)? {
            Some(operation) => {
                info!(kind = operation.outcome.kind(), "Drop applied");
                Ok(DropDisposition::Applied(operation))
            }
            None => Ok(DropDisposition::Ignored),
        }
    }

    fn after_commit(
        &mut self,
        operation: Option<Operation>,
    ) -> Result<Option<Operation>, BoardError> {
        if let Some(operation) = &operation {
            self.handle_post_move_effects(operation)?;
        }
        Ok(operation)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
