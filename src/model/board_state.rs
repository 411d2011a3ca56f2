//! Immutable board snapshot.

use super::column::Column;
use super::error::StateError;
use super::identifiers::{ColumnId, ItemId};
use super::operation::Operation;
use std::collections::{HashMap, HashSet};

/// The authoritative board state. Pure data, no side effects.
///
/// # Invariants
///
/// - `ordered_column_ids` and the keys of `column_map` are the same set
///   (bijection, no duplicates).
/// - Every item identifier appears in exactly one column.
///
/// Both are established by [`BoardState::new`] and preserved by every store
/// operation. Snapshots are never mutated in place; the store builds a new
/// value and swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    column_map: HashMap<ColumnId, Column>,
    ordered_column_ids: Vec<ColumnId>,
    last_operation: Option<Operation>,
}

impl BoardState {
    /// Build the initial state from columns in display order.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateColumn`] or [`StateError::DuplicateItem`]
    /// when identifiers are not unique.
    pub fn new(columns: Vec<Column>) -> Result<Self, StateError> {
        let mut seen_items: HashSet<ItemId> = HashSet::new();
        let mut column_map = HashMap::with_capacity(columns.len());
        let mut ordered_column_ids = Vec::with_capacity(columns.len());

        for column in columns {
            for item in column.items() {
                if !seen_items.insert(item.id().clone()) {
                    return Err(StateError::DuplicateItem(item.id().clone()));
                }
            }
            let id = column.id().clone();
            if column_map.contains_key(&id) {
                return Err(StateError::DuplicateColumn(id));
            }
            ordered_column_ids.push(id.clone());
            column_map.insert(id, column);
        }

        Ok(Self {
            column_map,
            ordered_column_ids,
            last_operation: None,
        })
    }

    /// Assemble a successor snapshot. Callers must uphold the invariants.
    pub(crate) fn from_parts(
        column_map: HashMap<ColumnId, Column>,
        ordered_column_ids: Vec<ColumnId>,
        last_operation: Option<Operation>,
    ) -> Self {
        debug_assert_eq!(column_map.len(), ordered_column_ids.len());
        Self {
            column_map,
            ordered_column_ids,
            last_operation,
        }
    }

    /// Look up a column by identifier.
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.column_map.get(id)
    }

    pub(crate) fn column_map(&self) -> &HashMap<ColumnId, Column> {
        &self.column_map
    }

    /// Column identifiers in display order.
    pub fn ordered_column_ids(&self) -> &[ColumnId] {
        &self.ordered_column_ids
    }

    /// Columns in display order.
    pub fn columns(&self) -> Vec<&Column> {
        self.ordered_column_ids
            .iter()
            .filter_map(|id| self.column_map.get(id))
            .collect()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.ordered_column_ids.len()
    }

    /// Position of a column in display order.
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.ordered_column_ids.iter().position(|c| c == id)
    }

    /// The most recently applied operation, if any.
    pub fn last_operation(&self) -> Option<&Operation> {
        self.last_operation.as_ref()
    }

    /// Number of items across all columns.
    pub fn total_items(&self) -> usize {
        self.column_map.values().map(Column::len).sum()
    }

    /// Find the column holding an item and the item's position in it.
    pub fn locate_item(&self, item_id: &ItemId) -> Option<(&Column, usize)> {
        self.columns()
            .into_iter()
            .find_map(|column| column.position_of(item_id).map(|index| (column, index)))
    }
}
