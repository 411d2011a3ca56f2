//! Board content: items and the columns that hold them.

use super::identifiers::{ColumnId, ItemId};

/// A single card on the board.
///
/// Items are immutable once created; moving an item relocates the value
/// between columns without changing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    role: String,
    avatar_url: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        role: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display name, used in announcements.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job title shown under the name.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Avatar image location.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}

/// A titled, ordered container of items.
///
/// Item order is significant: every index-based operation and every
/// announcement position refers to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    title: String,
    items: Vec<Item>,
}

impl Column {
    /// Create a column holding `items` in order.
    pub fn new(id: ColumnId, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id,
            title: title.into(),
            items,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Display title, used in announcements.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the column holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item with the given identifier, if it lives here.
    pub fn position_of(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == item_id)
    }

    /// Same column with a replaced item sequence.
    pub(crate) fn with_items(&self, items: Vec<Item>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            items,
        }
    }
}
