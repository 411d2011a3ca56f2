//! Element registry.
//!
//! Maps card and column identifiers to non-owning handles of the elements the
//! rendering layer mounted for them. The registry is only consulted to drive
//! feedback (flash, focus); it is not part of board state.
//!
//! Registration hands back a [`Registration`] guard. Releasing the guard,
//! explicitly or by dropping it when the element unmounts, removes exactly the
//! entry it created.

use crate::model::{ColumnId, ItemId, RegistryError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Capability interface for a rendered element.
///
/// Implemented by whatever toolkit renders the board; the engine never sees
/// the concrete element type.
pub trait ElementHandle: fmt::Debug {
    /// Play the transient post-move highlight on this element.
    fn trigger_highlight(&self);

    /// Move input focus to this element.
    fn focus(&self);
}

/// Handles registered for a card.
#[derive(Debug, Clone)]
pub struct CardEntry {
    /// The card itself.
    pub element: Weak<dyn ElementHandle>,
    /// The button that opens the card's action menu; receives focus after a
    /// keyboard move across columns.
    pub action_menu_trigger: Weak<dyn ElementHandle>,
}

/// Handles registered for a column.
#[derive(Debug, Clone)]
pub struct ColumnEntry {
    /// The column element.
    pub element: Weak<dyn ElementHandle>,
}

/// A card entry resolved to live elements.
#[derive(Debug, Clone)]
pub struct CardElements {
    /// The card element.
    pub element: Rc<dyn ElementHandle>,
    /// Button that opens the card's action menu.
    pub action_menu_trigger: Rc<dyn ElementHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum EntryKey {
    Card(ItemId),
    Column(ColumnId),
}

#[derive(Debug, Default)]
struct Entries {
    cards: HashMap<ItemId, (u64, CardEntry)>,
    columns: HashMap<ColumnId, (u64, ColumnEntry)>,
    next_generation: u64,
}

impl Entries {
    fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Remove the entry for `key` only if it still belongs to `generation`.
    fn remove(&mut self, key: &EntryKey, generation: u64) -> bool {
        match key {
            EntryKey::Card(id) => {
                if self.cards.get(id).is_some_and(|(g, _)| *g == generation) {
                    self.cards.remove(id);
                    return true;
                }
            }
            EntryKey::Column(id) => {
                if self.columns.get(id).is_some_and(|(g, _)| *g == generation) {
                    self.columns.remove(id);
                    return true;
                }
            }
        }
        false
    }
}

/// Board-scoped registry of mounted elements.
///
/// Cloning yields another handle onto the same registry.
#[derive(Debug, Clone, Default)]
pub struct EntryRegistry {
    entries: Rc<RefCell<Entries>>,
}

impl EntryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mounted card. Replaces any earlier entry for `id`.
    pub fn register_card(&self, id: ItemId, entry: CardEntry) -> Registration {
        let mut entries = self.entries.borrow_mut();
        let generation = entries.next_generation();
        entries.cards.insert(id.clone(), (generation, entry));
        self.registration(EntryKey::Card(id), generation)
    }

    /// Register a mounted column. Replaces any earlier entry for `id`.
    pub fn register_column(&self, id: ColumnId, entry: ColumnEntry) -> Registration {
        let mut entries = self.entries.borrow_mut();
        let generation = entries.next_generation();
        entries.columns.insert(id.clone(), (generation, entry));
        self.registration(EntryKey::Column(id), generation)
    }

    fn registration(&self, key: EntryKey, generation: u64) -> Registration {
        Registration {
            entries: Rc::downgrade(&self.entries),
            key,
            generation,
            released: false,
        }
    }

    /// Live elements for a card.
    ///
    /// # Errors
    ///
    /// [`RegistryError::CardNotRegistered`] when nothing is mounted for `id`,
    /// [`RegistryError::ElementGone`] when the element was dropped without
    /// releasing its registration.
    pub fn get_card(&self, id: &ItemId) -> Result<CardElements, RegistryError> {
        let entries = self.entries.borrow();
        let (_, entry) = entries
            .cards
            .get(id)
            .ok_or_else(|| RegistryError::CardNotRegistered(id.clone()))?;
        let gone = || RegistryError::ElementGone(id.to_string());
        Ok(CardElements {
            element: entry.element.upgrade().ok_or_else(gone)?,
            action_menu_trigger: entry.action_menu_trigger.upgrade().ok_or_else(gone)?,
        })
    }

    /// Live element for a column.
    ///
    /// # Errors
    ///
    /// Same contract as [`EntryRegistry::get_card`].
    pub fn get_column(&self, id: &ColumnId) -> Result<Rc<dyn ElementHandle>, RegistryError> {
        let entries = self.entries.borrow();
        let (_, entry) = entries
            .columns
            .get(id)
            .ok_or_else(|| RegistryError::ColumnNotRegistered(id.clone()))?;
        entry
            .element
            .upgrade()
            .ok_or_else(|| RegistryError::ElementGone(id.to_string()))
    }

    /// Number of registered cards.
    pub fn card_count(&self) -> usize {
        self.entries.borrow().cards.len()
    }

    /// Number of registered columns.
    pub fn column_count(&self) -> usize {
        self.entries.borrow().columns.len()
    }
}

/// Scoped release capability returned by registration.
///
/// Dropping it unregisters the entry. Release is idempotent and never removes
/// a newer registration made under the same identifier.
#[must_use = "dropping a Registration unregisters the element immediately"]
#[derive(Debug)]
pub struct Registration {
    entries: Weak<RefCell<Entries>>,
    key: EntryKey,
    generation: u64,
    released: bool,
}

impl Registration {
    /// Unregister now. Returns whether an entry was removed.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        match self.entries.upgrade() {
            Some(entries) => entries.borrow_mut().remove(&self.key, self.generation),
            None => false,
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}
