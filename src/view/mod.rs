//! Console rendering layer.
//!
//! A minimal stand-in for a real renderer: it mounts one [`ConsoleElement`]
//! per column and card (plus one per card action-menu trigger), registers
//! them with the board's registry, and prints the board as text.

use crate::model::{BoardState, ColumnId, ItemId};
use crate::registry::{CardEntry, ColumnEntry, ElementHandle, EntryRegistry, Registration};
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::rc::Rc;
use tracing::{debug, info};

/// A mounted console element that records the effects played on it.
#[derive(Debug)]
pub struct ConsoleElement {
    label: String,
    flashes: Cell<usize>,
    focus_count: Cell<usize>,
}

impl ConsoleElement {
    /// Create an element named `label` in logs.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            flashes: Cell::new(0),
            focus_count: Cell::new(0),
        }
    }

    /// Number of post-move highlights played on this element.
    pub fn flashes(&self) -> usize {
        self.flashes.get()
    }

    /// Number of times this element received focus.
    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }
}

impl ElementHandle for ConsoleElement {
    fn trigger_highlight(&self) {
        self.flashes.set(self.flashes.get() + 1);
        info!(element = %self.label, "Flash");
    }

    fn focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
        debug!(element = %self.label, "Focus");
    }
}

struct MountedCard {
    element: Rc<ConsoleElement>,
    action_menu_trigger: Rc<ConsoleElement>,
    _registration: Registration,
}

struct MountedColumn {
    element: Rc<ConsoleElement>,
    _registration: Registration,
}

/// Elements mounted for every column and card of a board.
///
/// Elements stay registered for as long as this value lives. Items keep their
/// element when they move between columns, the same way a keyed renderer
/// would reuse them.
pub struct MountedBoard {
    columns: HashMap<ColumnId, MountedColumn>,
    cards: HashMap<ItemId, MountedCard>,
}

impl std::fmt::Debug for MountedBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedBoard")
            .field("columns", &self.columns.len())
            .field("cards", &self.cards.len())
            .finish()
    }
}

impl MountedBoard {
    /// Mount and register elements for everything on `state`.
    pub fn mount(state: &BoardState, registry: &EntryRegistry) -> Self {
        let mut columns = HashMap::new();
        let mut cards = HashMap::new();

        for column in state.columns() {
            let element = Rc::new(ConsoleElement::new(column.title()));
            let handle: Rc<dyn ElementHandle> = element.clone();
            let registration = registry.register_column(
                column.id().clone(),
                ColumnEntry {
                    element: Rc::downgrade(&handle),
                },
            );
            columns.insert(
                column.id().clone(),
                MountedColumn {
                    element,
                    _registration: registration,
                },
            );

            for item in column.items() {
                let element = Rc::new(ConsoleElement::new(item.id().to_string()));
                let trigger = Rc::new(ConsoleElement::new(format!("{} menu", item.id())));
                let element_handle: Rc<dyn ElementHandle> = element.clone();
                let trigger_handle: Rc<dyn ElementHandle> = trigger.clone();
                let registration = registry.register_card(
                    item.id().clone(),
                    CardEntry {
                        element: Rc::downgrade(&element_handle),
                        action_menu_trigger: Rc::downgrade(&trigger_handle),
                    },
                );
                cards.insert(
                    item.id().clone(),
                    MountedCard {
                        element,
                        action_menu_trigger: trigger,
                        _registration: registration,
                    },
                );
            }
        }

        Self { columns, cards }
    }

    /// Element mounted for a column.
    pub fn column(&self, id: &ColumnId) -> Option<&ConsoleElement> {
        self.columns.get(id).map(|mounted| mounted.element.as_ref())
    }

    /// Element mounted for a card.
    pub fn card(&self, id: &ItemId) -> Option<&ConsoleElement> {
        self.cards.get(id).map(|mounted| mounted.element.as_ref())
    }

    /// Action-menu trigger mounted for a card.
    pub fn card_menu_trigger(&self, id: &ItemId) -> Option<&ConsoleElement> {
        self.cards
            .get(id)
            .map(|mounted| mounted.action_menu_trigger.as_ref())
    }

    /// Unmount a card: its element is dropped and its registration released.
    pub fn unmount_card(&mut self, id: &ItemId) -> bool {
        self.cards.remove(id).is_some()
    }

    /// Total highlights played on any mounted element.
    pub fn total_flashes(&self) -> usize {
        let columns: usize = self.columns.values().map(|m| m.element.flashes()).sum();
        let cards: usize = self.cards.values().map(|m| m.element.flashes()).sum();
        columns + cards
    }
}

/// Render the board as plain text, one column per block.
pub fn render_board(state: &BoardState) -> String {
    let mut out = String::new();
    for column in state.columns() {
        let _ = writeln!(out, "{} ({})", column.title(), column.len());
        for (index, item) in column.items().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} {} ({})",
                index + 1,
                item.id(),
                item.name(),
                item.role()
            );
        }
    }
    out
}
