//! Deterministic seed data for demo boards and tests.
//!
//! People are picked from fixed name and role lists by position, so the same
//! position always yields the same item.

use crate::model::{BoardState, Column, ColumnId, Item, ItemId, StateError};

/// Display names paired with their avatar colour.
const PEOPLE: [(&str, &str); 10] = [
    ("Alexander", "FF5630"),
    ("Aliza", "57D9A3"),
    ("Alvin", "0065FF"),
    ("Angie", "00C7E5"),
    ("Arjun", "00C7E5"),
    ("Blair", "0065FF"),
    ("Claudia", "FFAB00"),
    ("Colin", "6554C0"),
    ("Ed", "8777D9"),
    ("Effie", "FFAB00"),
];

const ROLES: [&str; 11] = [
    "Engineer",
    "Senior Engineer",
    "Principal Engineer",
    "Engineering Manager",
    "Designer",
    "Senior Designer",
    "Lead Designer",
    "Design Manager",
    "Content Designer",
    "Product Manager",
    "Program Manager",
];

/// Columns of the basic board: (id, title).
const BASIC_COLUMNS: [(&str, &str); 3] = [
    ("confluence", "Confluence"),
    ("jira", "Jira"),
    ("trello", "Trello"),
];

/// Number of items per column on the basic board unless configured otherwise.
pub const DEFAULT_ITEMS_PER_COLUMN: usize = 10;

/// Avatar as an SVG data URL: a coloured circle with the name's initial.
pub fn avatar_url(name: &str, color: &str) -> String {
    let initial = name.chars().next().unwrap_or('?');
    format!(
        "data:image/svg+xml,%3Csvg width=\"40\" height=\"40\" viewBox=\"0 0 40 40\" fill=\"none\" \
         xmlns=\"http://www.w3.org/2000/svg\"%3E%3Ccircle cx=\"20\" cy=\"20\" r=\"20\" \
         fill=\"%23{color}\"/%3E%3Ctext x=\"20\" y=\"25\" text-anchor=\"middle\" fill=\"white\" \
         font-size=\"14\" font-weight=\"bold\"%3E{initial}%3C/text%3E%3C/svg%3E"
    )
}

/// The person at a given position, with id `id:{position}`.
pub fn person_at(position: usize) -> Item {
    let (name, color) = PEOPLE[position % PEOPLE.len()];
    let role = ROLES[position % ROLES.len()];
    Item::new(
        ItemId::new_unchecked(format!("id:{position}")),
        name,
        role,
        avatar_url(name, color),
    )
}

/// Hands out people at increasing positions, starting at 1.
///
/// Each board built from one generator therefore has board-wide unique ids.
#[derive(Debug, Clone, Default)]
pub struct PeopleGenerator {
    position: usize,
}

impl PeopleGenerator {
    /// Start from the first person.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next person as an item.
    pub fn next_person(&mut self) -> Item {
        self.position += 1;
        person_at(self.position)
    }

    /// Produce the next `amount` people.
    pub fn people(&mut self, amount: usize) -> Vec<Item> {
        (0..amount).map(|_| self.next_person()).collect()
    }
}

/// The three-column demo board (Confluence, Jira, Trello).
///
/// # Errors
///
/// Propagates [`StateError`] from [`BoardState::new`]; the generated data is
/// unique so this only fails if the seed lists are edited into duplicates.
pub fn basic_board(items_per_column: usize) -> Result<BoardState, StateError> {
    let mut people = PeopleGenerator::new();
    let columns = BASIC_COLUMNS
        .iter()
        .map(|(id, title)| {
            Column::new(
                ColumnId::new_unchecked((*id).to_string()),
                *title,
                people.people(items_per_column),
            )
        })
        .collect();
    BoardState::new(columns)
}
