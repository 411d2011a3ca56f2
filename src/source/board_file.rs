//! Boards described as JSON.
//!
//! ```json
//! {"columns": [{"columnId": "jira", "title": "Jira",
//!   "items": [{"userId": "id:1", "name": "Aliza", "role": "Engineer", "avatarUrl": ""}]}]}
//! ```
//!
//! Parsing goes through raw serde structs, which are then validated into the
//! model (non-empty ids, no duplicates). `avatarUrl` may be omitted.

use super::read_input;
use crate::model::{BoardState, Column, ColumnId, InputError, Item, ItemId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBoard {
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawColumn {
    column_id: String,
    title: String,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawItem {
    user_id: String,
    name: String,
    role: String,
    #[serde(default)]
    avatar_url: String,
}

impl RawItem {
    fn into_item(self) -> Result<Item, InputError> {
        Ok(Item::new(
            ItemId::new(self.user_id)?,
            self.name,
            self.role,
            self.avatar_url,
        ))
    }
}

impl RawColumn {
    fn into_column(self) -> Result<Column, InputError> {
        let items = self
            .items
            .into_iter()
            .map(RawItem::into_item)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Column::new(ColumnId::new(self.column_id)?, self.title, items))
    }
}

/// Load a board from a JSON file.
///
/// # Errors
///
/// [`InputError::FileNotFound`] and [`InputError::Io`] for read failures,
/// [`InputError::Json`] for malformed content, the identifier variants for
/// empty ids and [`InputError::Board`] for duplicates.
pub fn load_board(path: impl AsRef<Path>) -> Result<BoardState, InputError> {
    let path = path.as_ref();
    let content = read_input(path)?;
    let state = parse_board_at(&content, path)?;
    info!(
        path = %path.display(),
        columns = state.column_count(),
        items = state.total_items(),
        "Loaded board"
    );
    Ok(state)
}

/// Parse a board from JSON text.
///
/// # Errors
///
/// Same as [`load_board`] minus the read failures.
pub fn parse_board(content: &str) -> Result<BoardState, InputError> {
    parse_board_at(content, Path::new("<inline>"))
}

fn parse_board_at(content: &str, path: &Path) -> Result<BoardState, InputError> {
    let raw: RawBoard = serde_json::from_str(content).map_err(|e| InputError::Json {
        path: PathBuf::from(path),
        reason: e.to_string(),
    })?;
    let columns = raw
        .columns
        .into_iter()
        .map(RawColumn::into_column)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoardState::new(columns)?)
}
