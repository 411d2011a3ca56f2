//! Recorded drop gestures.
//!
//! A replay file is a JSON array of drops, each a drag source plus the drop
//! targets under the pointer at the start and end of the gesture, innermost
//! first:
//!
//! ```json
//! [{"source": {"type": "card", "itemId": "id:2"},
//!   "location": {
//!     "current": [{"type": "card", "itemId": "id:13", "closestEdge": "bottom"},
//!                 {"type": "column", "columnId": "jira"}],
//!     "initial": [{"type": "card", "itemId": "id:2"},
//!                 {"type": "column", "columnId": "confluence"}]}}]
//! ```
//!
//! Recordings carry no board instance; one is attached at replay time.

use super::read_input;
use crate::dnd::{DragLocation, DragSource, DropEvent, DropTarget, DropTargetRecord, Edge};
use crate::model::{ColumnId, InputError, InstanceId, ItemId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawSource {
    Card {
        #[serde(rename = "itemId")]
        item_id: String,
    },
    Column {
        #[serde(rename = "columnId")]
        column_id: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawTarget {
    Card {
        #[serde(rename = "itemId")]
        item_id: String,
        #[serde(default, rename = "closestEdge")]
        closest_edge: Option<String>,
    },
    Column {
        #[serde(rename = "columnId")]
        column_id: String,
        #[serde(default, rename = "closestEdge")]
        closest_edge: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLocation {
    #[serde(default)]
    current: Vec<RawTarget>,
    #[serde(default)]
    initial: Vec<RawTarget>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDrop {
    source: RawSource,
    #[serde(default)]
    location: RawLocation,
}

/// A drop gesture not yet bound to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDrop {
    /// What was dragged.
    pub source: DragSource,
    /// Targets at the start and end of the gesture.
    pub location: DragLocation,
}

impl RecordedDrop {
    /// Bind the recording to a board instance.
    pub fn into_event(self, instance_id: InstanceId) -> DropEvent {
        DropEvent::new(instance_id, self.source, self.location)
    }
}

/// Load recorded drops from a JSON file.
///
/// # Errors
///
/// [`InputError::FileNotFound`] and [`InputError::Io`] for read failures,
/// [`InputError::Json`] for malformed content, [`InputError::Replay`] for an
/// unknown edge and the identifier variants for empty ids.
pub fn load_replay(path: impl AsRef<Path>) -> Result<Vec<RecordedDrop>, InputError> {
    let path = path.as_ref();
    let content = read_input(path)?;
    let drops = parse_replay_at(&content, path)?;
    info!(path = %path.display(), drops = drops.len(), "Loaded replay");
    Ok(drops)
}

/// Parse recorded drops from JSON text.
///
/// # Errors
///
/// Same as [`load_replay`] minus the read failures.
pub fn parse_replay(content: &str) -> Result<Vec<RecordedDrop>, InputError> {
    parse_replay_at(content, Path::new("<inline>"))
}

fn parse_replay_at(content: &str, path: &Path) -> Result<Vec<RecordedDrop>, InputError> {
    let raw: Vec<RawDrop> = serde_json::from_str(content).map_err(|e| InputError::Json {
        path: PathBuf::from(path),
        reason: e.to_string(),
    })?;
    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| convert_drop(index, raw))
        .collect()
}

fn convert_drop(index: usize, raw: RawDrop) -> Result<RecordedDrop, InputError> {
    let source = match raw.source {
        RawSource::Card { item_id } => DragSource::Card(ItemId::new(item_id)?),
        RawSource::Column { column_id } => DragSource::Column(ColumnId::new(column_id)?),
    };
    let targets = |raw: Vec<RawTarget>| -> Result<Vec<DropTargetRecord>, InputError> {
        raw.into_iter().map(|t| convert_target(index, t)).collect()
    };
    Ok(RecordedDrop {
        source,
        location: DragLocation {
            current: targets(raw.location.current)?,
            initial: targets(raw.location.initial)?,
        },
    })
}

fn convert_target(index: usize, raw: RawTarget) -> Result<DropTargetRecord, InputError> {
    let (target, edge) = match raw {
        RawTarget::Card {
            item_id,
            closest_edge,
        } => (DropTarget::Card(ItemId::new(item_id)?), closest_edge),
        RawTarget::Column {
            column_id,
            closest_edge,
        } => (DropTarget::Column(ColumnId::new(column_id)?), closest_edge),
    };
    let closest_edge = edge
        .map(|name| name.parse::<Edge>())
        .transpose()
        .map_err(|e| InputError::Replay {
            index,
            reason: e.to_string(),
        })?;
    Ok(DropTargetRecord {
        target,
        closest_edge,
    })
}
