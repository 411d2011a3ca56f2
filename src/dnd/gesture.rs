//! Structured hit data delivered by the gesture monitor on drop.

use super::hitbox::Edge;
use crate::model::{ColumnId, InstanceId, ItemId};

/// The entity being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A whole column, picked up by its header.
    Column(ColumnId),
    /// A single card.
    Card(ItemId),
}

/// What a drop target element represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column body (or its header).
    Column(ColumnId),
    /// A single card inside a column.
    Card(ItemId),
}

/// One drop target under the pointer, with its closest-edge classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTargetRecord {
    /// The element under the pointer.
    pub target: DropTarget,
    /// Closest edge, when the target tracks one.
    pub closest_edge: Option<Edge>,
}

impl DropTargetRecord {
    /// A column target without edge data.
    pub fn column(id: ColumnId) -> Self {
        Self {
            target: DropTarget::Column(id),
            closest_edge: None,
        }
    }

    /// A card target without edge data.
    pub fn card(id: ItemId) -> Self {
        Self {
            target: DropTarget::Card(id),
            closest_edge: None,
        }
    }

    /// Attach the closest edge.
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.closest_edge = Some(edge);
        self
    }
}

/// Drop targets at the start and end of a drag, innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragLocation {
    /// Targets under the pointer when the drag was released.
    pub current: Vec<DropTargetRecord>,
    /// Targets under the pointer when the drag began.
    pub initial: Vec<DropTargetRecord>,
}

/// A completed drag gesture, tagged with the board it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    /// Board the drag started on.
    pub instance_id: InstanceId,
    /// What was dragged.
    pub source: DragSource,
    /// Targets under the pointer at start and end.
    pub location: DragLocation,
}

impl DropEvent {
    /// Create a new drop event.
    pub fn new(instance_id: InstanceId, source: DragSource, location: DragLocation) -> Self {
        Self {
            instance_id,
            source,
            location,
        }
    }
}
