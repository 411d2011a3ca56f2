//! Edge classification and the destination-index rule.

use std::fmt;
use std::str::FromStr;

/// Layout axis along which a list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right (columns).
    Horizontal,
    /// Top to bottom (cards).
    Vertical,
}

/// Side of a hovered drop target the pointer is closest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Upper edge.
    Top,
    /// Lower edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl Edge {
    /// Whether this edge means "insert after the target" along `axis`.
    ///
    /// Only `Bottom` on the vertical axis and `Right` on the horizontal axis
    /// are trailing; every other combination counts as leading.
    pub fn is_trailing(self, axis: Axis) -> bool {
        matches!(
            (axis, self),
            (Axis::Vertical, Edge::Bottom) | (Axis::Horizontal, Edge::Right)
        )
    }

    /// Lowercase name, as used in replay files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an edge name is not one of the four sides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown edge '{0}'")]
pub struct InvalidEdge(pub String);

impl FromStr for Edge {
    type Err = InvalidEdge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            "right" => Ok(Edge::Right),
            other => Err(InvalidEdge(other.to_string())),
        }
    }
}

/// Final index for an item dragged from `start_index` onto the target at
/// `index_of_target`, in remove-then-insert terms.
///
/// Without an edge the item lands on the target's index. With an edge the
/// insertion point is just before (leading edge) or just after (trailing
/// edge) the target; removing the item first shifts everything behind it one
/// place towards the front, so the insertion point drops by one whenever the
/// item started before it.
///
/// For `index_of_target < len` the result is always in `0..len`, i.e. a valid
/// finish index for a reorder of that list.
pub fn reorder_destination_index(
    start_index: usize,
    index_of_target: usize,
    closest_edge: Option<Edge>,
    axis: Axis,
) -> usize {
    let Some(edge) = closest_edge else {
        return index_of_target;
    };

    let candidate = if edge.is_trailing(axis) {
        index_of_target + 1
    } else {
        index_of_target
    };

    if start_index < candidate {
        candidate - 1
    } else {
        candidate
    }
}
