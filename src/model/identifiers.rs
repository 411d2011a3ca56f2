//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Board-wide unique identifier of an item (card).
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: validates non-empty item ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidItemId::Empty);
        }
        Ok(Self(raw))
    }

    /// Construct from a value known to be non-empty (generated ids).
    pub(crate) fn new_unchecked(raw: String) -> Self {
        debug_assert!(!raw.is_empty());
        Self(raw)
    }

    /// Get the raw ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column identifier (e.g., "jira").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(String);

impl ColumnId {
    /// Smart constructor: validates non-empty column ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidColumnId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidColumnId::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn new_unchecked(raw: String) -> Self {
        debug_assert!(!raw.is_empty());
        Self(raw)
    }

    /// Get the raw ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque per-board token attached to every gesture.
///
/// Two boards in the same process never share a token, so a drop monitor can
/// reject gestures that started on another board. There is no public
/// constructor other than [`InstanceId::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

impl InstanceId {
    /// Allocate a fresh token, distinct from every token handed out before.
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board#{}", self.0)
    }
}

// ===== Error Types =====

/// Error constructing an [`ItemId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// The raw string was empty.
    #[error("Item ID cannot be empty")]
    Empty,
}

/// Error constructing a [`ColumnId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColumnId {
    /// The raw string was empty.
    #[error("Column ID cannot be empty")]
    Empty,
}

// ===== Tests =====
