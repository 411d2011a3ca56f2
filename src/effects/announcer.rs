//! Accessibility announcement channel.

use std::collections::VecDeque;
use tracing::info;

/// How many past announcements a [`LiveRegion`] keeps by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// A polite screen-reader announcement channel.
pub trait Announcer {
    /// Replace the current announcement with `message`.
    fn announce(&mut self, message: &str);

    /// Withdraw any pending announcement and release channel state.
    fn cleanup(&mut self);
}

/// In-memory live region.
///
/// Holds the message currently on air plus a ring buffer of recent
/// announcements, oldest at the front. Once the buffer is full the oldest
/// message is evicted.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    current: Option<String>,
    history: VecDeque<String>,
    capacity: usize,
}

impl LiveRegion {
    /// Create an empty region retaining at most `capacity` past messages.
    ///
    /// A capacity of zero keeps no history; [`LiveRegion::current`] still
    /// tracks the message on air.
    pub fn new(capacity: usize) -> Self {
        Self {
            current: None,
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The message currently on air.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recent messages since the last cleanup, oldest first.
    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    /// Maximum number of messages kept in [`LiveRegion::history`].
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl Announcer for LiveRegion {
    fn announce(&mut self, message: &str) {
        info!(announcement = message, "Announcing");
        self.current = Some(message.to_string());

        if self.capacity == 0 {
            return;
        }
        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(message.to_string());
    }

    fn cleanup(&mut self) {
        self.current = None;
        self.history.clear();
    }
}
