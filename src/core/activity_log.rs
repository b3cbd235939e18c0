// TestBench - core/activity_log.rs
//
// Bounded, newest-first activity log backing the on-screen "Logs" list.
//
// Storage is a VecDeque preallocated to the cap: new entries go on the
// front and the tail is trimmed, so memory stays bounded for any session
// length.

use crate::core::model::LogEntry;
use crate::util::constants::{ACTIVITY_LOG_CAPACITY, ACTIVITY_TIMESTAMP_FORMAT};
use std::collections::VecDeque;

/// Capped, most-recent-first event recorder.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Create an empty log holding at most `ACTIVITY_LOG_CAPACITY` entries.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(ACTIVITY_LOG_CAPACITY + 1),
            capacity: ACTIVITY_LOG_CAPACITY,
        }
    }

    /// Record `message` stamped with the current local time.
    pub fn record(&mut self, message: impl Into<String>) {
        let timestamp = chrono::Local::now()
            .format(ACTIVITY_TIMESTAMP_FORMAT)
            .to_string();
        self.record_at(timestamp, message);
    }

    /// Record `message` with an explicit timestamp string.
    ///
    /// After this call `len() == min(previous_len + 1, capacity())`.
    pub fn record_at(&mut self, timestamp: impl Into<String>, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            timestamp: timestamp.into(),
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recently recorded entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
