//! Bounded event history.
//!
//! Every pump transition and every auto-mode evaluation leaves a
//! timestamped line here. The log keeps the newest entries first and evicts
//! from the tail once its capacity is reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// One timestamped history line. Immutable once created.
///
/// # Example
///
/// ```rust
/// use pumpwise::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("Pump stopped");
/// assert_eq!(entry.message(), "Pump stopped");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    timestamp: DateTime<Utc>,
    message: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current wall-clock time.
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(Utc::now(), message)
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Newest-first log capped at a fixed capacity.
///
/// # Example
///
/// ```rust
/// use pumpwise::core::HistoryLog;
///
/// let mut log = HistoryLog::with_capacity(2);
/// log.record("first");
/// log.record("second");
/// log.record("third");
///
/// let messages: Vec<&str> = log.entries().map(|e| e.message()).collect();
/// assert_eq!(messages, vec!["third", "second"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log holding at most `capacity` entries.
    ///
    /// A capacity of zero yields a log that discards everything. Storage
    /// grows with the entries actually recorded, not with `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    /// Append a message stamped with the current time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.push(HistoryEntry::new(message));
    }

    /// Insert an entry at the head, evicting the oldest if over capacity.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
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

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Time covered by the retained entries.
    ///
    /// Returns `None` for an empty log, and for entries whose clock went
    /// backwards.
    pub fn span(&self) -> Option<Duration> {
        let (newest, oldest) = (self.latest()?, self.oldest()?);
        newest
            .timestamp
            .signed_duration_since(oldest.timestamp)
            .to_std()
            .ok()
    }

    /// Copy of this log with a different capacity, keeping the newest
    /// entries that fit.
    pub fn resized(&self, capacity: usize) -> Self {
        Self {
            capacity,
            entries: self.entries.iter().take(capacity).cloned().collect(),
        }
    }

    /// Owned copy of the entries, newest first.
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
