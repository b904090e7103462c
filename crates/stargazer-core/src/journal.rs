//! The player-facing journal: a bounded log of recent happenings.
//!
//! Only the most recent entries are kept; pushing past capacity drops the
//! oldest one. This is a game record, not a tracing sink.

use std::collections::VecDeque;
use std::fmt;

/// One journal line, stamped with the calendar position it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Academic year.
    pub year: u32,
    /// Calendar month value.
    pub month: u8,
    /// Week of the month.
    pub week: u8,
    /// What happened.
    pub message: String,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Y{} M{:02} W{}] {}",
            self.year, self.month, self.week, self.message
        )
    }
}

/// Bounded, oldest-first log.
#[derive(Debug, Clone)]
pub struct Journal {
    capacity: usize,
    entries: VecDeque<JournalEntry>,
}

impl Journal {
    /// An empty journal keeping at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: JournalEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    /// The newest entry.
    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.back()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum retained entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> JournalEntry {
        JournalEntry {
            year: 1,
            month: 8,
            week: 1,
            message: message.to_owned(),
        }
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let mut journal = Journal::new(2);
        journal.push(entry("a"));
        journal.push(entry("b"));
        journal.push(entry("c"));
        let messages: Vec<&str> = journal.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["b", "c"]);
        assert_eq!(journal.latest().map(|e| e.message.as_str()), Some("c"));
    }

    #[test]
    fn zero_capacity_still_keeps_the_latest() {
        let mut journal = Journal::new(0);
        journal.push(entry("only"));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn entries_display_their_stamp() {
        assert_eq!(entry("hello").to_string(), "[Y1 M08 W1] hello");
    }
}
