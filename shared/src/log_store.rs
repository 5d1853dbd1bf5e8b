//! Append-only store of log entries shown by the log viewer.
//!
//! Entries keep their arrival order. Ids come from a counter owned by the
//! store and are never reused, so they stay valid list keys across
//! `clear()` and retention eviction.

use crate::types::{log_entry::LogEntry, log_message::LogMessage};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogStore {
    entries: VecDeque<LogEntry>,
    next_id: u64,
    retention: Option<usize>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, evicting the oldest first.
    pub fn with_retention(limit: usize) -> Self {
        Self {
            retention: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn append(&mut self, message: LogMessage, time: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if let Some(limit) = self.retention {
            while self.entries.len() >= limit {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(LogEntry {
            id,
            time: time.into(),
            level: message.level,
            payload: message.payload,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries whose payload contains `search`, ignoring case.
    pub fn for_display(&self, search: &str) -> Vec<LogEntry> {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().cloned().collect();
        }
        self.entries
            .iter()
            .filter(|e| e.payload.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::log_level::LogLevel;

    fn msg(level: LogLevel, payload: &str) -> LogMessage {
        LogMessage::new(level, payload)
    }

    #[test]
    fn starts_empty() {
        let store = LogStore::new();
        assert!(store.is_empty());
        assert!(store.for_display("").is_empty());
    }

    #[test]
    fn append_grows_by_one_and_preserves_prior_entries() {
        let mut store = LogStore::new();
        store.append(msg(LogLevel::Info, "first"), "10:00:00");
        store.append(msg(LogLevel::Error, "second"), "10:00:01");
        let before = store.for_display("");

        store.append(msg(LogLevel::Debug, "third"), "10:00:02");
        let after = store.for_display("");

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after[2].payload, "third");
        assert_eq!(after[2].level, LogLevel::Debug);
        assert_eq!(after[2].time, "10:00:02");
    }

    #[test]
    fn ids_are_unique_and_survive_clear() {
        let mut store = LogStore::new();
        let a = store.append(msg(LogLevel::Info, "a"), "t");
        let b = store.append(msg(LogLevel::Info, "b"), "t");
        store.clear();
        assert!(store.is_empty());
        let c = store.append(msg(LogLevel::Info, "c"), "t");
        assert!(a < b && b < c);
        assert_eq!(store.get(0).map(|e| e.id), Some(c));
    }

    #[test]
    fn retention_evicts_oldest() {
        let mut store = LogStore::with_retention(2);
        store.append(msg(LogLevel::Info, "a"), "t");
        store.append(msg(LogLevel::Info, "b"), "t");
        store.append(msg(LogLevel::Info, "c"), "t");
        let payloads: Vec<_> = store.entries().map(|e| e.payload.as_str()).collect();
        assert_eq!(payloads, ["b", "c"]);
    }

    #[test]
    fn search_filters_case_insensitively_in_order() {
        let mut store = LogStore::new();
        store.append(msg(LogLevel::Info, "[TCP] dial example.com"), "t");
        store.append(msg(LogLevel::Warning, "dns timeout"), "t");
        store.append(msg(LogLevel::Info, "[UDP] Example.org"), "t");

        let hits = store.for_display("  EXAMPLE ");
        assert_eq!(hits.len(), 2);
        assert!(hits[0].id < hits[1].id);
        assert!(hits[1].payload.contains("Example.org"));
        assert_eq!(store.for_display("").len(), 3);
    }
}
