//! # Access log
//!
//! A session-local audit trail of which user viewed which entry. Append-only
//! and unbounded; it lives and dies with the process. Only the display is
//! capped, never the log itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::EntryKind;

/// Display shows at most this many entries (newest first).
pub const LOG_DISPLAY_CAP: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    pub user: String,
    pub item: String,
    pub section: String,
    pub kind: EntryKind,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct AccessLog {
    entries: Vec<AccessLogEntry>,
}

impl AccessLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record with a generation timestamp. Past entries are never
    /// mutated or removed.
    pub fn record(
        &mut self,
        user: impl Into<String>,
        item: impl Into<String>,
        section: impl Into<String>,
        kind: EntryKind,
    ) {
        self.entries.push(AccessLogEntry {
            user: user.into(),
            item: item.into(),
            section: section.into(),
            kind,
            at: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entries, newest first, capped at [`LOG_DISPLAY_CAP`].
    pub fn recent(&self) -> Vec<&AccessLogEntry> {
        self.entries.iter().rev().take(LOG_DISPLAY_CAP).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_newest_first() {
        let mut log = AccessLog::new();
        log.record("ana", "E1", "support", EntryKind::Article);
        log.record("ana", "E2", "support", EntryKind::Article);
        log.record("ana", "E3", "support", EntryKind::Case);

        let recent = log.recent();
        let items: Vec<&str> = recent.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["E3", "E2", "E1"]);
    }

    #[test]
    fn recent_caps_at_display_limit_without_dropping_history() {
        let mut log = AccessLog::new();
        for i in 0..25 {
            log.record("ana", format!("entry-{}", i), "support", EntryKind::Article);
        }
        assert_eq!(log.len(), 25);
        let recent = log.recent();
        assert_eq!(recent.len(), LOG_DISPLAY_CAP);
        assert_eq!(recent[0].item, "entry-24");
        assert_eq!(recent[LOG_DISPLAY_CAP - 1].item, "entry-5");
    }
}
