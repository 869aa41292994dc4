//! Bounded, newest-first question log.
//!
//! The matcher never touches this; callers record each answered (or
//! unanswered) question after matching.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::select::MatchOutcome;

/// Title stored for questions that matched no module.
pub const NO_MATCH_TITLE: &str = "No match found";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub question: String,
    pub module_title: String,
    pub confidence: u8,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn from_outcome(question: &str, outcome: &MatchOutcome<'_>, at: DateTime<Utc>) -> Self {
        let (module_title, confidence) = match outcome.matched() {
            Some(m) => (m.module.title.clone(), m.confidence),
            None => (NO_MATCH_TITLE.to_string(), 0),
        };
        Self {
            question: question.to_string(),
            module_title,
            confidence,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn is_no_match(&self) -> bool {
        self.module_title == NO_MATCH_TITLE
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionHistory {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for QuestionHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl QuestionHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Rebuild from persisted entries (assumed newest first), applying the limit.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, limit: usize) -> Self {
        entries.truncate(limit);
        Self { entries, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    pub fn record(&mut self, question: &str, outcome: &MatchOutcome<'_>, at: DateTime<Utc>) {
        self.push(HistoryEntry::from_outcome(question, outcome, at));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
