//! Reverse-chronological tap history.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::counter::Counter;

/// 12-hour clock with zero-padded hour, e.g. `03:04:05 PM`.
pub const TIMESTAMP_FORMAT: &str = "%I:%M:%S %p";

/// A single `"<count>: <hh:mm:ss AM/PM>"` line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    pub fn new(count: Counter, at: NaiveTime) -> Self {
        Self(format!("{}: {}", count, at.format(TIMESTAMP_FORMAT)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for HistoryEntry {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for HistoryEntry {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the history is rendered for the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// `[a, b, c]`
    #[default]
    List,
    /// One entry per line.
    Lines,
    /// JSON array of strings.
    Json,
}

/// Newest entry first. No dedup, no cap.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<HistoryEntry>);

impl History {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }

    /// New history with the entry for `count` at the front.
    ///
    /// `self` is left untouched.
    pub fn append(&self, count: Counter, at: NaiveTime) -> Self {
        let mut entries = Vec::with_capacity(self.0.len() + 1);
        entries.push(HistoryEntry::new(count, at));
        entries.extend(self.0.iter().cloned());
        Self(entries)
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn render(&self, format: CopyFormat) -> String {
        match format {
            CopyFormat::List => {
                let joined = self
                    .0
                    .iter()
                    .map(HistoryEntry::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}]", joined)
            }
            CopyFormat::Lines => self
                .0
                .iter()
                .map(HistoryEntry::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            // A Vec<String> cannot fail to serialize.
            CopyFormat::Json => serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".into()),
        }
    }
}

impl FromIterator<HistoryEntry> for History {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
