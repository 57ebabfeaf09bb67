//! Text encoding of the persisted values.
//!
//! History is written as a JSON array. Older stores hold a bracketed list
//! rendering (`[a, b]`), which is still accepted on read. That format cannot
//! represent entries containing `", "`; such entries come back split.

use crate::model::{Counter, History, HistoryEntry};

pub fn encode_count(count: Counter) -> String {
    count.value().to_string()
}

/// Parse decimal text. Anything else, including surrounding whitespace, is 0.
pub fn decode_count(raw: Option<&str>) -> Counter {
    let Some(raw) = raw else {
        return Counter::default();
    };
    match raw.parse::<i64>() {
        Ok(value) => Counter::new(value),
        Err(err) => {
            tracing::warn!("Discarding malformed COUNT {:?}: {}", raw, err);
            Counter::default()
        }
    }
}

pub fn encode_history(history: &History) -> Result<String, serde_json::Error> {
    serde_json::to_string(history)
}

/// Decode JSON, then the legacy bracketed list; otherwise empty.
pub fn decode_history(raw: Option<&str>) -> History {
    let Some(raw) = raw else {
        return History::default();
    };
    if raw.trim().is_empty() {
        return History::default();
    }

    match serde_json::from_str::<History>(raw) {
        Ok(history) => history,
        Err(json_err) => match decode_legacy_list(raw) {
            Some(history) => {
                tracing::debug!("Read {} history entries in legacy list format", history.len());
                history
            }
            None => {
                tracing::warn!("Discarding undecodable DATA: {}", json_err);
                History::default()
            }
        },
    }
}

fn decode_legacy_list(raw: &str) -> Option<History> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return Some(History::default());
    }
    Some(inner.split(", ").map(HistoryEntry::from).collect())
}
