//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use chrono::NaiveTime;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tapcounter::clipboard::{ClipboardError, ClipboardSink};
use tapcounter::session::CounterSession;
use tapcounter::store::{FilePreferences, MemoryPreferences, SnapshotStore};
use tapcounter::ui::counter::CounterIntent;
use tempfile::TempDir;

pub fn at(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

pub fn tap_at(h: u32, m: u32, s: u32) -> CounterIntent {
    CounterIntent::Tap { at: at(h, m, s) }
}

/// Temp dir plus the path of a not-yet-created prefs file inside it.
pub fn temp_store() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("prefs.json");
    (temp_dir, path)
}

pub fn file_session(path: &Path) -> CounterSession {
    CounterSession::open(SnapshotStore::new(FilePreferences::open(path)))
}

pub fn memory_session() -> (CounterSession, MemoryPreferences) {
    let prefs = MemoryPreferences::new();
    let session = CounterSession::open(SnapshotStore::new(prefs.clone()));
    (session, prefs)
}

/// Clipboard that records what was copied, or fails on demand.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
}

impl ClipboardSink for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.lock().push(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write(arboard::Error::ClipboardNotSupported))
    }
}
