mod common;

use common::{at, temp_store};
use tapcounter::model::{Counter, History, HistoryEntry};
use tapcounter::store::{
    FilePreferences, MemoryPreferences, PrefKey, PreferenceStore, Snapshot, SnapshotStore,
};

fn sample_snapshot() -> Snapshot {
    let history = History::default()
        .append(Counter::new(1), at(9, 15, 0))
        .append(Counter::new(2), at(21, 45, 30));
    Snapshot {
        count: Counter::new(2),
        history,
    }
}

#[test]
fn load_after_save_returns_same_snapshot() {
    let (_dir, path) = temp_store();
    let snapshot = sample_snapshot();

    let mut store = SnapshotStore::new(FilePreferences::open(&path));
    store.save(&snapshot).unwrap();

    let reloaded = SnapshotStore::new(FilePreferences::open(&path)).load();
    assert_eq!(reloaded, snapshot);
}

#[test]
fn round_trip_keeps_awkward_entries() {
    let (_dir, path) = temp_store();
    let snapshot = Snapshot {
        count: Counter::new(-5),
        history: ["a, b", "[nested]", "\"quoted\"", "", "ünïcødé"]
            .into_iter()
            .map(HistoryEntry::from)
            .collect(),
    };

    SnapshotStore::new(FilePreferences::open(&path))
        .save(&snapshot)
        .unwrap();
    assert_eq!(SnapshotStore::new(FilePreferences::open(&path)).load(), snapshot);
}

#[test]
fn absent_store_loads_defaults() {
    let (_dir, path) = temp_store();
    let snapshot = SnapshotStore::new(FilePreferences::open(&path)).load();
    assert_eq!(snapshot, Snapshot::default());
    assert!(!path.exists());
}

#[test]
fn corrupt_file_loads_defaults() {
    let (_dir, path) = temp_store();
    std::fs::write(&path, b"\x00\x01 definitely not json").unwrap();

    let snapshot = SnapshotStore::new(FilePreferences::open(&path)).load();
    assert_eq!(snapshot.count, Counter::default());
    assert!(snapshot.history.is_empty());
}

#[test]
fn malformed_values_load_defaults() {
    let (_dir, path) = temp_store();
    std::fs::write(&path, r#"{"COUNT": "12abc", "DATA": "{\"oops\": true}"}"#).unwrap();

    let snapshot = SnapshotStore::new(FilePreferences::open(&path)).load();
    assert_eq!(snapshot, Snapshot::default());
}

#[test]
fn legacy_list_history_is_read_and_rewritten_as_json() {
    let prefs = MemoryPreferences::new()
        .with(PrefKey::Count, "2")
        .with(PrefKey::Data, "[2: 10:00:05 AM, 1: 10:00:00 AM]");
    let mut store = SnapshotStore::new(prefs.clone());

    let snapshot = store.load();
    assert_eq!(snapshot.count, Counter::new(2));
    let entries: Vec<&str> = snapshot.history.iter().map(|e| e.as_str()).collect();
    assert_eq!(entries, vec!["2: 10:00:05 AM", "1: 10:00:00 AM"]);

    store.save(&snapshot).unwrap();
    assert_eq!(
        prefs.get(PrefKey::Data).as_deref(),
        Some(r#"["2: 10:00:05 AM","1: 10:00:00 AM"]"#)
    );
}

#[test]
fn stored_layout_uses_fixed_string_keys() {
    let (_dir, path) = temp_store();
    SnapshotStore::new(FilePreferences::open(&path))
        .save(&sample_snapshot())
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["COUNT"], "2");
    assert_eq!(raw["DATA"], r#"["2: 09:45:30 PM","1: 09:15:00 AM"]"#);
}
