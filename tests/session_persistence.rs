mod common;

use common::{file_session, memory_session, tap_at, temp_store};
use parking_lot::Mutex;
use std::sync::Arc;
use tapcounter::ui::counter::CounterIntent;

#[test]
fn state_survives_restart() {
    let (_dir, path) = temp_store();

    {
        let mut session = file_session(&path);
        session.dispatch(tap_at(7, 0, 0)).unwrap();
        session.dispatch(tap_at(7, 0, 1)).unwrap();
        session.dispatch(tap_at(7, 0, 2)).unwrap();
    }

    let session = file_session(&path);
    assert_eq!(session.state().count.value(), 3);
    assert_eq!(session.state().history.len(), 3);
    assert_eq!(
        session.state().history.entries()[0].as_str(),
        "3: 07:00:02 AM"
    );
}

#[test]
fn minus_and_clear_are_persisted() {
    let (_dir, path) = temp_store();

    let mut session = file_session(&path);
    session.dispatch(tap_at(7, 0, 0)).unwrap();
    session.dispatch(tap_at(7, 0, 1)).unwrap();
    session.dispatch(CounterIntent::RequestMinus).unwrap();
    session.dispatch(CounterIntent::Confirm).unwrap();

    let reopened = file_session(&path);
    assert_eq!(reopened.state().count.value(), 1);
    assert_eq!(reopened.state().history.len(), 2);

    session.dispatch(CounterIntent::RequestClear).unwrap();
    session.dispatch(CounterIntent::Confirm).unwrap();

    let reopened = file_session(&path);
    assert_eq!(reopened.state().count.value(), 0);
    assert!(reopened.state().history.is_empty());
}

#[test]
fn open_dialog_is_not_restored() {
    let (_dir, path) = temp_store();

    let mut session = file_session(&path);
    session.dispatch(tap_at(7, 0, 0)).unwrap();
    session.dispatch(CounterIntent::RequestClear).unwrap();
    drop(session);

    let reopened = file_session(&path);
    assert!(!reopened.state().dialog.is_visible());
    assert_eq!(reopened.state().count.value(), 1);
}

#[test]
fn every_snapshot_change_writes_once() {
    let (mut session, prefs) = memory_session();

    session.dispatch(tap_at(7, 0, 0)).unwrap();
    session.dispatch(tap_at(7, 0, 1)).unwrap();
    assert_eq!(prefs.write_count(), 2);

    session.dispatch(CounterIntent::RequestMinus).unwrap();
    assert_eq!(prefs.write_count(), 2);
    session.dispatch(CounterIntent::Confirm).unwrap();
    assert_eq!(prefs.write_count(), 3);
}

#[test]
fn subscribers_receive_each_new_state() {
    let (mut session, _prefs) = memory_session();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |state| sink.lock().push(state.count.value()));

    session.dispatch(tap_at(7, 0, 0)).unwrap();
    session.dispatch(tap_at(7, 0, 1)).unwrap();
    session.dispatch(CounterIntent::RequestMinus).unwrap();
    session.dispatch(CounterIntent::Confirm).unwrap();

    assert_eq!(*seen.lock(), vec![1, 2, 2, 1]);
}

#[test]
fn unwritable_store_keeps_working_in_memory() {
    let (dir, _path) = temp_store();
    // A directory where the file should be makes every write fail.
    let blocked = dir.path().join("blocked");
    std::fs::create_dir_all(blocked.join("prefs.json")).unwrap();

    let mut session = file_session(&blocked.join("prefs.json"));
    assert!(session.dispatch(tap_at(7, 0, 0)).is_err());
    assert_eq!(session.state().count.value(), 1);
    assert_eq!(session.state().history.len(), 1);
}

#[test]
fn confirmed_clear_on_empty_state_still_writes() {
    let (_dir, path) = temp_store();
    std::fs::write(&path, r#"{"COUNT":"many","DATA":"{oops"}"#).unwrap();

    let mut session = file_session(&path);
    assert_eq!(session.state().count.value(), 0);
    session.dispatch(CounterIntent::RequestClear).unwrap();
    session.dispatch(CounterIntent::Confirm).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["COUNT"], "0");
    assert_eq!(written["DATA"], "[]");
}
