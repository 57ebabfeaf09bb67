use serde::Serialize;

use crate::model::{Counter, History};
use crate::store::codec::{decode_count, decode_history, encode_count, encode_history};
use crate::store::error::StoreError;
use crate::store::{PrefKey, PreferenceStore};

/// The persisted pair: count and history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Snapshot {
    pub count: Counter,
    pub history: History,
}

/// Reads and writes [`Snapshot`]s through a [`PreferenceStore`].
pub struct SnapshotStore {
    prefs: Box<dyn PreferenceStore>,
}

impl SnapshotStore {
    pub fn new(prefs: impl PreferenceStore + 'static) -> Self {
        Self {
            prefs: Box::new(prefs),
        }
    }

    /// Read the stored snapshot.
    ///
    /// Never fails: each value that is absent or malformed is replaced by
    /// its default independently.
    pub fn load(&self) -> Snapshot {
        let count = decode_count(self.prefs.get(PrefKey::Count).as_deref());
        let history = decode_history(self.prefs.get(PrefKey::Data).as_deref());
        Snapshot { count, history }
    }

    /// Write both keys in one batch.
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let data = encode_history(&snapshot.history)?;
        self.prefs.put(&[
            (PrefKey::Count, encode_count(snapshot.count)),
            (PrefKey::Data, data),
        ])
    }
}
