use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::store::error::StoreError;
use crate::store::{PrefKey, PreferenceStore};

/// In-memory preferences.
///
/// Clones share the same map, so a handle kept outside a session sees
/// everything the session writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<BTreeMap<PrefKey, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. to simulate data left by an older version.
    pub fn with(self, key: PrefKey, value: impl Into<String>) -> Self {
        self.values.lock().insert(key, value.into());
        self
    }

    /// Number of `put` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: PrefKey) -> Option<String> {
        self.values.lock().get(&key).cloned()
    }

    fn put(&mut self, entries: &[(PrefKey, String)]) -> Result<(), StoreError> {
        let mut values = self.values.lock();
        for (key, value) in entries {
            values.insert(*key, value.clone());
        }
        *self.writes.lock() += 1;
        Ok(())
    }
}
