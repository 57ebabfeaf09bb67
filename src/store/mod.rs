//! Durable key-value storage for the counter snapshot.
//!
//! The layout mirrors a preferences file: two string values, `COUNT` holding
//! decimal text and `DATA` holding the history as a JSON array.

mod codec;
mod error;
mod file;
mod memory;
mod snapshot;

pub use codec::{decode_count, decode_history, encode_count, encode_history};
pub use error::StoreError;
pub use file::FilePreferences;
pub use memory::MemoryPreferences;
pub use snapshot::{Snapshot, SnapshotStore};

use std::fmt;

/// Fixed keys of the persisted layout. Renaming them orphans existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrefKey {
    Count,
    Data,
}

impl PrefKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Data => "DATA",
        }
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String-valued key-value store that survives restarts.
pub trait PreferenceStore: Send {
    /// Stored value, or `None` when the key was never written.
    fn get(&self, key: PrefKey) -> Option<String>;

    /// Write all entries in a single operation.
    fn put(&mut self, entries: &[(PrefKey, String)]) -> Result<(), StoreError>;
}
