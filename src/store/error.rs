use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing the preferences file.
///
/// Reads never fail: missing or corrupt data falls back to defaults.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write store '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock store '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}
