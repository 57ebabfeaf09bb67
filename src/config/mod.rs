//! Configuration file handling.

mod loader;
mod types;

pub use loader::{ConfigError, MIN_TICK_RATE_MS};
pub use types::{Config, HistoryConfig, StorageConfig, UiConfig};
