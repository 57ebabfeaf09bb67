use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::CopyFormat;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Where the counter is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Preferences file. Defaults to `<data dir>/tapcounter/prefs.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a status message stays on screen, in milliseconds (default: 2000).
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,
}

/// History export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Clipboard rendering: "list", "lines" or "json" (default: "list").
    #[serde(default)]
    pub copy_format: CopyFormat,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_status_timeout_ms() -> u64 {
    2000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            status_timeout_ms: default_status_timeout_ms(),
        }
    }
}
