use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::store::error::StoreError;
use crate::store::{PrefKey, PreferenceStore};

/// Preferences kept as a flat JSON object of strings on disk.
///
/// Values are cached at open time. Writes replace the whole file through a
/// temporary file and a rename, under an exclusive lock on `<path>.lock`.
/// Keys this crate does not know about are carried through unchanged.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Default location: `<data dir>/tapcounter/prefs.json`.
    ///
    /// Falls back to the current directory if no data dir is known.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("tapcounter").join("prefs.json")
    }

    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".lock")
    }

    fn write_values(&self) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| StoreError::Lock {
                path: lock_path.clone(),
                source,
            })?;
        lock_file
            .lock_exclusive()
            .map_err(|source| StoreError::Lock {
                path: lock_path.clone(),
                source,
            })?;

        let content = serde_json::to_string_pretty(&self.values)?;
        let tmp_path = sibling_with_suffix(&self.path, ".tmp");
        let result = (|| {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(content.as_bytes())?;
            tmp.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        })()
        .map_err(write_err);

        let _ = FileExt::unlock(&lock_file);
        result
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: PrefKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn put(&mut self, entries: &[(PrefKey, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.values.insert(key.as_str().to_string(), value.clone());
        }
        self.write_values()?;
        tracing::debug!("Wrote {} keys to {}", entries.len(), self.path.display());
        Ok(())
    }
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            tracing::warn!("Failed to read store '{}': {}", path.display(), err);
            return BTreeMap::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!("Ignoring corrupt store '{}': {}", path.display(), err);
            BTreeMap::new()
        }
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = FilePreferences::open(dir.path().join("prefs.json"));
        assert_eq!(prefs.get(PrefKey::Count), None);
        assert_eq!(prefs.get(PrefKey::Data), None);
    }

    #[test]
    fn put_persists_across_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = FilePreferences::open(&path);
        prefs
            .put(&[(PrefKey::Count, "7".into()), (PrefKey::Data, "[]".into())])
            .unwrap();

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get(PrefKey::Count).as_deref(), Some("7"));
        assert_eq!(reopened.get(PrefKey::Data).as_deref(), Some("[]"));
        assert!(!sibling_with_suffix(&path, ".tmp").exists());
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let mut prefs = FilePreferences::open(&path);
        assert_eq!(prefs.get(PrefKey::Count), None);

        prefs.put(&[(PrefKey::Count, "1".into())]).unwrap();
        assert_eq!(
            FilePreferences::open(&path).get(PrefKey::Count).as_deref(),
            Some("1")
        );
    }

    #[test]
    fn unknown_keys_survive_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"THEME": "dark", "COUNT": "2"}"#).unwrap();

        let mut prefs = FilePreferences::open(&path);
        prefs.put(&[(PrefKey::Count, "3".into())]).unwrap();

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get("THEME").map(String::as_str), Some("dark"));
        assert_eq!(raw.get("COUNT").map(String::as_str), Some("3"));
    }
}
