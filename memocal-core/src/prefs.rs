//! Key-value persistence boundary.
//!
//! The persisted memo string lives under a single named key in an opaque
//! get/set text store. [`FilePrefs`] is the shipped implementation: a JSON
//! object file, loaded leniently (missing or unreadable file means an
//! empty store) and saved write-through on every `put`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{MemocalError, MemocalResult};

/// The key holding the serialized memo collection.
pub const MEMOS_KEY: &str = "memos";

/// Opaque string store, one value per named key.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn put(&mut self, key: &str, value: &str) -> MemocalResult<()>;
}

/// JSON-object-file preference store.
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefs {
    /// Load the store at `path`. A missing file yields an empty store; a
    /// corrupt file is logged and also yields an empty store, so a bad
    /// preferences file never blocks startup.
    pub fn load(path: impl Into<PathBuf>) -> FilePrefs {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("ignoring corrupt prefs file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        FilePrefs { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Write the whole object atomically: temp file in the same directory,
    // then rename over the target.
    fn save(&self) -> MemocalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| MemocalError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, &self.path)?;
        log::debug!("saved prefs to {}", self.path.display());
        Ok(())
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    fn put(&mut self, key: &str, value: &str) -> MemocalResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}
