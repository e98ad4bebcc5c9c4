//! JSON file backed preference store.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    PreferenceStore,
    StorageError,
};

/// Preferences kept as a flat JSON object on disk.
///
/// A missing or unreadable file is treated as an empty store so that a
/// corrupted preference never prevents the page from starting.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            tracing::debug!("Preference file not found: {:?}", path);
            return BTreeMap::new();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(StorageError::from)
            .and_then(|content| serde_json::from_str(&content).map_err(StorageError::from));

        match parsed {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preference file {:?}: {}", path, e);
                BTreeMap::new()
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
