//! File-backed store
//!
//! Keeps the whole map in memory and rewrites a JSON object file on every
//! mutation. Writes go to a sibling `.tmp` file first and are renamed into
//! place.

use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::storage::UserStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store. A file that is not a JSON object is
    /// an error; entries whose value is not a string are skipped with a
    /// warning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let items = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                warn!("Store file {} is empty, starting fresh", path.display());
                BTreeMap::new()
            } else {
                let parsed: BTreeMap<String, Value> = serde_json::from_str(&raw)?;
                parsed
                    .into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::String(item) => Some((key, item)),
                        other => {
                            warn!("Skipping non-string entry {:?} in store ({})", key, other);
                            None
                        }
                    })
                    .collect()
            }
        } else {
            BTreeMap::new()
        };

        info!("Opened store {} ({} entries)", path.display(), items.len());

        Ok(Self { path, items })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let temp_path = self.path.with_extension("json.tmp");
        let serialized = serde_json::to_string_pretty(&self.items)?;
        fs::write(&temp_path, serialized)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl UserStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let previous = self.items.insert(key.to_string(), value);
        if let Err(e) = self.persist() {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        if let Some(old) = self.items.remove(key) {
            if let Err(e) = self.persist() {
                self.items.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
