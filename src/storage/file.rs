//! File-backed storage
//!
//! All keys live in one JSON object on disk. Writes go to a temp file first
//! and are renamed into place; the in-memory copy only changes once the
//! write has succeeded.

use super::types::{Snapshot, Storage};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// Storage persisted to a JSON file
#[derive(Debug)]
pub struct FileStorage {
    /// Path to the storage file
    path: PathBuf,
    /// Cached contents
    entries: RwLock<HashMap<String, Snapshot>>,
}

impl FileStorage {
    /// Open a storage file, loading existing entries if present
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| Error::storage(format!("Failed to read storage file: {e}")))?;
            if contents.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&contents)
                    .map_err(|e| Error::storage(format!("Failed to parse storage file: {e}")))?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Get the storage file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &HashMap<String, Snapshot>) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| Error::storage(format!("Failed to serialize storage: {e}")))?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &contents)
            .map_err(|e| Error::storage(format!("Failed to write storage file: {e}")))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(format!("Failed to rename storage file: {e}")))?;

        debug!("Saved {} storage entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Snapshot>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::storage("file storage lock poisoned"))?;
        Ok(entries.get(key).copied())
    }

    fn set(&self, key: &str, snapshot: &Snapshot) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::storage("file storage lock poisoned"))?;
        let mut next = entries.clone();
        next.insert(key.to_string(), *snapshot);
        self.save(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::storage("file storage lock poisoned"))?;
        if entries.contains_key(key) {
            let mut next = entries.clone();
            next.remove(key);
            self.save(&next)?;
            *entries = next;
        }
        Ok(())
    }
}
