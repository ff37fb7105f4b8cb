//! In-memory storage

use super::types::{Snapshot, Storage};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage backed by a shared in-process map
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, Snapshot>>>,
}

impl MemoryStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Snapshot>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::storage("memory storage lock poisoned"))?;
        Ok(entries.get(key).copied())
    }

    fn set(&self, key: &str, snapshot: &Snapshot) -> Result<()> {
        self.entries
            .write()
            .map_err(|_| Error::storage("memory storage lock poisoned"))?
            .insert(key.to_string(), *snapshot);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .map_err(|_| Error::storage("memory storage lock poisoned"))?
            .remove(key);
        Ok(())
    }
}
