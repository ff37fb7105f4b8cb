//! Storage types

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Persisted pagination state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Page shown when the snapshot was taken
    pub current_page: u32,
    /// Total record count
    #[serde(default)]
    pub records_total: u64,
    /// Filtered record count
    #[serde(default)]
    pub records_filtered: u64,
}

/// Key-value storage for snapshots
pub trait Storage: Send + Sync {
    /// Read the snapshot stored under `key`
    fn get(&self, key: &str) -> Result<Option<Snapshot>>;

    /// Store a snapshot under `key`, replacing any previous value
    fn set(&self, key: &str, snapshot: &Snapshot) -> Result<()>;

    /// Remove the snapshot stored under `key`
    fn remove(&self, key: &str) -> Result<()>;
}
