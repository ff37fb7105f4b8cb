//! In-memory record collections

use crate::error::{Error, Result, ResultExt};
use crate::template::get_nested_value;
use crate::types::JsonValue;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

/// An ordered, indexable, length-queryable sequence of records
pub trait RecordSource: Debug + Send + Sync {
    /// Number of records in the collection
    fn len(&self) -> usize;

    /// Records in `[offset, offset + limit)`, clipped to the collection
    fn slice(&self, offset: usize, limit: usize) -> Vec<JsonValue>;

    /// Check if the collection is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSource for Vec<JsonValue> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<JsonValue> {
        self.as_slice().slice(offset, limit)
    }
}

impl RecordSource for [JsonValue] {
    fn len(&self) -> usize {
        <[JsonValue]>::len(self)
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<JsonValue> {
        let start = offset.min(<[JsonValue]>::len(self));
        let end = start.saturating_add(limit).min(<[JsonValue]>::len(self));
        self[start..end].to_vec()
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<JsonValue> {
        (**self).slice(offset, limit)
    }
}

/// Load records from a JSON file
///
/// Accepts either a top-level array or an object holding the array under
/// `record_key` (dotted paths allowed).
pub fn load_records(path: impl AsRef<Path>, record_key: &str) -> Result<Vec<JsonValue>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    let value: JsonValue = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records file '{}'", path.display()))?;

    match value {
        JsonValue::Array(records) => Ok(records),
        other => {
            let parts: Vec<&str> = record_key.split('.').collect();
            match get_nested_value(&other, &parts) {
                Some(JsonValue::Array(records)) => Ok(records.clone()),
                _ => Err(Error::config(format!(
                    "'{}' is neither an array nor an object with an array under '{}'",
                    path.display(),
                    record_key
                ))),
            }
        }
    }
}
