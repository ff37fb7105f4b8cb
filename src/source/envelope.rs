//! Response envelopes
//!
//! Shape: `{ success, <record_key>: [...], recordsTotal, recordsFiltered, notify? }`

use crate::error::{Error, Result};
use crate::template::get_nested_value;
use crate::types::JsonValue;

/// A normalised page response
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Whether the source accepted the request
    pub success: bool,
    /// Records on the requested page
    pub records: Vec<JsonValue>,
    /// Total records before filtering (informational)
    pub records_total: u64,
    /// Records after filtering; drives the page count
    pub records_filtered: u64,
    /// Optional human-readable message from the source
    pub notify: Option<String>,
}

impl Envelope {
    /// Build the always-successful envelope for a local slice
    pub fn local(records: Vec<JsonValue>, collection_len: usize) -> Self {
        let len = collection_len as u64;
        Self {
            success: true,
            records,
            records_total: len,
            records_filtered: len,
            notify: None,
        }
    }

    /// Parse a remote response body
    ///
    /// A rejected envelope (`success` false or missing) parses fine; callers
    /// decide what to do with it via [`Envelope::into_result`]. Records are
    /// only required on a successful envelope.
    pub fn from_value(value: &JsonValue, record_key: &str) -> Result<Self> {
        let JsonValue::Object(map) = value else {
            return Err(Error::envelope("response body is not a JSON object"));
        };

        let success = map.get("success").is_some_and(is_truthy);
        let notify = map.get("notify").and_then(notify_text);

        let parts: Vec<&str> = record_key.split('.').collect();
        let records = match get_nested_value(value, &parts) {
            Some(JsonValue::Array(records)) => records.clone(),
            Some(JsonValue::Null) | None if !success => Vec::new(),
            Some(JsonValue::Null) | None => {
                return Err(Error::envelope(format!(
                    "missing record array under '{record_key}'"
                )))
            }
            Some(_) => {
                return Err(Error::envelope(format!(
                    "'{record_key}' is not an array"
                )))
            }
        };

        let records_total = read_count(map.get("recordsTotal"), "recordsTotal")?;
        let records_filtered = read_count(map.get("recordsFiltered"), "recordsFiltered")?;
        // Whichever count is missing mirrors the other; with neither, the page is all there is
        let (records_total, records_filtered) = match (records_total, records_filtered) {
            (Some(total), Some(filtered)) => (total, filtered),
            (Some(total), None) => (total, total),
            (None, Some(filtered)) => (filtered, filtered),
            (None, None) => {
                let n = records.len() as u64;
                (n, n)
            }
        };

        Ok(Self {
            success,
            records_total,
            records_filtered,
            records,
            notify,
        })
    }

    /// Turn a rejected envelope into an error carrying its notify text
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::rejected(
                self.notify
                    .unwrap_or_else(|| "The data source rejected the request".to_string()),
            ))
        }
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => matches!(s.as_str(), "true" | "1"),
        _ => false,
    }
}

fn notify_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Null => None,
        JsonValue::String(_) => None,
        other => Some(other.to_string()),
    }
}

/// Read a non-negative count given as a number or a numeric string
fn read_count(value: Option<&JsonValue>, field: &str) -> Result<Option<u64>> {
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .map(Some)
            .ok_or_else(|| Error::envelope(format!("'{field}' must be a non-negative count"))),
        Some(JsonValue::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| Error::envelope(format!("'{field}' is not a number: {s}"))),
        Some(_) => Err(Error::envelope(format!("'{field}' must be a number"))),
    }
}
