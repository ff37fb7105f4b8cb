//! Transport abstraction for remote data sources

use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Method, StringMap};
use async_trait::async_trait;

/// One page request sent to a remote data source
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Endpoint URL
    pub url: String,
    /// Request fields: offset, limit and any extra params
    pub body: JsonObject,
    /// Request headers
    pub headers: StringMap,
}

impl TransportRequest {
    /// Build the request for the page starting at `offset`
    ///
    /// Extra params are applied over the offset and limit fields, so a
    /// param sharing their name replaces the computed value.
    pub fn for_page(remote: &RemoteConfig, offset: u64, limit: u32) -> Result<Self> {
        let url = remote
            .url
            .clone()
            .ok_or_else(|| Error::invalid_value("remote.url", "required in remote mode"))?;

        let mut body = JsonObject::new();
        body.insert(remote.offset_param.clone(), JsonValue::from(offset));
        body.insert(remote.limit_param.clone(), JsonValue::from(limit));
        body.extend(remote.params.clone());

        Ok(Self {
            method: remote.method,
            url,
            body,
            headers: remote.headers.clone(),
        })
    }

    /// Body fields flattened to strings for a query string
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.body
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Null => String::new(),
                    other => other.to_string(),
                };
                (k.clone(), value)
            })
            .collect()
    }
}

/// Sends page requests and returns the raw response envelope
///
/// Implementations own timeouts; the controller never retries or cancels.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the decoded JSON body
    async fn send(&self, request: TransportRequest) -> Result<JsonValue>;
}
