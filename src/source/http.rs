//! HTTP transport
//!
//! Sends page requests with reqwest. Handles:
//! - Request timeout and user agent
//! - Default headers merged under per-request headers
//! - Optional request throttling
//! - Status classification (non-2xx becomes an error, never a retry)

use super::rate_limit::{RequestRate, Throttle};
use super::transport::{Transport, TransportRequest};
use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Request rate ceiling
    pub rate_limit: Option<RequestRate>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            rate_limit: None,
            default_headers: StringMap::new(),
            user_agent: format!("pagewise/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Throttle requests to a rate
    pub fn rate_limit(mut self, rate: RequestRate) -> Self {
        self.config.rate_limit = Some(rate);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// reqwest-backed [`Transport`]
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
    throttle: Option<Throttle>,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a transport for a remote source, throttled by `remote.rate_limit`
    pub fn for_remote(remote: &RemoteConfig) -> Result<Self> {
        Self::with_config(HttpTransportConfig {
            rate_limit: remote.rate_limit,
            ..Default::default()
        })
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let throttle = config.rate_limit.map(Throttle::new);

        Ok(Self {
            client,
            config,
            throttle,
        })
    }

    /// Rate this transport is throttled to, if any
    pub fn rate_limit(&self) -> Option<RequestRate> {
        self.throttle.as_ref().map(Throttle::rate)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<JsonValue> {
        if let Some(ref throttle) = self.throttle {
            throttle.acquire().await;
        }

        let mut req = self
            .client
            .request(request.method.into(), &request.url)
            .timeout(self.config.timeout);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = if request.method.uses_query() {
            req.query(&request.query_pairs())
        } else {
            req.json(&request.body)
        };

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Page request succeeded: {:?} {}", request.method, request.url);
        let json: JsonValue = response.json().await?;
        Ok(json)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
