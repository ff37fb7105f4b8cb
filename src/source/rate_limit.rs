//! Request throttling for remote page fetches

use crate::error::{Error, Result};
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Page requests allowed per second, plus how many may go out back to back
///
/// ```yaml
/// remote:
///   rate_limit:
///     per_second: 2
///     burst: 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RequestRate {
    /// Sustained requests per second
    pub per_second: u32,
    /// Defaults to `per_second`
    #[serde(default)]
    pub burst: Option<u32>,
}

impl RequestRate {
    /// Allow `per_second` requests per second
    pub fn per_second(per_second: u32) -> Self {
        Self {
            per_second,
            burst: None,
        }
    }

    /// Set the burst size
    #[must_use]
    pub fn with_burst(mut self, burst: u32) -> Self {
        self.burst = Some(burst);
        self
    }

    /// Both values must be at least 1
    pub fn validate(&self) -> Result<()> {
        if self.per_second == 0 {
            return Err(Error::invalid_value(
                "remote.rate_limit.per_second",
                "must be at least 1",
            ));
        }
        if self.burst == Some(0) {
            return Err(Error::invalid_value(
                "remote.rate_limit.burst",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    fn quota(&self) -> Quota {
        let per_second = NonZeroU32::new(self.per_second).unwrap_or(NonZeroU32::MIN);
        let burst = self
            .burst
            .and_then(NonZeroU32::new)
            .unwrap_or(per_second);
        Quota::per_second(per_second).allow_burst(burst)
    }
}

/// Token bucket gating outgoing page requests; clones share one bucket
#[derive(Clone)]
pub struct Throttle {
    rate: RequestRate,
    bucket: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Throttle {
    /// Create a throttle with a full bucket
    pub fn new(rate: RequestRate) -> Self {
        Self {
            rate,
            bucket: Arc::new(RateLimiter::direct(rate.quota())),
        }
    }

    /// Configured rate
    pub fn rate(&self) -> RequestRate {
        self.rate
    }

    /// Wait for the next request slot
    pub async fn acquire(&self) {
        self.bucket.until_ready().await;
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").field("rate", &self.rate).finish()
    }
}
