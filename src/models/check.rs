//! Rate limit check request and decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ask the service whether `identifier` may consume `tokens` from `resource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitCheckRequest {
    pub identifier: String,
    pub resource: String,
    pub tokens: u32,
}

impl RateLimitCheckRequest {
    /// A request for a single token.
    pub fn new(identifier: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            resource: resource.into(),
            tokens: 1,
        }
    }

    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens = tokens;
        self
    }
}

/// The service's decision for a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitCheckResponse {
    pub allowed: bool,
    pub remaining: i64,
    /// Epoch seconds at which the window resets
    pub reset_at: i64,
    /// Seconds to wait before retrying when denied
    pub retry_after: i64,
}

impl RateLimitCheckResponse {
    /// `reset_at` as a UTC timestamp.
    pub fn reset_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset_at, 0)
    }

    /// `retry_after` as a [`Duration`], clamped at zero.
    pub fn retry_after_duration(&self) -> Duration {
        Duration::from_secs(self.retry_after.max(0) as u64)
    }
}
