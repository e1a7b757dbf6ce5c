//! Rate limit check trait for abstracting the HTTP client.

use async_trait::async_trait;

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{RateLimitCheckRequest, RateLimitCheckResponse};

/// Anything that can answer a rate limit check.
///
/// Application code that only needs decisions can depend on this trait
/// rather than on [`RateLimitXClient`], and substitute a stub in tests.
#[async_trait]
pub trait RateLimitCheck: Send + Sync {
    /// Check whether a request should be rate limited.
    async fn check(&self, request: &RateLimitCheckRequest) -> Result<RateLimitCheckResponse>;

    /// Whether one token of `resource` may be consumed by `identifier`.
    ///
    /// A 429 answer is a denial, not an error.
    async fn is_allowed(&self, identifier: &str, resource: &str) -> Result<bool> {
        let request = RateLimitCheckRequest::new(identifier, resource);
        match self.check(&request).await {
            Ok(decision) => Ok(decision.allowed),
            Err(e) if e.is_rate_limited() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl RateLimitCheck for RateLimitXClient {
    async fn check(&self, request: &RateLimitCheckRequest) -> Result<RateLimitCheckResponse> {
        RateLimitXClient::check(self, request).await
    }
}
