//! Rate limit checks.

use reqwest::Method;
use tracing::{debug, instrument};

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{ApiUsageInfo, RateLimitCheckRequest, RateLimitCheckResponse};

impl RateLimitXClient {
    /// Check whether a request should be rate limited.
    ///
    /// The service answers 429 when the identifier is over its limit, which
    /// surfaces as an API error; see [`RateLimitCheck::is_allowed`] for a
    /// variant that folds that into `Ok(false)`.
    ///
    /// [`RateLimitCheck::is_allowed`]: super::RateLimitCheck::is_allowed
    #[instrument(
        skip(self, request),
        fields(identifier = %request.identifier, resource = %request.resource)
    )]
    pub async fn check(&self, request: &RateLimitCheckRequest) -> Result<RateLimitCheckResponse> {
        let decision: RateLimitCheckResponse =
            self.send_json(Method::POST, "/api/v1/check", request).await?;

        debug!(
            allowed = decision.allowed,
            remaining = decision.remaining,
            "Rate limit decision received"
        );
        Ok(decision)
    }

    /// Usage of the configured API key against the service's own API quota.
    pub async fn get_usage(&self) -> Result<ApiUsageInfo> {
        self.get("/api/v1/usage").await
    }

    /// Service liveness; the service answers `"OK"`.
    pub async fn health(&self) -> Result<String> {
        self.get("/api/v1/health").await
    }
}
