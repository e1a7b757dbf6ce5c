//! HTTP client for the RateLimitX REST API.
//!
//! [`RateLimitXClient`] owns a pooled `reqwest` client and the current
//! credential. Endpoint methods are grouped by API area in the submodules;
//! they all go through the request and response plumbing in `transport`.

mod alerts;
mod analytics;
mod api_keys;
mod auth;
mod backend;
mod bulk;
mod check;
mod rules;
mod transport;

pub use backend::RateLimitCheck;

use parking_lot::RwLock;
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use transport::AuthState;

/// Client for a RateLimitX service.
///
/// The credential can be changed through `&self`, so one client can be shared
/// behind an `Arc`. Each request reads the credential once when it is built;
/// changing it does not affect requests already in flight. Separate client
/// instances share nothing.
pub struct RateLimitXClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    auth: RwLock<AuthState>,
}

impl RateLimitXClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// An empty `base_url` falls back to `http://localhost:8080`; an empty
    /// `api_key` leaves the client unauthenticated until a credential is set.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url, api_key))
    }

    /// Create a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("ratelimitx-rust/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        debug!(base_url = %base_url, timeout = ?config.timeout(), "RateLimitX client created");

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout(),
            auth: RwLock::new(AuthState {
                api_key: config.api_key,
                access_token: config.access_token,
            }),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Set the API key. An empty key clears it.
    ///
    /// While an API key is set it is sent instead of any access token.
    pub fn set_api_key(&self, key: impl Into<String>) {
        let key = key.into();
        self.auth.write().api_key = if key.is_empty() { None } else { Some(key) };
    }

    /// Set the bearer access token. An empty token clears it.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.auth.write().access_token = if token.is_empty() { None } else { Some(token) };
    }

    pub fn clear_api_key(&self) {
        self.auth.write().api_key = None;
    }

    pub fn clear_access_token(&self) {
        self.auth.write().access_token = None;
    }

    pub fn api_key(&self) -> Option<String> {
        self.auth.read().api_key.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.auth.read().access_token.clone()
    }
}

impl std::fmt::Debug for RateLimitXClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let auth = self.auth.read();
        f.debug_struct("RateLimitXClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_api_key", &auth.api_key.is_some())
            .field("has_access_token", &auth.access_token.is_some())
            .finish()
    }
}
