//! Error types for the RateLimitX client.

use thiserror::Error;

/// Main error type for RateLimitX client operations.
#[derive(Error, Debug)]
pub enum RateLimitXError {
    /// Transport failures: connection refused, timeouts, TLS errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The service answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RateLimitXError {
    pub(crate) fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    /// HTTP status code carried by an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the service rejected the call with a non-2xx status.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether the service answered 429 Too Many Requests.
    ///
    /// The check endpoint answers 429 when the checked identifier is over its
    /// limit, so callers of `check` usually want to branch on this.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Result type alias for RateLimitX operations.
pub type Result<T> = std::result::Result<T, RateLimitXError>;
