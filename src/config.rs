//! Configuration management for the RateLimitX client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{RateLimitXError, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix for environment variable overrides (`RATELIMITX_API_KEY`, ...).
const ENV_PREFIX: &str = "RATELIMITX";

/// Connection settings for a [`RateLimitXClient`](crate::RateLimitXClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the RateLimitX service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `X-API-Key`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Access token sent as `Authorization: Bearer`, used only without an API key
    #[serde(default)]
    pub access_token: Option<String>,

    /// Total request timeout in seconds; `0` falls back to the default
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl ClientConfig {
    /// Create a configuration for the given base URL and API key.
    ///
    /// Empty strings are treated as unset, so `ClientConfig::new("", "")`
    /// targets the default URL without credentials.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: non_empty(base_url).unwrap_or_else(default_base_url),
            api_key: non_empty(api_key),
            ..Default::default()
        }
    }

    /// Request timeout as a [`Duration`]. A zero timeout would fail every
    /// request, so it reads as [`DEFAULT_TIMEOUT`].
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_yaml::from_str(&contents)
            .map_err(|e| RateLimitXError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Load configuration from an optional file layered under `RATELIMITX_*`
    /// environment variables.
    ///
    /// Any format the `config` crate recognises by extension is accepted for
    /// the file (YAML, TOML, JSON).
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));

        let config: ClientConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| RateLimitXError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Collapse empty strings and a zero timeout left by file or env sources
    /// into defaults.
    fn normalized(mut self) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = default_base_url();
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = default_timeout_secs();
        }
        self.api_key = self.api_key.as_deref().and_then(non_empty);
        self.access_token = self.access_token.as_deref().and_then(non_empty);
        self
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_new_with_empty_base_url_uses_default() {
        let config = ClientConfig::new("", "rlx_key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key.as_deref(), Some("rlx_key"));
    }

    #[test]
    fn test_new_with_empty_api_key() {
        let config = ClientConfig::new("https://api.example.com", "");
        assert_eq!(config.base_url, "https://api.example.com");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_yaml_with_defaults() {
        let yaml = r#"
base_url: https://rl.example.com
api_key: rlx_abc
"#;
        let config: ClientConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "https://rl.example.com");
        assert_eq!(config.api_key.as_deref(), Some("rlx_abc"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_normalized_clears_empty_values() {
        let config = ClientConfig {
            base_url: "  ".to_string(),
            api_key: Some(String::new()),
            access_token: Some(String::new()),
            timeout_secs: 5,
        }
        .normalized();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config: ClientConfig = serde_yaml::from_str("timeout_secs: 0").unwrap();
        assert_eq!(config.normalized().timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_file_zero_timeout() {
        let path = std::env::temp_dir().join(format!("ratelimitx-{}.yaml", std::process::id()));
        std::fs::write(&path, "base_url: https://rl.example.com\ntimeout_secs: 0\n").unwrap();
        let config = ClientConfig::from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.base_url, "https://rl.example.com");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = ClientConfig::from_file("/nonexistent/ratelimitx.yaml").unwrap_err();
        assert!(matches!(err, RateLimitXError::Io(_)));
    }
}
