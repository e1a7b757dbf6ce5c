//! The `{success, data, error, timestamp}` wrapper most endpoints answer with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response wrapper.
///
/// Every field defaults when missing, so any JSON object decodes as an
/// envelope. Unwrapped payloads (the check endpoint) therefore decode with
/// `success == false` and fall through to raw decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Envelope {
    /// The payload when the envelope reports success with non-null data.
    pub fn into_success_data(self) -> Option<Value> {
        match (self.success, self.data) {
            (true, Some(data)) if !data.is_null() => Some(data),
            _ => None,
        }
    }

    /// The server's error message, if present and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
