//! Bulk rule import and export.
//!
//! Exported documents are a JSON or YAML list of [`PortableRule`]s. The same
//! shape is accepted by the import endpoint, so a document exported from one
//! tenant can be imported into another.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RateLimitXError, Result};

/// Document format for bulk import and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkFormat {
    #[default]
    Json,
    Yaml,
}

impl BulkFormat {
    /// Value sent in the `format` query parameter and form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkFormat::Json => "json",
            BulkFormat::Yaml => "yaml",
        }
    }

    /// File name used for the multipart upload part.
    pub fn file_name(&self) -> String {
        format!("rules.{}", self.as_str())
    }
}

impl fmt::Display for BulkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BulkFormat {
    type Err = RateLimitXError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(BulkFormat::Json),
            "yaml" | "yml" => Ok(BulkFormat::Yaml),
            other => Err(RateLimitXError::Config(format!(
                "unsupported bulk format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

/// One rule in an export or import document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableRule {
    pub resource: String,
    pub algorithm: String,
    pub max_requests: i64,
    pub window_seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Ignored on import; imported rules are always active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl PortableRule {
    /// Parse a document returned by the export endpoint.
    pub fn parse_document(content: &str, format: BulkFormat) -> Result<Vec<PortableRule>> {
        let rules = match format {
            BulkFormat::Json => serde_json::from_str(content)?,
            BulkFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(rules)
    }

    /// Render rules into a document the import endpoint accepts.
    pub fn render_document(rules: &[PortableRule], format: BulkFormat) -> Result<String> {
        let content = match format {
            BulkFormat::Json => serde_json::to_string_pretty(rules)?,
            BulkFormat::Yaml => serde_yaml::to_string(rules)?,
        };
        Ok(content)
    }
}

/// Outcome of an import: `errors` holds one `"<resource>: <reason>"` line per
/// skipped rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRulesResponse {
    pub created: u32,
    pub skipped: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub errors: Vec<String>,
}
