//! Rate limit rule management.

use serde::{Deserialize, Serialize};

/// A rate limit rule as stored by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitRule {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    pub resource: String,
    /// `TOKEN_BUCKET`, `SLIDING_WINDOW` or `FIXED_WINDOW`
    pub algorithm: String,
    pub max_requests: i64,
    pub window_seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst_capacity: Option<i64>,
    /// `USER_ID`, `IP_ADDRESS`, `API_KEY` or `CUSTOM`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub identifier_type: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub limit_scope: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub priority: i32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    pub resource: String,
    pub algorithm: String,
    pub max_requests: i64,
    pub window_seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
}

/// Partial update of a rule. Only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
}
