//! Analytics payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Trends are open-ended; the service adds keys freely.
pub type Trends = Map<String, Value>;

/// Real-time counters for the authenticated tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    pub total_checks: i64,
    pub rate_limit_hits: i64,
    /// Percentage of checks denied, 0-100
    pub hit_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_p50: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_p95: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_p99: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_checks_this_month: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub timestamp: String,
}

/// An identifier and how often it was denied. Lists arrive sorted by
/// `denied_count` descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopIdentifier {
    pub identifier: String,
    pub denied_count: i64,
}

/// Usage of the configured API key against the service's own API quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUsageInfo {
    pub current_count: i64,
    pub limit: i64,
    pub remaining: i64,
    /// Epoch milliseconds at which the usage window resets
    pub reset_at: i64,
}

/// Check totals for one hour bucket (`hour` is formatted `HH:00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyUsage {
    pub hour: String,
    pub checks: i64,
    pub hits: i64,
    pub allowed: i64,
}

/// Latency percentiles in milliseconds for a five minute interval.
/// `time` is how long ago the interval started, e.g. `"15m"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyInterval {
    pub time: String,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(default)]
    pub id: Value,
    /// `alert` or `rule`
    #[serde(rename = "type")]
    pub kind: String,
    pub action: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub resource: String,
    #[serde(default)]
    pub timestamp: Value,
    /// Human readable age, e.g. `"3 hours ago"`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub time: String,
}
