//! Analytics queries.

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{
    AnalyticsMetrics, HourlyUsage, LatencyInterval, RecentActivity, TopIdentifier, Trends,
};

impl RateLimitXClient {
    pub async fn get_realtime_analytics(&self) -> Result<AnalyticsMetrics> {
        self.get("/analytics/realtime").await
    }

    /// The `limit` identifiers denied most often, highest count first.
    pub async fn get_top_identifiers(&self, limit: u32) -> Result<Vec<TopIdentifier>> {
        self.get(&format!("/analytics/top-identifiers?limit={}", limit))
            .await
    }

    /// Trend data between `start` and `end`. Empty bounds are left to the
    /// service's defaults.
    pub async fn get_trends(&self, start: &str, end: &str) -> Result<Trends> {
        self.get(&trends_path(start, end)).await
    }

    /// Per-hour check totals for the last `hours` hours.
    pub async fn get_hourly_analytics(&self, hours: u32) -> Result<Vec<HourlyUsage>> {
        self.get(&format!("/analytics/hourly?hours={}", hours)).await
    }

    /// Latency percentiles over the last hour in five minute intervals,
    /// most recent first.
    pub async fn get_latency_trends(&self, intervals: u32) -> Result<Vec<LatencyInterval>> {
        self.get(&format!("/analytics/latency-trends?intervals={}", intervals))
            .await
    }

    pub async fn get_recent_activity(&self, limit: u32) -> Result<Vec<RecentActivity>> {
        self.get(&format!("/analytics/recent-activity?limit={}", limit))
            .await
    }
}

/// Build the trends path, adding only the bounds that are non-empty.
fn trends_path(start: &str, end: &str) -> String {
    let params: Vec<String> = [("start", start), ("end", end)]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();

    if params.is_empty() {
        "/analytics/trends".to_string()
    } else {
        format!("/analytics/trends?{}", params.join("&"))
    }
}
