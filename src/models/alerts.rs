//! Alert configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfiguration {
    pub id: String,
    /// `TIER_LIMIT_APPROACHING`, `TIER_LIMIT_EXCEEDED` or `RATE_LIMIT_SPIKE`
    pub alert_type: String,
    /// Email address or webhook URL
    pub destination: String,
    /// `EMAIL`, `WEBHOOK`, `SLACK` or `DISCORD`
    pub destination_type: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub threshold_percent: i32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub alert_type: String,
    pub destination: String,
    pub destination_type: String,
    pub threshold_percent: i32,
}
