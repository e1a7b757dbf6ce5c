//! Wire types exchanged with the RateLimitX service.
//!
//! All types use the service's camelCase JSON field names. Optional fields
//! are `Option<T>` and omitted from request bodies when unset, so "absent"
//! and "zero" stay distinguishable. Response fields the service may send as
//! `null` decode to their default value instead of failing.

use serde::{Deserialize, Deserializer};

mod alerts;
mod analytics;
mod api_keys;
mod auth;
mod bulk;
mod check;
mod envelope;
mod rules;

pub use alerts::{AlertConfiguration, CreateAlertRequest};
pub use analytics::{
    AnalyticsMetrics, ApiUsageInfo, HourlyUsage, LatencyInterval, RecentActivity, TopIdentifier,
    Trends,
};
pub use api_keys::{ApiKey, CreateApiKeyRequest, CreateApiKeyResponse, RotateApiKeyResponse};
pub use auth::{AuthResponse, Credentials, RefreshTokenRequest};
pub use bulk::{BulkFormat, ImportRulesResponse, PortableRule};
pub use check::{RateLimitCheckRequest, RateLimitCheckResponse};
pub use envelope::Envelope;
pub use rules::{CreateRuleRequest, RateLimitRule, UpdateRuleRequest};

/// Deserialize an explicit `null` as `T::default()`.
///
/// `#[serde(default)]` only covers a missing key; pair the two to accept both.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
