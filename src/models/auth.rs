//! Authentication payloads.

use serde::{Deserialize, Serialize};

/// Email/password pair for register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Tokens issued by register, login and refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub access_token: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub refresh_token: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub api_key: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tenant_id: String,
}
