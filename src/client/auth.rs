//! Registration and token management.

use reqwest::Method;
use tracing::{info, instrument};

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{AuthResponse, Credentials, RefreshTokenRequest};

impl RateLimitXClient {
    /// Register a new tenant. The returned access token becomes the client's
    /// bearer credential.
    #[instrument(skip_all)]
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.authenticate("/auth/register", &body).await
    }

    /// Log in. The returned access token becomes the client's bearer credential.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.authenticate("/auth/login", &body).await
    }

    /// Exchange a refresh token for a new access token, which the client
    /// then uses.
    #[instrument(skip_all)]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponse> {
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.authenticate("/auth/refresh", &body).await
    }

    async fn authenticate<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<AuthResponse> {
        let auth: AuthResponse = self.send_json(Method::POST, path, body).await?;

        if !auth.access_token.is_empty() {
            self.set_access_token(auth.access_token.clone());
            info!(tenant_id = %auth.tenant_id, "Stored access token");
        }
        Ok(auth)
    }
}
