//! API key management.

use reqwest::Method;

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{ApiKey, CreateApiKeyRequest, CreateApiKeyResponse, RotateApiKeyResponse};

impl RateLimitXClient {
    /// List API keys. Only hashes are returned, never the keys themselves.
    pub async fn get_api_keys(&self) -> Result<Vec<ApiKey>> {
        self.get("/api-keys").await
    }

    /// Create an API key. The plaintext key in the response cannot be
    /// fetched again later.
    pub async fn create_api_key(
        &self,
        request: &CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse> {
        self.send_json(Method::POST, "/api-keys", request).await
    }

    pub async fn delete_api_key(&self, key_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/api-keys/{}", key_id))
            .await
    }

    /// Replace a key with a freshly generated one. The old key stops working.
    pub async fn rotate_api_key(&self, key_id: &str) -> Result<RotateApiKeyResponse> {
        self.send(Method::POST, &format!("/api-keys/{}/rotate", key_id))
            .await
    }
}
