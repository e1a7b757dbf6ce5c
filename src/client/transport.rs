//! Request execution and response decoding.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use super::RateLimitXClient;
use crate::error::{RateLimitXError, Result};
use crate::models::Envelope;

pub(crate) const API_KEY_HEADER: &str = "X-API-Key";

/// Credentials currently configured on a client.
#[derive(Debug, Clone, Default)]
pub(crate) struct AuthState {
    pub api_key: Option<String>,
    pub access_token: Option<String>,
}

/// The single credential header attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AuthHeader {
    ApiKey(String),
    Bearer(String),
}

impl AuthState {
    /// API key wins over the access token; with neither, no header is sent.
    pub fn header(&self) -> Option<AuthHeader> {
        if let Some(key) = &self.api_key {
            Some(AuthHeader::ApiKey(key.clone()))
        } else {
            self.access_token.clone().map(AuthHeader::Bearer)
        }
    }
}

impl RateLimitXClient {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let header = self.auth.read().header();
        match header {
            Some(AuthHeader::ApiKey(key)) => request.header(API_KEY_HEADER, key),
            Some(AuthHeader::Bearer(token)) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request with an optional JSON body.
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub(crate) async fn do_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = self.authorize(request).send().await?;
        debug!(status = response.status().as_u16(), "Received response");
        Ok(response)
    }

    /// Upload `content` as a multipart `file` part alongside a `format` field.
    #[instrument(skip(self, content), fields(path = %path, bytes = content.len()))]
    pub(crate) async fn do_request_with_file(
        &self,
        path: &str,
        content: Vec<u8>,
        filename: String,
        format: &str,
    ) -> Result<Response> {
        let part = Part::bytes(content)
            .file_name(filename)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("file", part).text("format", format.to_string());

        let request = self.http.post(self.url(path)).multipart(form);
        let response = self.authorize(request).send().await?;
        debug!(status = response.status().as_u16(), "Received response");
        Ok(response)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path).await
    }

    /// Send a request without a body and decode the answer.
    pub(crate) async fn send<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let response = self.do_request(method, path, None::<&()>).await?;
        parse_response(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.do_request(method, path, Some(body)).await?;
        parse_response(response).await
    }

    /// Send a request whose successful answer carries nothing of interest.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        let response = self.do_request(method, path, None::<&()>).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        check_status(status, &body)
    }
}

/// Read the whole body and decode it into `T`.
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    decode_body(status, &body)
}

/// Decode a response body.
///
/// A successful envelope with non-null `data` yields `data`; anything else
/// that arrived with a 2xx status is decoded as-is, which is how the
/// unwrapped check response is read.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    check_status(status, body)?;

    if let Ok(envelope) = serde_json::from_slice::<Envelope>(body) {
        if let Some(data) = envelope.into_success_data() {
            trace!("Decoding envelope data");
            return Ok(serde_json::from_value(data)?);
        }
    }

    trace!("Decoding unwrapped body");
    Ok(serde_json::from_slice(body)?)
}

/// Map a non-2xx status to an API error, preferring the envelope's message.
pub(crate) fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_slice::<Envelope>(body)
        .ok()
        .and_then(|e| e.error_message().map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {}", status));

    warn!(status = status, message = %message, "RateLimitX API returned an error");
    Err(RateLimitXError::api(status, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RateLimitCheckResponse, RateLimitRule};
    use serde_json::json;

    #[test]
    fn test_api_key_wins_over_token() {
        let state = AuthState {
            api_key: Some("rlx_key".to_string()),
            access_token: Some("jwt".to_string()),
        };
        assert_eq!(state.header(), Some(AuthHeader::ApiKey("rlx_key".to_string())));
    }

    #[test]
    fn test_token_used_without_key() {
        let state = AuthState {
            api_key: None,
            access_token: Some("jwt".to_string()),
        };
        assert_eq!(state.header(), Some(AuthHeader::Bearer("jwt".to_string())));
        assert_eq!(AuthState::default().header(), None);
    }

    #[test]
    fn test_decode_unwrapped_check_response() {
        let body = br#"{"allowed":true,"remaining":9,"resetAt":1704067260,"retryAfter":0}"#;
        let resp: RateLimitCheckResponse = decode_body(200, body).unwrap();
        assert!(resp.allowed);
        assert_eq!(resp.remaining, 9);
    }

    #[test]
    fn test_decode_envelope_data_equals_direct_decode() {
        let data = json!([{
            "id": "r1",
            "resource": "api.search",
            "algorithm": "TOKEN_BUCKET",
            "maxRequests": 10,
            "windowSeconds": 1,
            "identifierType": "USER_ID",
            "limitScope": "RESOURCE",
            "priority": 0,
            "active": true
        }]);
        let body = serde_json::to_vec(&json!({
            "success": true,
            "data": data.clone(),
            "timestamp": "2024-01-01T00:00:00"
        }))
        .unwrap();

        let wrapped: Vec<RateLimitRule> = decode_body(200, &body).unwrap();
        let direct: Vec<RateLimitRule> = serde_json::from_value(data).unwrap();
        assert_eq!(wrapped, direct);
    }

    #[test]
    fn test_error_message_from_envelope() {
        let body = br#"{"success":false,"error":"Invalid API key","timestamp":"x"}"#;
        let err = decode_body::<serde_json::Value>(401, body).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn test_error_without_envelope_message() {
        let body = br#"{"allowed":false,"remaining":0,"resetAt":0,"retryAfter":60}"#;
        let err = decode_body::<RateLimitCheckResponse>(429, body).unwrap_err();
        assert!(err.is_rate_limited());
        assert_eq!(err.to_string(), "Request failed with status 429");

        let err = decode_body::<serde_json::Value>(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_redirect_status_is_error() {
        let err = check_status(304, b"").unwrap_err();
        assert_eq!(err.status(), Some(304));
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        let err = decode_body::<RateLimitCheckResponse>(200, b"not json").unwrap_err();
        assert!(matches!(err, RateLimitXError::Json(_)));
    }

    #[test]
    fn test_success_with_null_data_falls_back_to_raw() {
        let body = br#"{"success":true,"data":null}"#;
        let value: serde_json::Value = decode_body(200, body).unwrap();
        assert_eq!(value, json!({"success": true, "data": null}));
    }
}
