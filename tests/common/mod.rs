//! In-process mock of the RateLimitX service.
//!
//! Responses are registered per method and path; every request is recorded so
//! tests can assert on exactly what the client put on the wire.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use ratelimitx::RateLimitXClient;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
struct Canned {
    status: u16,
    content_type: &'static str,
    body: String,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(String, String), Canned>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    pub base_url: String,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.insert(method, path, status, "application/json", body.to_string());
    }

    /// Answer `method path` with a successful envelope around `data`.
    pub fn respond_data(&self, method: &str, path: &str, data: Value) {
        self.respond(
            method,
            path,
            200,
            json!({
                "success": true,
                "data": data,
                "error": null,
                "timestamp": "2024-01-01T00:00:00"
            }),
        );
    }

    /// Answer `method path` with a plain text body.
    pub fn respond_text(&self, method: &str, path: &str, status: u16, body: &str) {
        self.insert(method, path, status, "text/plain", body.to_string());
    }

    fn insert(&self, method: &str, path: &str, status: u16, content_type: &'static str, body: String) {
        self.state.routes.lock().insert(
            (method.to_string(), path.to_string()),
            Canned { status, content_type, body },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.state
            .requests
            .lock()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn client(&self, api_key: &str) -> RateLimitXClient {
        RateLimitXClient::new(&self.base_url, api_key).unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: body.to_vec(),
    });

    let canned = state
        .routes
        .lock()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    match canned {
        Some(canned) => (
            StatusCode::from_u16(canned.status).unwrap(),
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            json!({"success": false, "error": format!("No route for {} {}", method, uri.path())})
                .to_string(),
        )
            .into_response(),
    }
}

pub fn check_response(allowed: bool, remaining: i64) -> Value {
    json!({
        "allowed": allowed,
        "remaining": remaining,
        "resetAt": 1704067260,
        "retryAfter": if allowed { 0 } else { 60 }
    })
}

pub fn rule_json(id: &str, resource: &str, active: bool) -> Value {
    json!({
        "id": id,
        "resource": resource,
        "algorithm": "TOKEN_BUCKET",
        "maxRequests": 100,
        "windowSeconds": 60,
        "burstCapacity": 20,
        "identifierType": "USER_ID",
        "limitScope": "RESOURCE",
        "priority": 0,
        "active": active,
        "createdAt": "2024-01-01T00:00:00",
        "updatedAt": "2024-01-01T00:00:00"
    })
}

const TENANT_ID: &str = "3f2b8a4e-1c2d-4e5f-8a9b-0c1d2e3f4a5b";

/// A rule exactly as the service serializes a freshly created row: nullable
/// columns are `null` and entity-only keys are present.
pub fn stored_rule_json(id: &str, resource: &str) -> Value {
    json!({
        "id": id,
        "tenantId": TENANT_ID,
        "resource": resource,
        "algorithm": "SLIDING_WINDOW",
        "maxRequests": 50,
        "windowSeconds": 60,
        "burstCapacity": null,
        "identifierType": "USER_ID",
        "active": true,
        "limitScope": "RESOURCE",
        "priority": null,
        "conditionJson": null,
        "createdAt": "2024-01-01T00:00:00",
        "updatedAt": null
    })
}

pub fn stored_alert_json(id: &str) -> Value {
    json!({
        "id": id,
        "tenantId": TENANT_ID,
        "alertType": "RATE_LIMIT_SPIKE",
        "destination": "https://hooks.example.com/rl",
        "destinationType": "WEBHOOK",
        "enabled": true,
        "thresholdPercent": null,
        "createdAt": "2024-01-01T00:00:00"
    })
}

pub fn stored_api_key_json(id: &str) -> Value {
    json!({
        "id": id,
        "tenantId": TENANT_ID,
        "keyHash": "9f86d081884c7d659a2feaa0c55ad015",
        "name": null,
        "environment": "production",
        "active": true,
        "lastUsedAt": null,
        "createdAt": "2024-01-01T00:00:00"
    })
}
