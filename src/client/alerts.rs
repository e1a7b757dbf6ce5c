//! Alert configuration.

use reqwest::Method;

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{AlertConfiguration, CreateAlertRequest};

impl RateLimitXClient {
    pub async fn get_alerts(&self) -> Result<Vec<AlertConfiguration>> {
        self.get("/alerts").await
    }

    pub async fn create_alert(&self, request: &CreateAlertRequest) -> Result<AlertConfiguration> {
        self.send_json(Method::POST, "/alerts", request).await
    }

    pub async fn delete_alert(&self, alert_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/alerts/{}", alert_id))
            .await
    }
}
