//! Rate limit rule management.

use reqwest::Method;

use super::RateLimitXClient;
use crate::error::Result;
use crate::models::{CreateRuleRequest, RateLimitRule, UpdateRuleRequest};

impl RateLimitXClient {
    pub async fn get_rules(&self) -> Result<Vec<RateLimitRule>> {
        self.get("/rules").await
    }

    pub async fn create_rule(&self, request: &CreateRuleRequest) -> Result<RateLimitRule> {
        self.send_json(Method::POST, "/rules", request).await
    }

    /// Update a rule. Only the fields set on `request` are sent.
    pub async fn update_rule(
        &self,
        rule_id: &str,
        request: &UpdateRuleRequest,
    ) -> Result<RateLimitRule> {
        self.send_json(Method::PUT, &format!("/rules/{}", rule_id), request)
            .await
    }

    pub async fn delete_rule(&self, rule_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/rules/{}", rule_id))
            .await
    }
}
