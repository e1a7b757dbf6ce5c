//! Bulk rule import and export.

use reqwest::Method;
use tracing::{info, instrument};

use super::transport::parse_response;
use super::RateLimitXClient;
use crate::error::{RateLimitXError, Result};
use crate::models::{BulkFormat, ImportRulesResponse, PortableRule};

impl RateLimitXClient {
    /// Export all rules as a JSON or YAML document.
    ///
    /// The document is returned verbatim; use
    /// [`PortableRule::parse_document`] to read it.
    #[instrument(skip(self))]
    pub async fn export_rules(&self, format: BulkFormat) -> Result<String> {
        let path = format!("/bulk/export?format={}", format);
        let response = self.do_request(Method::GET, &path, None::<&()>).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RateLimitXError::api(
                status.as_u16(),
                format!("Export failed with status {}", status.as_u16()),
            ));
        }
        Ok(body)
    }

    /// Import rules from a JSON or YAML document. Rules the service rejects
    /// are counted as skipped and listed in `errors`.
    #[instrument(skip(self, content))]
    pub async fn import_rules(
        &self,
        content: impl Into<Vec<u8>>,
        format: BulkFormat,
    ) -> Result<ImportRulesResponse> {
        let response = self
            .do_request_with_file("/bulk/import", content.into(), format.file_name(), format.as_str())
            .await?;
        let result: ImportRulesResponse = parse_response(response).await?;

        info!(
            created = result.created,
            skipped = result.skipped,
            "Rules imported"
        );
        Ok(result)
    }

    /// Render `rules` in `format` and import them.
    pub async fn import_rule_set(
        &self,
        rules: &[PortableRule],
        format: BulkFormat,
    ) -> Result<ImportRulesResponse> {
        let document = PortableRule::render_document(rules, format)?;
        self.import_rules(document, format).await
    }
}
