//! SQL query execution with HTTP transport.

use crate::error::{Result, ShoalLinkError};
use crate::models::{SqlRequest, SqlResponse};
use log::{debug, warn};
use std::time::Instant;

/// Handles SQL execution against a single node.
#[derive(Clone)]
pub struct SqlExecutor {
    base_url: String,
    http_client: reqwest::Client,
}

impl SqlExecutor {
    pub(crate) fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    /// Execute one SQL request and parse the full structured response.
    ///
    /// Single attempt: transport failures and non-success statuses are
    /// returned to the caller as-is, never retried.
    pub async fn execute(&self, request: &SqlRequest) -> Result<SqlResponse> {
        let url = format!("{}/_sql", self.base_url);
        debug!(
            "[SQL] POST {} query=\"{}\"",
            url,
            query_preview(&request.query)
        );

        let start = Instant::now();
        let response = self.http_client.post(&url).json(request).send().await?;

        let status = response.status();
        debug!(
            "[SQL] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(
                "[SQL] Server rejected query: status={} message=\"{}\"",
                status, message
            );
            return Err(ShoalLinkError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SqlResponse>(&body).map_err(|source| {
            warn!("[SQL] Response body did not match the documented shape: {}", source);
            ShoalLinkError::MalformedResponse {
                endpoint: "/_sql",
                source,
            }
        })?;

        debug!(
            "[SQL] Parsed {} columns, {} rows in {}ms total",
            parsed.columns.len(),
            parsed.rows.len(),
            start.elapsed().as_millis()
        );
        Ok(parsed)
    }
}

const PREVIEW_CHARS: usize = 80;

/// Single-line preview of the query text for logging, truncated on a
/// character boundary.
fn query_preview(query: &str) -> String {
    let mut preview: String = query.chars().take(PREVIEW_CHARS).collect();
    if preview.len() < query.len() {
        preview.push_str("...");
    }
    preview.replace('\n', " ")
}
