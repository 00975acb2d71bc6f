//! Main ShoalDB client with builder pattern.
//!
//! Provides the primary interface for connecting to ShoalDB nodes
//! and executing operations.

use crate::{
    bulk::BulkBody,
    error::{Result, ShoalLinkError},
    models::{NodesInfo, SqlRequest, SqlResponse, TableSettings},
    query::SqlExecutor,
};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Main ShoalDB client.
///
/// Use [`ShoalLinkClientBuilder`] to construct instances with custom
/// configuration. A client is pinned to the node named by its `base_url`;
/// requests sent through it are answered by that node, wherever the data
/// lives. Build one client per node to address cluster members
/// individually.
///
/// # Examples
///
/// ```rust,no_run
/// use shoal_link::{ShoalLinkClient, SqlRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ShoalLinkClient::builder()
///     .base_url("http://localhost:9200")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let response = client
///     .execute_sql(&SqlRequest::new("SELECT COUNT(*) FROM test"))
///     .await?;
/// println!("Result: {:?}", response.rows);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ShoalLinkClient {
    base_url: String,
    http_client: reqwest::Client,
    sql_executor: SqlExecutor,
}

impl ShoalLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> ShoalLinkClientBuilder {
        ShoalLinkClientBuilder::new()
    }

    /// Node URL this client is pinned to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a SQL request and parse the full structured response.
    pub async fn execute_sql(&self, request: &SqlRequest) -> Result<SqlResponse> {
        self.sql_executor.execute(request).await
    }

    /// Fetch the cluster topology as this node reports it.
    ///
    /// The identifiers keying the returned map are the ones allocation
    /// settings refer to. A document missing the per-node HTTP section
    /// fails with [`ShoalLinkError::MalformedResponse`].
    pub async fn nodes_info(&self) -> Result<NodesInfo> {
        let url = format!("{}/_nodes", self.base_url);
        log::debug!("[NODES] GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(read_server_error(response).await);
        }

        let body = response.text().await?;
        let info = serde_json::from_str::<NodesInfo>(&body).map_err(|source| {
            ShoalLinkError::MalformedResponse {
                endpoint: "/_nodes",
                source,
            }
        })?;
        log::debug!("[NODES] {} nodes reported", info.nodes.len());
        Ok(info)
    }

    /// Create a table with the given settings.
    pub async fn create_table(&self, table: &str, settings: &TableSettings) -> Result<()> {
        let url = format!("{}/{}", self.base_url, table);
        log::debug!("[TABLE] PUT {}", url);

        let response = self.http_client.put(&url).json(settings).send().await?;
        if !response.status().is_success() {
            return Err(read_server_error(response).await);
        }
        log::debug!("[TABLE] Created '{}'", table);
        Ok(())
    }

    /// Drop a table.
    ///
    /// Dropping a table that does not exist is a server rejection like any
    /// other; callers that tolerate it match on the 404 status code.
    pub async fn delete_table(&self, table: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, table);
        log::debug!("[TABLE] DELETE {}", url);

        let response = self.http_client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(read_server_error(response).await);
        }
        log::debug!("[TABLE] Dropped '{}'", table);
        Ok(())
    }

    /// Send one bulk body to `{table}/_bulk`.
    ///
    /// With `refresh` set the batch is visible to queries before the call
    /// returns. The summary body is not inspected; the batch is
    /// all-or-nothing from the caller's point of view and a rejected
    /// request surfaces as [`ShoalLinkError::ServerError`].
    pub async fn bulk_index(&self, table: &str, body: &BulkBody, refresh: bool) -> Result<()> {
        let mut url = format!("{}/{}/_bulk", self.base_url, table);
        if refresh {
            url.push_str("?refresh=true");
        }
        log::debug!("[BULK] PUT {} operations={}", url, body.len());

        let response = self
            .http_client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body.as_ndjson().to_string())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(read_server_error(response).await);
        }
        log::debug!("[BULK] Indexed {} documents into '{}'", body.len(), table);
        Ok(())
    }
}

/// Turn a non-success response into a [`ShoalLinkError::ServerError`],
/// keeping whatever error text the node returned.
async fn read_server_error(response: reqwest::Response) -> ShoalLinkError {
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    log::warn!(
        "[LINK] Server error: status={} message=\"{}\"",
        status,
        message
    );
    ShoalLinkError::ServerError {
        status_code: status.as_u16(),
        message,
    }
}

/// Builder for configuring [`ShoalLinkClient`] instances.
pub struct ShoalLinkClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl ShoalLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Node URL, e.g. `http://localhost:9200`. Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overall per-request timeout (default 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ShoalLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ShoalLinkError::ConfigurationError("base_url is required".into()))?;

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ShoalLinkError::ConfigurationError(e.to_string()))?;

        let sql_executor = SqlExecutor::new(base_url.clone(), http_client.clone());

        Ok(ShoalLinkClient {
            base_url,
            http_client,
            sql_executor,
        })
    }
}
