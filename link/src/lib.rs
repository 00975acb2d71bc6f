//! Typed HTTP client for ShoalDB clusters.
//!
//! ShoalDB nodes speak JSON over HTTP. This crate wraps the endpoints the
//! tooling around the engine needs: SQL execution, cluster topology, table
//! management and bulk indexing. Responses are parsed into typed models;
//! a 2xx body that does not match the documented shape surfaces as
//! [`ShoalLinkError::MalformedResponse`] instead of an arbitrary
//! missing-key failure at the call site.
//!
//! One client talks to one node. To reach a specific cluster member, build
//! another client pointed at that member's URL.
//!
//! # Example
//!
//! ```rust,no_run
//! use shoal_link::{ShoalLinkClient, SqlRequest};
//!
//! # async fn example() -> Result<(), shoal_link::ShoalLinkError> {
//! let client = ShoalLinkClient::builder()
//!     .base_url("http://localhost:9200")
//!     .build()?;
//!
//! let response = client
//!     .execute_sql(&SqlRequest::new("SELECT COUNT(*) FROM test"))
//!     .await?;
//! println!("{} columns, {} rows", response.columns.len(), response.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod bulk;
pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use bulk::BulkBody;
pub use client::{ShoalLinkClient, ShoalLinkClientBuilder};
pub use error::{Result, ShoalLinkError};
pub use models::{
    ColumnInfo, HttpInfo, NodeInfo, NodesInfo, SqlRequest, SqlResponse, TableSettings,
    ALLOCATION_EXCLUDE_NAME, JDBC_TYPE_BIGINT,
};
