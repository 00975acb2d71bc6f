//! Wire models for the ShoalDB HTTP API.
//!
//! One type per file, re-exported here so callers can use
//! `shoal_link::models::SqlResponse` directly.

pub mod column_info;
pub mod nodes_info;
pub mod sql_request;
pub mod sql_response;
pub mod table_settings;

pub use column_info::{ColumnInfo, JDBC_TYPE_BIGINT};
pub use nodes_info::{HttpInfo, NodeInfo, NodesInfo};
pub use sql_request::SqlRequest;
pub use sql_response::SqlResponse;
pub use table_settings::{TableSettings, ALLOCATION_EXCLUDE_NAME};
