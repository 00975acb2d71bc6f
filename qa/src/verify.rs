//! Count verification against a locally built expected result.

use crate::diff::ResultDiff;
use crate::error::{QaError, Result};
use log::{debug, warn};
use serde_json::json;
use shoal_link::{ColumnInfo, ShoalLinkClient, SqlRequest, SqlResponse, JDBC_TYPE_BIGINT};

/// Column label the engine reports for a canonicalized `COUNT(*)`.
pub const COUNT_COLUMN_NAME: &str = "COUNT(1)";
/// Engine type name of the count column.
pub const COUNT_COLUMN_TYPE: &str = "long";
/// Display width the engine advertises for 64-bit integer columns.
pub const COUNT_DISPLAY_SIZE: u32 = 20;

/// Build the exact response expected for a count of `count` rows: one
/// BIGINT column named [`COUNT_COLUMN_NAME`] and one single-cell row.
///
/// Pure and deterministic, and always built before the query is issued so
/// the expectation cannot be influenced by what comes back.
pub fn expected_count_response(count: u64) -> SqlResponse {
    SqlResponse {
        columns: vec![ColumnInfo::new(
            COUNT_COLUMN_NAME,
            COUNT_COLUMN_TYPE,
            JDBC_TYPE_BIGINT,
            COUNT_DISPLAY_SIZE,
        )],
        rows: vec![vec![json!(count)]],
    }
}

/// Count the rows of `table` through `client` and compare the full
/// structured response.
///
/// The caller picks the entry point; this function never opens its own
/// connection, so routing the count through one specific node is entirely
/// the caller's choice. Any structural deviation, in column metadata or
/// row data, fails with [`QaError::CountMismatch`] carrying a
/// field-by-field diff. One attempt, no retries.
pub async fn verify_count(
    client: &ShoalLinkClient,
    table: &str,
    expected_count: u64,
    mode: Option<&str>,
) -> Result<()> {
    let expected = expected_count_response(expected_count);

    let mut request = SqlRequest::new(format!("SELECT COUNT(*) FROM {table}"));
    if let Some(mode) = mode {
        request = request.with_mode(mode);
    }

    debug!("[VERIFY] Counting '{}' via {}", table, client.base_url());
    let actual = client.execute_sql(&request).await?;

    match ResultDiff::between(&expected, &actual) {
        None => {
            debug!(
                "[VERIFY] Count for '{}' matches ({} rows)",
                table, expected_count
            );
            Ok(())
        }
        Some(diff) => {
            warn!("[VERIFY] Count mismatch for '{}'", table);
            Err(QaError::CountMismatch {
                table: table.to_string(),
                diff,
            })
        }
    }
}
