//! Fully structured response of the SQL endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::ColumnInfo;

/// Parsed body of a `POST /_sql` response.
///
/// Column order and row order are preserved exactly as the engine returned
/// them, and equality is deep: two responses are equal only when every
/// column field and every cell matches. Unknown fields fail parsing so a
/// response with extra payload never compares equal to one without.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SqlResponse {
    /// One descriptor per result column, in result order.
    pub columns: Vec<ColumnInfo>,
    /// Row-major cell data; each inner vector is one row.
    pub rows: Vec<Vec<JsonValue>>,
}

impl SqlResponse {
    /// Column labels in result order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
