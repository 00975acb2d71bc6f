//! Column descriptor returned by the SQL endpoint.

use serde::{Deserialize, Serialize};

/// JDBC type code for 64-bit integers (`java.sql.Types.BIGINT`).
pub const JDBC_TYPE_BIGINT: i32 = -5;

/// Metadata for one result column.
///
/// The engine reports the SQL-level type name alongside the numeric JDBC
/// type code and the display width. Result verification compares all four
/// fields, so unknown extra fields are rejected at parse time rather than
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnInfo {
    /// Column label, e.g. `COUNT(1)` for a canonicalized `COUNT(*)`.
    pub name: String,
    /// Engine type name, e.g. `long`.
    #[serde(rename = "type")]
    pub column_type: String,
    /// Numeric JDBC type code, e.g. [`JDBC_TYPE_BIGINT`].
    pub jdbc_type: i32,
    /// Display width the engine advertises for the column.
    pub display_size: u32,
}

impl ColumnInfo {
    pub fn new(
        name: impl Into<String>,
        column_type: impl Into<String>,
        jdbc_type: i32,
        display_size: u32,
    ) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            jdbc_type,
            display_size,
        }
    }
}
