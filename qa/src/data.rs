//! Synthetic row generation and bulk loading.

use crate::error::{QaError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use shoal_link::{BulkBody, ShoalLinkClient};

/// One synthetic row.
///
/// Field values are a fixed function of the row index so any slice of
/// loaded data is checkable by inspection: consecutive integers across
/// `a`, `b`, `c`, with `a` a multiple of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticRow {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl SyntheticRow {
    /// Row for 0-based index `i`: `a = 3*i`, `b = a + 1`, `c = b + 1`.
    pub fn for_index(i: u32) -> Self {
        let a = 3 * i64::from(i);
        Self {
            a,
            b: a + 1,
            c: a + 2,
        }
    }
}

/// NDJSON body for `count` rows: one `index` action per row, keyed by the
/// stringified row index.
fn bulk_body_for(count: u32) -> shoal_link::Result<BulkBody> {
    let mut body = BulkBody::new();
    for i in 0..count {
        body.index(&i.to_string(), &SyntheticRow::for_index(i))?;
    }
    Ok(body)
}

/// Load `count` synthetic rows into `table` as one bulk batch.
///
/// Document ids are the stringified row indices. The batch is sent with
/// refresh forced so a query issued immediately afterwards observes every
/// row. One request, one attempt; any failure is returned as-is.
pub async fn load_rows(client: &ShoalLinkClient, table: &str, count: u32) -> Result<()> {
    if count == 0 {
        return Err(QaError::ConfigurationError(
            "document count must be positive".into(),
        ));
    }

    let body = bulk_body_for(count)?;
    debug!("[LOAD] Bulk indexing {} rows into '{}'", count, table);
    client.bulk_index(table, &body, true).await?;
    Ok(())
}
