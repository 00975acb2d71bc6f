//! NDJSON bodies for the bulk-indexing endpoint.
//!
//! The bulk endpoint takes newline-delimited JSON: an action line naming
//! the document id, then the document itself on the next line. [`BulkBody`]
//! assembles that body with `serde_json` so every line is well-formed.

use crate::error::Result;
use serde::Serialize;
use serde_json::json;

/// Accumulates action/document line pairs for one bulk request.
///
/// # Example
///
/// ```rust
/// use shoal_link::BulkBody;
/// use serde_json::json;
///
/// let mut body = BulkBody::new();
/// body.index("0", &json!({"a": 0})).unwrap();
/// assert_eq!(body.as_ndjson(), "{\"index\":{\"_id\":\"0\"}}\n{\"a\":0}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BulkBody {
    buf: String,
    operations: usize,
}

impl BulkBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `index` action with an explicit document id.
    pub fn index(&mut self, id: &str, document: &impl Serialize) -> Result<()> {
        let action = json!({"index": {"_id": id}});
        let document = serde_json::to_string(document)?;
        self.buf.push_str(&action.to_string());
        self.buf.push('\n');
        self.buf.push_str(&document);
        self.buf.push('\n');
        self.operations += 1;
        Ok(())
    }

    /// Number of buffered operations.
    pub fn len(&self) -> usize {
        self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations == 0
    }

    /// The assembled newline-delimited body, one trailing newline included.
    pub fn as_ndjson(&self) -> &str {
        &self.buf
    }
}
