//! SQL query request payload.

use serde::{Deserialize, Serialize};

/// Request body for `POST /_sql`.
///
/// The optional `mode` tags the request with a client dialect (for example
/// `"jdbc"`). It is sent through unchanged and never interpreted on this
/// side; when absent the key is omitted from the payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlRequest {
    /// SQL text to execute.
    pub query: String,
    /// Optional client dialect marker, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl SqlRequest {
    /// Plain request with no dialect marker.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            mode: None,
        }
    }

    /// Attach a dialect marker.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}
