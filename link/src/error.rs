//! Error types for shoal-link.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShoalLinkError>;

/// Errors surfaced by [`ShoalLinkClient`](crate::ShoalLinkClient) operations.
///
/// Transport failures and server rejections are kept apart so callers can
/// tell a dead node from a request the node refused, and refused requests
/// carry the status code and whatever error text the node returned.
#[derive(Error, Debug)]
pub enum ShoalLinkError {
    /// The client was misconfigured (missing or invalid builder input).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The request could not be completed at the transport level.
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The node answered 2xx but the body did not match the documented shape.
    #[error("Malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
