//! Error types for the harness.

use crate::diff::ResultDiff;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QaError>;

/// Failure modes of a harness run.
///
/// Transport and server failures pass through from the client unchanged.
/// The harness-level variants keep assertion failures (a node that should
/// exist, a count that should match) distinguishable from plumbing
/// failures.
#[derive(Error, Debug)]
pub enum QaError {
    /// Client-level failure: transport, server rejection or parsing.
    #[error(transparent)]
    Link(#[from] shoal_link::ShoalLinkError),

    /// A harness entry point was given unusable input.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The topology did not contain a node bound to the given address.
    #[error("no node in the cluster topology is bound to {address}")]
    NodeNotFound { address: String },

    /// The count response differed from the locally built expected result.
    #[error("count result for '{table}' does not match:\n{diff}")]
    CountMismatch { table: String, diff: ResultDiff },
}
