//! Error types for request construction.

use thiserror::Error;

/// Errors that can occur while building an [`HttpRequest`](crate::HttpRequest).
#[derive(Debug, Error)]
pub enum Error {
    /// The body was declared as JSON but could not be parsed.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
