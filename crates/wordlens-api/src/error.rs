//! Dictionary API error types.

use thiserror::Error;

/// Errors that can occur while looking up a word.
///
/// A "no definitions" answer is not an error; it is
/// [`crate::LookupOutcome::NotFound`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not JSON, or an entry did not match the
    /// expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API answered with an empty sequence.
    #[error("empty result for '{0}'")]
    EmptyResult(String),

    /// The configured endpoint could not be used to build a client.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
