//! Cross-cutting error types for wordlens.
//!
//! Network and configuration errors live in their own crates. Failures of a
//! single lookup never surface as errors to the user; they collapse into
//! [`crate::RenderState::Error`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// An overlap policy name did not match any known policy.
    #[error("unknown overlap policy '{0}' (expected 'last-write-wins' or 'latest-request-wins')")]
    UnknownPolicy(String),

    /// Display limits that would hide every definition.
    #[error("invalid display limit for '{field}': {reason}")]
    InvalidLimit { field: String, reason: String },
}
