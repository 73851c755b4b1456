//! Error types for save operations.
//!
//! Everything that can go wrong between capturing a snapshot and the
//! server acknowledging it lands in one enum. All variants are transient
//! from the coordinator's point of view: a failed save is reported and the
//! next tick tries again with fresh data.

use std::io;
use thiserror::Error;

/// Error from submitting a note snapshot to the backend.
#[derive(Error, Debug)]
pub enum SaveError {
    /// IO error (draft file access, socket trouble)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error (connect, timeout, malformed response body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("save rejected: {status} - {body}")]
    Rejected { status: u16, body: String },

    /// Anything not covered by a specific variant
    #[error("{0}")]
    Other(String),
}

impl SaveError {
    /// Create a rejection error from a response status and body
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    /// Create a generic error with a custom message
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for save operations
pub type SaveResult<T> = Result<T, SaveError>;
