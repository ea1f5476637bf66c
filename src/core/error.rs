//! Error types for the Kudos client.

use thiserror::Error;

/// Errors from the API layer.
///
/// Every variant is recoverable: the engine rolls back any optimistic
/// change before surfacing one of these, and the hub remains usable
/// afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network-level failure (unreachable host, timeout, connection reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server rejected the request with a non-success status.
    #[error("server rejected request (status {status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or a generic one if the body had none.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// The message to surface to the viewer for this failure.
    ///
    /// Server-provided messages are preferred over generic transport text.
    pub fn surface_message(&self) -> &str {
        match self {
            ApiError::Rejected { message, .. } => message,
            ApiError::Transport(msg) => msg,
            ApiError::InvalidBody(msg) => msg,
        }
    }
}

/// Top-level client errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// API request failed; local state has already been rolled back.
    #[error("api error: {0}")]
    Api(#[from] ApiError),
}
