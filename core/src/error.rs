//! Error types for the todo API client.
//!
//! # Design
//! `ApiError` keeps the diagnostic detail of a failed call: whether the
//! request never completed (`Transport`) or completed with a non-2xx status
//! (`Http`, with the raw status and body). That detail only ever reaches the
//! logs. What the user sees is a `Banner`, one fixed message per operation.

use thiserror::Error;

/// Errors produced while building, executing or parsing an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the request completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The single user-visible error slot.
///
/// Each primary operation maps every failure to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Banner {
    #[error("Failed to load todos. Please check your connection.")]
    Load,
    #[error("Failed to add todo. Please try again.")]
    Add,
    #[error("Failed to update todo. Please try again.")]
    Update,
    #[error("Failed to delete todo. Please try again.")]
    Delete,
}
