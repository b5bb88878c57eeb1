//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status; the response body text is the message
    #[error("{message}")]
    Request { status: u16, message: String },

    /// 2xx response with a body that could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Update attempted on a draft that has no server id
    #[error("Record has no id")]
    MissingId,

    /// In-process transport failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// HTTP status for a `Request` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
