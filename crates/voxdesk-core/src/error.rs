//! Error types for voxdesk.

use thiserror::Error;

/// Result type alias using voxdesk's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for voxdesk.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    // Auth errors
    #[error("Client token request failed: {0}")]
    ClientToken(String),

    #[error("Identity provider error: {0}")]
    Identity(String),

    // Object store errors
    #[error("Object store error: {0}")]
    Store(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Returns the HTTP status code if the server answered with a non-success status.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::StatusError { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never got a response from the server.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Http(HttpError::ConnectionFailed(_) | HttpError::Timeout)
        )
    }
}
