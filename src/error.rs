//! Error types for the INDX SDK

use thiserror::Error;

/// Result type alias for INDX operations
pub type Result<T> = std::result::Result<T, IndxError>;

/// Main error type for INDX SDK operations
#[derive(Error, Debug)]
pub enum IndxError {
    /// The server answered with a status other than 200
    #[error("Request failed with HTTP {status}: {body}")]
    RequestFailed {
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body, unmodified
        body: String,
    },

    /// HTTP transport errors (DNS, TLS, connection, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter errors, raised before anything is signed or sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl IndxError {
    /// Create a new request failed error
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// HTTP status of a [`IndxError::RequestFailed`], or of an
    /// [`IndxError::Http`] error that carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body carried by a [`IndxError::RequestFailed`]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}
