//! Analysis API error types.

use thiserror::Error;

/// Result type for analysis API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the analysis API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The request URL could not be built from the base URL and path.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the connection failed.
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The service answered with a non-success HTTP status.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON document.
    #[error("Invalid response from API: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a reqwest transport error.
    pub fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Request {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// HTTP status code, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
