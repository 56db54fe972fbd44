//! Error types

use thiserror::Error;

use crate::forms::FormErrors;

/// API and repository errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection, CORS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status not covered by a more specific variant
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required or rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input rejected before it reached the API
    #[error("Validation error: {0}")]
    Validation(FormErrors),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FormErrors> for ApiError {
    fn from(errors: FormErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// Result type for API and repository operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Login gate errors
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session storage error: {0}")]
    Storage(String),
}
