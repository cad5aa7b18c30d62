//! Error types for Cucumber Studio API operations.

use thiserror::Error;

/// Errors that can occur during Cucumber Studio API operations.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Configuration is missing or incomplete.
    #[error("Cucumber Studio configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration is present but unusable (bad proxy, bad header).
    #[error("Invalid Cucumber Studio configuration: {0}")]
    InvalidConfig(String),

    /// Request arguments rejected before anything was sent.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// API request failed with a non-success status.
    #[error("Cucumber Studio API error ({status_code}): {message}")]
    ApiError {
        status_code: u16,
        message: String,
        /// Raw response body as returned by the backend.
        body: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl StudioError {
    /// HTTP status of a backend rejection, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StudioError::ApiError { status_code, .. } => Some(*status_code),
            StudioError::HttpError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend refused the credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

/// Result type alias for Cucumber Studio operations.
pub type Result<T> = core::result::Result<T, StudioError>;
