//! Centralized error types for scamscan.

use thiserror::Error;

/// Failure to turn an uploaded file into plain text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Empty file or unable to extract text")]
    EmptyContent,

    #[error("PDF parse error: {0}")]
    ParseError(String),

    #[error("Text file is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Failure of a single call to the text-generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Model service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Model service rejected the credential (HTTP {0})")]
    Unauthorized(u16),

    #[error("Model service rate limit reached")]
    RateLimited,

    #[error("Model service error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Model service returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("Model service returned an empty response")]
    EmptyResponse,

    #[error("Model returned an unexpected category: '{0}'")]
    UnexpectedCategory(String),

    #[error("Model service is not configured")]
    Unavailable,
}

/// Startup configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing credential: set {0} to enable classification")]
    MissingCredential(&'static str),

    #[error("Invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// Main error type for scamscan operations.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Invalid URL format: '{0}' must start with http:// or https://")]
    InvalidUrl(String),
}

/// Result type for scamscan operations.
pub type ScanResult<T> = Result<T, ScanError>;

impl ConfigError {
    /// Create an invalid setting error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name,
            reason: reason.into(),
        }
    }
}
