/// Error types for shelf fetching and configuration
use thiserror::Error;

/// Why a shelf list could not be obtained.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Server answered with a non-2xx status
    #[error("shelves endpoint returned HTTP {0}")]
    Status(u16),

    /// Request never produced a response (DNS, offline, aborted, ...)
    #[error("shelves request failed: {0}")]
    Transport(String),

    /// Body was not a JSON array of `{id, code}` records
    #[error("failed to decode shelves response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Invalid page configuration value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown failure display {0:?} (expected \"sentinel\" or \"placeholder\")")]
    FailureDisplay(String),

    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid config JSON: {0}")]
    Json(String),
}

/// Type alias for Results using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;
