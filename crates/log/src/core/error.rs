//! Error handling for strata-log

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Level string is not one of the known severities
    #[error("Invalid level '{0}': expected one of error, warn, info, http, verbose, debug, silly")]
    Level(String),

    /// IO error while writing a rendered line
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Global subscriber could not be installed
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

impl LogError {
    /// Returns true when the error stems from bad configuration input
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Level(_))
    }
}
