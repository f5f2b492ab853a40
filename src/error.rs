// src/error.rs
// Error types for validator scoring and selection

use thiserror::Error;

/// Main error type for the validator-rank library
#[derive(Error, Debug)]
pub enum RankError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using RankError
pub type Result<T> = std::result::Result<T, RankError>;

impl RankError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        RankError::InvalidInput(msg.into())
    }

    /// True for the input-validation failures (empty set, malformed record)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RankError::InvalidInput(_))
    }
}

impl From<toml::de::Error> for RankError {
    fn from(err: toml::de::Error) -> Self {
        RankError::Config(err.to_string())
    }
}
