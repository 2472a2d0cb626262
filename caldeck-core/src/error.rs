//! Error types for caldeck.

use thiserror::Error;

/// Errors that can occur in caldeck operations.
#[derive(Error, Debug)]
pub enum CalDeckError {
    #[error("Invalid event: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for caldeck operations.
pub type CalDeckResult<T> = Result<T, CalDeckError>;
