//! Error types for queue shuffling

use thiserror::Error;

/// Shuffle errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// The caller-supplied random source could not produce a value
    #[error("Random source failed: {0}")]
    RandomSource(String),

    /// Invalid shuffle configuration
    #[error("Invalid shuffle configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for shuffle operations
pub type Result<T> = std::result::Result<T, ShuffleError>;
