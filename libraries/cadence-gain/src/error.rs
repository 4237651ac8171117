//! Error types for ReplayGain handling

use thiserror::Error;

/// Result type for gain operations
pub type Result<T> = std::result::Result<T, GainError>;

/// Errors that can occur while reading gain metadata
#[derive(Error, Debug)]
pub enum GainError {
    /// Tag reading error
    #[error("Failed to read audio tags: {0}")]
    TagReadError(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<lofty::error::LoftyError> for GainError {
    fn from(err: lofty::error::LoftyError) -> Self {
        Self::TagReadError(err.to_string())
    }
}
