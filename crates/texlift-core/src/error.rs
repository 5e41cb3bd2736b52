//! Error types for texlift

use thiserror::Error;

/// The main error type for texlift operations
#[derive(Debug, Error)]
pub enum TexliftError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("No supported texture files in {directory} (supported: {supported})")]
    NoTextureFiles { directory: String, supported: String },

    #[error("Invalid identifier prefix: {0}")]
    InvalidPrefix(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for texlift operations
pub type Result<T> = std::result::Result<T, TexliftError>;
