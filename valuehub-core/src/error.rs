//! Error types for valuehub-core

use thiserror::Error;

/// Main error type for the valuehub-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Key/value store error
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Two catalog entries share a name (names are the catalog identity key)
    #[error("duplicate tool name in catalog: {0}")]
    DuplicateTool(String),

    /// User id not present in the directory
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Caller-supplied value outside its allowed range
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for valuehub-core
pub type Result<T> = std::result::Result<T, Error>;
