//! Error types for the Cardsmith library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Cardsmith operations.
#[derive(Debug, Error)]
pub enum CardsmithError {
    /// The inference endpoint could not be reached, timed out, or answered
    /// with a non-success status.
    #[error("Transport error for '{endpoint}': {message}")]
    Transport {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    /// The inference endpoint answered with a body we could not interpret.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fewer usable flashcards survived validation than the caller requires.
    #[error("Insufficient content: produced {produced} usable flashcards, {required} required")]
    InsufficientContent { required: usize, produced: usize },

    /// The request itself is malformed (e.g. zero cards requested).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error saving or loading a deck file.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CardsmithError {
    /// Whether this error is a recoverable strategy failure.
    ///
    /// Transport and parse failures only disqualify the strategy that hit
    /// them; the pipeline moves on to the next one.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CardsmithError::Transport { .. } | CardsmithError::Parse(_) | CardsmithError::Json(_)
        )
    }
}

/// Result type alias for Cardsmith operations.
pub type Result<T> = std::result::Result<T, CardsmithError>;
