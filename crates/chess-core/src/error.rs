//! Error types for position parsing and opening book loading.

use std::path::PathBuf;

use thiserror::Error;

/// The input string could not be turned into a legal chess position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid position '{fen}': {reason}")]
pub struct InvalidPositionError {
    pub fen: String,
    pub reason: String,
}

impl InvalidPositionError {
    pub fn new(fen: &str, reason: impl ToString) -> Self {
        Self {
            fen: fen.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Opening at '{0}' has an empty name")]
    EmptyName(String),

    #[error("Two book entries normalize to the same key '{0}'")]
    DuplicateKey(String),

    #[error("Unsupported book format: {0} (expected .json or .bin)")]
    UnsupportedFormat(PathBuf),
}
