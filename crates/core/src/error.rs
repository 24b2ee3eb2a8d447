//! Error types for the pairfold libraries.

use crate::core::merges::Symbol;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pairfold libraries.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// A persisted file does not have the expected record layout
    #[error("Format error: {0}")]
    Format(String),

    /// A symbol refers to an entry outside the vocabulary table
    #[error("Unknown symbol {symbol} (vocabulary has {len} entries)")]
    UnknownSymbol { symbol: Symbol, len: usize },

    /// A merge entry refers to itself or to a later entry
    #[error("Symbol {symbol} cannot be expanded: it references itself or a later entry")]
    CyclicReference { symbol: Symbol },

    /// Invalid merge rule
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Vocabulary overflow
    #[error("Vocabulary size exceeded maximum of {max} (tried to add {tried})")]
    VocabularyOverflow { max: usize, tried: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerError {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for pairfold operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
