//! Error types for vimview

use thiserror::Error;

/// Result type alias for vimview operations
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors raised outside the pure highlighting path
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid pattern for rule '{name}': {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Unknown offset strategy: {0}")]
    UnknownOffsets(String),

    #[error("No such field: {0}")]
    UnknownField(String),

    #[error("No content found in {0} field. Please add some code first.")]
    EmptyField(String),

    #[error("Please select some text in the {0} field first.")]
    NoSelection(String),
}
