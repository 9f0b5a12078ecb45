//! Error types for the corpus builder

use thiserror::Error;

/// Result type alias for corpus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Corpus builder errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog extraction error
    #[error("Failed to extract catalog '{url}': {message}")]
    Catalog { url: String, message: String },

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a catalog extraction error
    pub fn catalog(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Catalog {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
