//! Error type for fixture generation and corpus emission.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the generator, its configuration, and the corpus writer.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An input can never produce a module: empty vocabulary, inverted range,
    /// zero-sized corpus, or a rejected duplicate parameter name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration file could not be read or parsed.
    #[error("failed to load configuration {}: {message}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Reader or parser message.
        message: String,
    },

    /// A file or directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The corpus manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A corpus worker thread panicked.
    #[error("generation worker {0} panicked")]
    Worker(usize),
}

impl GenerateError {
    /// Shorthand for [`GenerateError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GenerateError>;
