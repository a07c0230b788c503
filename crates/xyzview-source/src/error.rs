//! Error types for the source lifecycle
//!
//! Only infrastructure faults live here. Malformed XYZ text is a normal
//! outcome and never surfaces as a `SourceError`.

use thiserror::Error;

/// Errors raised by stores, file handles and configuration
#[derive(Error, Debug)]
pub enum SourceError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key-value store rejected a read or write
    #[error("Store error for key '{key}': {message}")]
    Store {
        /// Key being read or written
        key: String,
        /// Error message
        message: String,
    },

    /// Store or config file contents could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file collaborator failed to produce text
    #[error("Failed to read '{name}': {source}")]
    ReadFailed {
        /// Display name of the file
        name: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Create a store error
    pub fn store(key: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::Store {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a read failure for a named file
    pub fn read_failed(name: impl Into<String>, source: std::io::Error) -> Self {
        SourceError::ReadFailed {
            name: name.into(),
            source,
        }
    }
}

/// Result type for source lifecycle operations
pub type SourceResult<T> = Result<T, SourceError>;
