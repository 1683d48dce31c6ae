//! Error types for persistence operations.

use std::path::PathBuf;
use thiserror::Error;

use resume_models::DocumentError;

/// Errors that can occur during persistence operations.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read from file system.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to file system.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to back up the current document before overwriting it.
    #[error("failed to archive previous version ({path}): {source}")]
    ArchiveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize data to JSON.
    #[error("failed to serialize: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Stored content is not document-shaped.
    #[error("{path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

impl PersistenceError {
    /// Returns true if the error was raised by the pre-save backup step.
    pub fn is_archive_failure(&self) -> bool {
        matches!(self, PersistenceError::ArchiveError { .. })
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
