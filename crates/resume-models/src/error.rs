//! Error types for the document model.

use thiserror::Error;

/// Errors raised when raw content cannot be turned into a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The top level is not a keyed structure.
    #[error("malformed document: expected an object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// The content is not valid JSON.
    #[error("malformed document: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Errors raised by edit operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    /// An index does not address an existing entry.
    #[error("{section} index {index} out of range (len {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type alias for document parsing.
pub type Result<T> = std::result::Result<T, DocumentError>;
