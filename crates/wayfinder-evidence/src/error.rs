//! Evidence error types

use thiserror::Error;

/// Errors that can occur while indexing evidence
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// Reading an evidence file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path has no usable file name
    #[error("Invalid evidence path: {0}")]
    InvalidPath(String),

    /// No item with this id in the index
    #[error("Evidence not found: {0}")]
    NotFound(String),
}
