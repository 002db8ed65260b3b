//! Wayfinder Sources
//!
//! Policy-checked access to external legal sources and the CanLII client.

#![warn(missing_docs)]

pub mod access;
pub mod canlii;

pub use access::{AccessDecision, AccessLogEntry, AccessPurpose, SourceAccessController, SourcePolicy};
pub use canlii::{CanLiiClient, CaseMetadata, CANLII_SOURCE};

use thiserror::Error;

/// Errors from external source access
#[derive(Error, Debug)]
pub enum SourceError {
    /// The CanLII API does not support free-text search
    #[error("CanLII_API_NO_SEARCH: the CanLII API does not support free-text search")]
    NoSearch,

    /// Access policy denied the request
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Request was malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl SourceError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::NoSearch => "CanLII_API_NO_SEARCH",
            SourceError::AccessDenied(_) => "SOURCE_ACCESS_DENIED",
            SourceError::InvalidRequest(_) => "SOURCE_INVALID_REQUEST",
        }
    }
}
