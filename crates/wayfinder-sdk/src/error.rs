//! Error types for the Wayfinder SDK.

use thiserror::Error;
use wayfinder_evidence::EvidenceError;
use wayfinder_guidance::GuidanceError;
use wayfinder_router::{ConfigError, RouterError};
use wayfinder_sources::SourceError;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// Registry configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Routing failed
    #[error("Routing error: {0}")]
    Router(#[from] RouterError),

    /// Evidence could not be indexed
    #[error("Evidence error: {0}")]
    Evidence(#[from] EvidenceError),

    /// No guidance module for the matter
    #[error("Guidance error: {0}")]
    Guidance(#[from] GuidanceError),

    /// External source access failed
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
