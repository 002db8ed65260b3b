//! Guidance error types

use thiserror::Error;
use wayfinder_domain::Domain;

/// Errors that can occur while selecting or running a domain module
#[derive(Error, Debug)]
pub enum GuidanceError {
    /// No module registered under this id
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// No module covers this domain
    #[error("No guidance module for domain: {0}")]
    NoModuleForDomain(Domain),
}
