//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry file could not be loaded
    #[error("Registry error: {0}")]
    Registry(#[from] wayfinder_router::ConfigError),

    /// Routing failed
    #[error("Routing error: {0}")]
    Router(#[from] wayfinder_router::RouterError),

    /// Evidence could not be indexed
    #[error("Evidence error: {0}")]
    Evidence(#[from] wayfinder_evidence::EvidenceError),

    /// SDK error
    #[error("SDK error: {0}")]
    Sdk(#[from] wayfinder_sdk::SdkError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// REPL command needs an open matter
    #[error("No open matter. Use 'describe <text>' first.")]
    NoMatter,
}
