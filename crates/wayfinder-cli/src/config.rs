//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use wayfinder_classifier::ClassifierConfig;
use wayfinder_router::{AuthorityRegistry, RegistryConfig, RoutingConfig};
use wayfinder_sdk::Wayfinder;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Authority registry TOML; the built-in Ontario registry when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_file: Option<PathBuf>,

    /// Routing thresholds overriding the registry's `[routing]` table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingConfig>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".wayfinder").join("config.toml"))
    }

    /// Load configuration from the default path, writing defaults there on
    /// first run.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(Self::path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing.
    pub fn load_or_init_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        // A read-only home still gets the defaults.
        config.save_to(path).ok();
        Ok(config)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check settings that deserialization cannot.
    pub fn validate(&self) -> Result<()> {
        if let Some(routing) = &self.routing {
            if !routing.small_claims_limit.is_finite() || routing.small_claims_limit < 0.0 {
                return Err(CliError::Config(format!(
                    "small_claims_limit must be a non-negative number, got {}",
                    routing.small_claims_limit
                )));
            }
        }
        if self.settings.history_size == 0 {
            return Err(CliError::Config("history_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Build the engine this configuration describes.
    pub fn engine(&self) -> Result<Wayfinder> {
        let registry_config = match &self.registry_file {
            Some(path) => RegistryConfig::from_file(path)?,
            None => RegistryConfig::ontario_defaults(),
        };
        let routing = self
            .routing
            .clone()
            .unwrap_or_else(|| registry_config.routing.clone());
        debug!(
            registry_file = ?self.registry_file,
            small_claims_limit = routing.small_claims_limit,
            "Building engine"
        );

        Ok(Wayfinder::new(
            AuthorityRegistry::from_config(&registry_config),
            routing,
            ClassifierConfig::default(),
        ))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_log_filter() -> String {
    "warn".to_string()
}
