//! Configuration file parsing for the authority registry and routing rules.
//!
//! Loads authority records from TOML `[[authorities]]` tables and the
//! trial-court threshold from a `[routing]` table.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use wayfinder_domain::{Authority, AuthorityType, Jurisdiction};

/// Registry configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Two authorities share an id
    #[error("Duplicate authority id: {0}")]
    DuplicateAuthority(String),
}

/// Registry configuration loaded from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Authority records
    #[serde(default)]
    pub authorities: Vec<AuthorityConfig>,

    /// Routing thresholds
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// One authority record as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityConfig {
    /// Authority identifier (e.g., "ON-LTB")
    pub id: String,

    /// Display name
    pub name: String,

    /// Kind of authority
    #[serde(rename = "type")]
    pub authority_type: AuthorityType,

    /// Jurisdiction (default: Ontario)
    #[serde(default)]
    pub jurisdiction: Jurisdiction,

    /// Reference data version
    #[serde(default = "default_version")]
    pub version: String,

    /// Last review timestamp, Unix milliseconds
    #[serde(default)]
    pub last_updated: u64,

    /// Review cadence in days
    #[serde(default = "default_cadence_days")]
    pub update_cadence_days: u32,

    /// Escalation targets by id
    #[serde(default)]
    pub escalation_routes: Vec<String>,

    /// Public web address
    #[serde(default)]
    pub url: Option<String>,
}

/// Thresholds used by the forum router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Upper bound (inclusive) of the low-amount trial-court branch, in dollars
    #[serde(default = "default_small_claims_limit")]
    pub small_claims_limit: f64,

    /// Authority used for the low-amount branch; `None` uses the same
    /// trial court as the high-amount branch
    #[serde(default)]
    pub small_claims_authority_id: Option<String>,
}

/// Default reference data version
fn default_version() -> String {
    "1".to_string()
}

/// Default review cadence: 90 days
fn default_cadence_days() -> u32 {
    90
}

/// Default small-claims ceiling: $35,000
fn default_small_claims_limit() -> f64 {
    35_000.0
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            small_claims_limit: default_small_claims_limit(),
            small_claims_authority_id: None,
        }
    }
}

impl AuthorityConfig {
    /// Convert into a domain authority record
    pub fn into_authority(self) -> Authority {
        Authority {
            id: self.id,
            name: self.name,
            authority_type: self.authority_type,
            jurisdiction: self.jurisdiction,
            version: self.version,
            last_updated: self.last_updated,
            update_cadence_days: self.update_cadence_days,
            escalation_routes: self.escalation_routes,
            url: self.url,
        }
    }
}

impl From<&Authority> for AuthorityConfig {
    fn from(a: &Authority) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            authority_type: a.authority_type,
            jurisdiction: a.jurisdiction.clone(),
            version: a.version.clone(),
            last_updated: a.last_updated,
            update_cadence_days: a.update_cadence_days,
            escalation_routes: a.escalation_routes.clone(),
            url: a.url.clone(),
        }
    }
}

/// Review timestamp of the built-in reference data (2025-01-01T00:00:00Z)
pub const SEED_REVIEWED_AT: u64 = 1_735_689_600_000;

impl RegistryConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids are present and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for authority in &self.authorities {
            if authority.id.trim().is_empty() {
                return Err(ConfigError::MissingField("authorities.id".to_string()));
            }
            if authority.name.trim().is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "authorities.name ({})",
                    authority.id
                )));
            }
            if !seen.insert(authority.id.as_str()) {
                return Err(ConfigError::DuplicateAuthority(authority.id.clone()));
            }
        }
        Ok(())
    }

    /// Built-in Ontario and federal courts and tribunals
    pub fn ontario_defaults() -> Self {
        use AuthorityType::*;
        use Jurisdiction::*;

        let seed = |a: Authority, cadence: u32| a.with_review(SEED_REVIEWED_AT, cadence);

        let authorities = vec![
            seed(
                Authority::new("ON-LTB", "Landlord and Tenant Board", Tribunal, Ontario)
                    .with_escalation(&["ON-DIVCOURT"])
                    .with_url("https://tribunalsontario.ca/ltb/"),
                90,
            ),
            seed(
                Authority::new("ON-HRTO", "Human Rights Tribunal of Ontario", Tribunal, Ontario)
                    .with_escalation(&["ON-DIVCOURT"])
                    .with_url("https://tribunalsontario.ca/hrto/"),
                90,
            ),
            seed(
                Authority::new("ON-LAT", "Licence Appeal Tribunal", Tribunal, Ontario)
                    .with_escalation(&["ON-DIVCOURT"])
                    .with_url("https://tribunalsontario.ca/lat/"),
                90,
            ),
            seed(
                Authority::new("ON-ESB", "Employment Standards Program", Regulator, Ontario)
                    .with_escalation(&["ON-OLRB"])
                    .with_url("https://www.ontario.ca/document/your-guide-employment-standards-act-0"),
                90,
            ),
            seed(
                Authority::new("ON-OLRB", "Ontario Labour Relations Board", Tribunal, Ontario)
                    .with_escalation(&["ON-DIVCOURT"])
                    .with_url("https://www.olrb.gov.on.ca/"),
                90,
            ),
            seed(
                Authority::new("ON-CPO", "Consumer Protection Ontario", Regulator, Ontario)
                    .with_url("https://www.ontario.ca/page/consumer-protection-ontario"),
                90,
            ),
            seed(
                Authority::new("CA-GIO", "General Insurance OmbudService", Ombudsman, Federal)
                    .with_url("https://www.giocanada.org/"),
                180,
            ),
            seed(
                Authority::new("ON-OCJ", "Ontario Court of Justice", Court, Ontario)
                    .with_escalation(&["ON-SCJ"])
                    .with_url("https://www.ontariocourts.ca/ocj/"),
                180,
            ),
            seed(
                Authority::new("ON-SCJ", "Superior Court of Justice", Court, Ontario)
                    .with_escalation(&["ON-DIVCOURT", "ON-CA"])
                    .with_url("https://www.ontariocourts.ca/scj/"),
                180,
            ),
            seed(
                Authority::new("ON-DIVCOURT", "Divisional Court", Court, Ontario)
                    .with_escalation(&["ON-CA"])
                    .with_url("https://www.ontariocourts.ca/scj/divisional-court/"),
                180,
            ),
            seed(
                Authority::new("ON-CA", "Court of Appeal for Ontario", Court, Ontario)
                    .with_escalation(&["CA-SCC"])
                    .with_url("https://www.ontariocourts.ca/coa/"),
                180,
            ),
            seed(
                Authority::new("CA-FC", "Federal Court", Court, Federal)
                    .with_escalation(&["CA-FCA"])
                    .with_url("https://www.fct-cf.gc.ca/"),
                180,
            ),
            seed(
                Authority::new("CA-FCA", "Federal Court of Appeal", Court, Federal)
                    .with_escalation(&["CA-SCC"])
                    .with_url("https://www.fca-caf.gc.ca/"),
                180,
            ),
            seed(
                Authority::new("CA-SCC", "Supreme Court of Canada", Court, Federal)
                    .with_url("https://www.scc-csc.ca/"),
                365,
            ),
        ];

        Self {
            authorities: authorities.iter().map(AuthorityConfig::from).collect(),
            routing: RoutingConfig::default(),
        }
    }
}
