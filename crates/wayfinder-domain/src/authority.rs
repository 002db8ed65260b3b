//! Authority module - courts, tribunals and regulators, and routing results

use crate::{Jurisdiction, MILLIS_PER_DAY};
use serde::{Deserialize, Serialize};

/// Kind of decision maker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityType {
    /// A court of law
    Court,
    /// An adjudicative tribunal or board
    Tribunal,
    /// A regulator that takes complaints
    Regulator,
    /// An ombudsman or complaint service
    Ombudsman,
}

impl AuthorityType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorityType::Court => "court",
            AuthorityType::Tribunal => "tribunal",
            AuthorityType::Regulator => "regulator",
            AuthorityType::Ombudsman => "ombudsman",
        }
    }
}

/// A court, tribunal or regulator record
///
/// `escalation_routes` are back-references to other authorities by id; the
/// record does not own them and they may not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authority {
    /// Stable identifier (e.g., "ON-LTB")
    pub id: String,

    /// Display name
    pub name: String,

    /// Kind of authority
    #[serde(rename = "type")]
    pub authority_type: AuthorityType,

    /// Jurisdiction the authority belongs to
    pub jurisdiction: Jurisdiction,

    /// Version tag of the reference data
    pub version: String,

    /// When the record was last reviewed (Unix milliseconds)
    pub last_updated: u64,

    /// How often the record should be reviewed, in days
    pub update_cadence_days: u32,

    /// Ids of authorities a decision can be escalated to
    #[serde(default)]
    pub escalation_routes: Vec<String>,

    /// Public web address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Authority {
    /// Create a new authority with no escalation routes
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        authority_type: AuthorityType,
        jurisdiction: Jurisdiction,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            authority_type,
            jurisdiction,
            version: "1".to_string(),
            last_updated: 0,
            update_cadence_days: 90,
            escalation_routes: Vec::new(),
            url: None,
        }
    }

    /// Set escalation routes
    pub fn with_escalation(mut self, routes: &[&str]) -> Self {
        self.escalation_routes = routes.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Set review cadence and last review timestamp
    pub fn with_review(mut self, last_updated: u64, cadence_days: u32) -> Self {
        self.last_updated = last_updated;
        self.update_cadence_days = cadence_days;
        self
    }

    /// Set public URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Timestamp (Unix millis) at which the record becomes due for review
    pub fn due_at(&self) -> u64 {
        self.last_updated
            .saturating_add(u64::from(self.update_cadence_days) * MILLIS_PER_DAY)
    }

    /// Whether the record is due for review at `now` (Unix millis)
    pub fn is_due(&self, now: u64) -> bool {
        now >= self.due_at()
    }
}

/// Routing result for one matter
///
/// Derived and read-only; recomputed on every routing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumMap {
    /// Recommended forum
    pub primary: Authority,

    /// Other forums that may hear the matter
    pub alternatives: Vec<Authority>,

    /// Where a decision of the primary forum can be taken next, in order
    pub escalation_chain: Vec<Authority>,

    /// Human-readable explanation of the choice
    pub rationale: String,
}
