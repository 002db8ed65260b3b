//! Matter module - a user's legal situation and its classification

use crate::Pillar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Unique identifier for a matter based on UUIDv7
///
/// UUIDv7 keeps matters sortable by intake time without a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatterId(uuid::Uuid);

impl MatterId {
    /// Generate a new UUIDv7-based MatterId
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_domain::MatterId;
    ///
    /// let a = MatterId::new();
    /// let b = MatterId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Parse a MatterId from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid matter id: {}", e))
    }
}

impl Default for MatterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Legal domain of a matter (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Residential tenancies
    LandlordTenant,
    /// Insurance claims and denials
    Insurance,
    /// Employment standards and dismissal
    Employment,
    /// Discrimination and harassment under the Human Rights Code
    HumanRights,
    /// Consumer purchases, contractors, refunds
    ConsumerProtection,
    /// Property damage caused by trees
    TreeDamage,
    /// General civil claims (negligence, contract, debt)
    CivilLitigation,
    /// Anything else
    Other,
}

impl Domain {
    /// Every domain, in declaration order
    pub const ALL: [Domain; 8] = [
        Domain::LandlordTenant,
        Domain::Insurance,
        Domain::Employment,
        Domain::HumanRights,
        Domain::ConsumerProtection,
        Domain::TreeDamage,
        Domain::CivilLitigation,
        Domain::Other,
    ];

    /// Get the domain name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::LandlordTenant => "landlord_tenant",
            Domain::Insurance => "insurance",
            Domain::Employment => "employment",
            Domain::HumanRights => "human_rights",
            Domain::ConsumerProtection => "consumer_protection",
            Domain::TreeDamage => "tree_damage",
            Domain::CivilLitigation => "civil_litigation",
            Domain::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Domain::LandlordTenant => "Landlord and Tenant",
            Domain::Insurance => "Insurance",
            Domain::Employment => "Employment",
            Domain::HumanRights => "Human Rights",
            Domain::ConsumerProtection => "Consumer Protection",
            Domain::TreeDamage => "Tree Damage",
            Domain::CivilLitigation => "Civil Litigation",
            Domain::Other => "Other",
        }
    }

    /// Parse an exact domain name (`landlordTenant`, `landlord-tenant` and
    /// `landlord_tenant` are all accepted)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().replace('_', "") == normalized)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid domain: {}", s))
    }
}

/// Jurisdiction of a matter or an authority
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Province of Ontario
    #[default]
    Ontario,
    /// Government of Canada
    Federal,
    /// Any other jurisdiction, kept verbatim
    Other(String),
}

impl Jurisdiction {
    /// Get the jurisdiction name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Jurisdiction::Ontario => "Ontario",
            Jurisdiction::Federal => "Federal",
            Jurisdiction::Other(name) => name,
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of party involved in a matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyType {
    /// A private person
    Individual,
    /// A company or sole proprietor
    Business,
    /// Residential landlord
    Landlord,
    /// Residential tenant
    Tenant,
    /// Employer
    Employer,
    /// Employee
    Employee,
    /// Insurance company
    Insurer,
    /// City, town or region
    Municipality,
    /// Provincial or federal government body
    Government,
}

impl PartyType {
    /// Get the party type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyType::Individual => "individual",
            PartyType::Business => "business",
            PartyType::Landlord => "landlord",
            PartyType::Tenant => "tenant",
            PartyType::Employer => "employer",
            PartyType::Employee => "employee",
            PartyType::Insurer => "insurer",
            PartyType::Municipality => "municipality",
            PartyType::Government => "government",
        }
    }

    /// Parse a party type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "individual" | "person" => Some(PartyType::Individual),
            "business" | "company" | "corporation" => Some(PartyType::Business),
            "landlord" => Some(PartyType::Landlord),
            "tenant" => Some(PartyType::Tenant),
            "employer" => Some(PartyType::Employer),
            "employee" | "worker" => Some(PartyType::Employee),
            "insurer" | "insurance company" => Some(PartyType::Insurer),
            "municipality" | "city" => Some(PartyType::Municipality),
            "government" => Some(PartyType::Government),
            _ => None,
        }
    }
}

/// How quickly the user needs to act
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    /// No known deadline
    Low,
    /// Ordinary matter
    Normal,
    /// Deadline or hearing approaching
    High,
    /// Immediate risk (lockout, hearing today)
    Critical,
}

impl UrgencyLevel {
    /// Get the urgency name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Normal => "normal",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }

    /// Parse an urgency level from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(UrgencyLevel::Low),
            "normal" | "medium" => Some(UrgencyLevel::Normal),
            "high" => Some(UrgencyLevel::High),
            "critical" => Some(UrgencyLevel::Critical),
            _ => None,
        }
    }
}

/// Lifecycle status of a matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatterStatus {
    /// Captured but not yet classified
    Intake,
    /// Domain and pillar assigned
    Classified,
    /// Forum recommended
    Routed,
    /// Documents generated
    Prepared,
    /// Resolved or abandoned
    Closed,
}

/// A labelled date relevant to a matter (incident, notice, hearing, deadline)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDate {
    /// What happened or is due on this date
    pub label: String,

    /// The calendar date
    pub date: NaiveDate,
}

impl KeyDate {
    /// Create a new key date
    pub fn new(label: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            date,
        }
    }
}

/// The classification of one legal matter
///
/// Created once at intake and replaced only by re-classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatterClassification {
    /// Matter identifier (kept across re-classification)
    pub id: MatterId,

    /// Legal domain
    pub domain: Domain,

    /// Jurisdiction
    pub jurisdiction: Jurisdiction,

    /// Single resolved pillar
    pub pillar: Pillar,

    /// Every pillar whose keywords matched the description
    pub pillars: BTreeSet<Pillar>,

    /// True when more than one pillar matched
    pub pillar_ambiguous: bool,

    /// Parties involved
    pub party_types: Vec<PartyType>,

    /// Free-text timeline summary supplied by the user
    pub timeline: Option<String>,

    /// Key dates supplied by the user
    pub key_dates: Vec<KeyDate>,

    /// How urgent the matter is
    pub urgency: UrgencyLevel,

    /// Amount in dispute, in dollars
    pub dispute_amount: Option<f64>,

    /// Lifecycle status
    pub status: MatterStatus,
}

impl MatterClassification {
    /// Earliest key date, if any
    pub fn earliest_key_date(&self) -> Option<&KeyDate> {
        self.key_dates.iter().min_by_key(|k| k.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matter_id_display_and_parse() {
        let id = MatterId::new();
        let parsed = MatterId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(MatterId::from_string("nope").is_err());
    }

    #[test]
    fn test_domain_parse_variants() {
        assert_eq!(Domain::parse("landlordTenant"), Some(Domain::LandlordTenant));
        assert_eq!(Domain::parse("landlord-tenant"), Some(Domain::LandlordTenant));
        assert_eq!(Domain::parse("human_rights"), Some(Domain::HumanRights));
        assert_eq!(Domain::parse("family"), None);
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(UrgencyLevel::Critical > UrgencyLevel::High);
        assert!(UrgencyLevel::High > UrgencyLevel::Normal);
        assert!(UrgencyLevel::Normal > UrgencyLevel::Low);
    }

    #[test]
    fn test_jurisdiction_display() {
        assert_eq!(Jurisdiction::Ontario.to_string(), "Ontario");
        assert_eq!(Jurisdiction::Other("Quebec".into()).to_string(), "Quebec");
    }
}
