//! Pillar module - the coarse legal-system categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// A legal pillar
///
/// Classification always yields exactly one of these. Ambiguity between
/// several pillars is reported separately and never encoded as a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    /// Offences under the Criminal Code
    Criminal,

    /// Provincial offences, by-laws, traffic tickets
    QuasiCriminal,

    /// Tribunals, boards and government decision makers
    Administrative,

    /// Private disputes between parties
    Civil,

    /// No pillar could be determined
    Unknown,
}

impl Pillar {
    /// The four concrete pillars, in keyword-matching order
    pub const CONCRETE: [Pillar; 4] = [
        Pillar::Criminal,
        Pillar::QuasiCriminal,
        Pillar::Administrative,
        Pillar::Civil,
    ];

    /// Get the pillar name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Criminal => "criminal",
            Pillar::QuasiCriminal => "quasi_criminal",
            Pillar::Administrative => "administrative",
            Pillar::Civil => "civil",
            Pillar::Unknown => "unknown",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Pillar::Criminal => "Criminal",
            Pillar::QuasiCriminal => "Quasi-Criminal",
            Pillar::Administrative => "Administrative",
            Pillar::Civil => "Civil",
            Pillar::Unknown => "Unknown",
        }
    }

    /// Parse a pillar from a string (accepts `quasi-criminal` and `quasi_criminal`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "criminal" => Some(Pillar::Criminal),
            "quasi_criminal" => Some(Pillar::QuasiCriminal),
            "administrative" => Some(Pillar::Administrative),
            "civil" => Some(Pillar::Civil),
            "unknown" => Some(Pillar::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pillar: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_spellings() {
        assert_eq!(Pillar::parse("Quasi-Criminal"), Some(Pillar::QuasiCriminal));
        assert_eq!(Pillar::parse("quasi_criminal"), Some(Pillar::QuasiCriminal));
        assert_eq!(Pillar::parse("civil"), Some(Pillar::Civil));
        assert_eq!(Pillar::parse("family"), None);
    }

    #[test]
    fn test_concrete_excludes_unknown() {
        assert!(!Pillar::CONCRETE.contains(&Pillar::Unknown));
        assert_eq!(Pillar::CONCRETE.len(), 4);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Pillar::QuasiCriminal).unwrap();
        assert_eq!(json, "\"quasi_criminal\"");
    }
}
