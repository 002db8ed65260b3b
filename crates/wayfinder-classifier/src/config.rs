//! Classifier configuration

use serde::{Deserialize, Serialize};
use wayfinder_domain::{Pillar, UrgencyLevel};

/// Keyword lists used by the pillar and matter classifiers
///
/// All keywords are matched as lower-case substrings. The default lists are
/// chosen so that no keyword of one pillar contains a keyword of another,
/// and short keywords are spelled as phrases where the bare word hides
/// inside common words ("owed" in "allowed", "board" in "keyboard").
///
/// # Examples
///
/// ```
/// use wayfinder_classifier::ClassifierConfig;
/// use wayfinder_domain::Pillar;
///
/// let config = ClassifierConfig::default();
/// assert!(config.keywords_for(Pillar::Criminal).contains(&"assault".to_string()));
/// assert!(config.keywords_for(Pillar::Unknown).is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Keywords indicating a Criminal Code matter
    pub criminal_keywords: Vec<String>,

    /// Keywords indicating a provincial offence or by-law matter
    pub quasi_criminal_keywords: Vec<String>,

    /// Keywords indicating a tribunal or agency matter
    pub administrative_keywords: Vec<String>,

    /// Keywords indicating a private civil dispute
    pub civil_keywords: Vec<String>,

    /// Keywords that make a matter critical when no urgency is given
    pub critical_keywords: Vec<String>,

    /// Keywords that make a matter high urgency when no urgency is given
    pub high_urgency_keywords: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            criminal_keywords: owned(&[
                "assault",
                "theft",
                "stole",
                "robbery",
                "murder",
                "homicide",
                "fraud",
                "criminal",
                "arrested",
                "charged with",
                "police",
                "bail hearing",
                "denied bail",
                "uttering threats",
                "break and enter",
                "impaired driving",
                "weapon",
                "drug possession",
                "shoplifting",
                "mischief",
            ]),
            quasi_criminal_keywords: owned(&[
                "parking ticket",
                "speeding",
                "traffic ticket",
                "highway traffic act",
                "provincial offence",
                "by-law",
                "bylaw",
                "careless driving",
                "red light",
                "seatbelt",
                "liquor licence",
                "noise violation",
            ]),
            administrative_keywords: owned(&[
                "tribunal",
                "landlord and tenant board",
                "labour relations board",
                "assessment review board",
                "consent and capacity board",
                "parole board",
                "landlord",
                "tenant",
                "eviction",
                "human rights",
                "discrimination",
                "wsib",
                "ontario works",
                "odsp",
                "disability support",
                "employment standards",
                "licence suspension",
                "immigration",
                "benefits denied",
            ]),
            civil_keywords: owned(&[
                "negligence",
                "contract",
                "breach",
                "damages",
                "lawsuit",
                "being sued",
                "slip and fall",
                "injury",
                "injured",
                "small claims",
                "debt",
                "money owed",
                "is owed",
                "owes me",
                "wrongful dismissal",
                "defamation",
                "property damage",
                "refund",
                "deposit",
                "insurance claim",
            ]),
            critical_keywords: owned(&[
                "locked out",
                "lockout",
                "hearing today",
                "utilities shut off",
                "sheriff",
            ]),
            high_urgency_keywords: owned(&[
                "eviction notice",
                "hearing",
                "deadline",
                "tomorrow",
                "court date",
                "served with",
            ]),
        }
    }
}

impl ClassifierConfig {
    /// Keyword list for a pillar (`Unknown` has none)
    pub fn keywords_for(&self, pillar: Pillar) -> &[String] {
        match pillar {
            Pillar::Criminal => &self.criminal_keywords,
            Pillar::QuasiCriminal => &self.quasi_criminal_keywords,
            Pillar::Administrative => &self.administrative_keywords,
            Pillar::Civil => &self.civil_keywords,
            Pillar::Unknown => &[],
        }
    }

    /// Keyword list that triggers an urgency level, if that level has one
    pub fn keywords_for_urgency(&self, level: UrgencyLevel) -> &[String] {
        match level {
            UrgencyLevel::Critical => &self.critical_keywords,
            UrgencyLevel::High => &self.high_urgency_keywords,
            UrgencyLevel::Normal | UrgencyLevel::Low => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_populated() {
        let config = ClassifierConfig::default();
        for pillar in Pillar::CONCRETE {
            assert!(!config.keywords_for(pillar).is_empty(), "{pillar} has no keywords");
        }
    }

    #[test]
    fn test_default_keywords_lowercase() {
        let config = ClassifierConfig::default();
        for pillar in Pillar::CONCRETE {
            for kw in config.keywords_for(pillar) {
                assert_eq!(kw, &kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_no_cross_pillar_containment() {
        let config = ClassifierConfig::default();
        for a in Pillar::CONCRETE {
            for b in Pillar::CONCRETE {
                if a == b {
                    continue;
                }
                for ka in config.keywords_for(a) {
                    for kb in config.keywords_for(b) {
                        assert!(
                            !ka.contains(kb.as_str()),
                            "{a} keyword '{ka}' contains {b} keyword '{kb}'"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_keywords_not_hidden_in_common_words() {
        let config = ClassifierConfig::default();
        let words = [
            "please", "released", "allowed", "towed", "showed", "borrowed", "keyboard",
            "cardboard", "pursuing", "bailiff", "sewage", "lieutenant",
        ];
        for pillar in Pillar::CONCRETE {
            for kw in config.keywords_for(pillar) {
                for word in words {
                    assert!(!word.contains(kw.as_str()), "{pillar} keyword '{kw}' matches '{word}'");
                }
            }
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ClassifierConfig = toml::from_str(
            r#"
            civil_keywords = ["tort"]
            "#,
        )
        .unwrap();
        assert_eq!(config.civil_keywords, vec!["tort"]);
        assert!(!config.criminal_keywords.is_empty());
    }
}
