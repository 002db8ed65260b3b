//! Pillar classification by keyword containment

use crate::ClassifierConfig;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use wayfinder_domain::Pillar;

/// Full result of pillar matching on one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarAssessment {
    /// The single resolved pillar
    pub primary: Pillar,

    /// Every pillar whose keywords matched
    pub detected: BTreeSet<Pillar>,

    /// True when more than one pillar matched
    pub ambiguous: bool,

    /// Matched keywords, per pillar
    pub matched_keywords: BTreeMap<Pillar, Vec<String>>,
}

/// Maps free text to a legal pillar using fixed keyword lists
///
/// No scoring: a pillar matches when any of its keywords is a substring of
/// the lower-cased text.
#[derive(Debug, Clone, Default)]
pub struct PillarClassifier {
    config: ClassifierConfig,
}

impl PillarClassifier {
    /// Create a classifier with the given keyword lists
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Resolve text to exactly one pillar
    ///
    /// One match returns that pillar, none returns `Unknown`. With several
    /// matches Criminal wins if present, otherwise the result is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_classifier::PillarClassifier;
    /// use wayfinder_domain::Pillar;
    ///
    /// let classifier = PillarClassifier::default();
    /// assert_eq!(classifier.classify("I got a parking ticket"), Pillar::QuasiCriminal);
    /// assert_eq!(classifier.classify("nothing relevant"), Pillar::Unknown);
    /// ```
    pub fn classify(&self, text: &str) -> Pillar {
        resolve(&self.detect_all_pillars(text))
    }

    /// Every pillar whose keyword list matches the text
    pub fn detect_all_pillars(&self, text: &str) -> BTreeSet<Pillar> {
        let lower = text.to_lowercase();
        Pillar::CONCRETE
            .into_iter()
            .filter(|p| {
                self.config
                    .keywords_for(*p)
                    .iter()
                    .any(|kw| lower.contains(kw.as_str()))
            })
            .collect()
    }

    /// Classify and report the detected set, ambiguity and matched keywords
    pub fn assess(&self, text: &str) -> PillarAssessment {
        let lower = text.to_lowercase();
        let mut matched_keywords = BTreeMap::new();

        for pillar in Pillar::CONCRETE {
            let hits: Vec<String> = self
                .config
                .keywords_for(pillar)
                .iter()
                .filter(|kw| lower.contains(kw.as_str()))
                .cloned()
                .collect();
            if !hits.is_empty() {
                matched_keywords.insert(pillar, hits);
            }
        }

        let detected: BTreeSet<Pillar> = matched_keywords.keys().copied().collect();
        let primary = resolve(&detected);
        let ambiguous = detected.len() > 1;

        debug!(
            primary = primary.as_str(),
            detected = detected.len(),
            ambiguous,
            "Assessed pillar"
        );

        PillarAssessment {
            primary,
            detected,
            ambiguous,
            matched_keywords,
        }
    }
}

fn resolve(detected: &BTreeSet<Pillar>) -> Pillar {
    match detected.len() {
        0 => Pillar::Unknown,
        1 => detected.iter().next().copied().unwrap_or(Pillar::Unknown),
        _ if detected.contains(&Pillar::Criminal) => Pillar::Criminal,
        _ => Pillar::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assault_and_parking_ticket_is_ambiguous() {
        let classifier = PillarClassifier::default();
        let text = "I was assaulted and also received a parking ticket";

        let assessment = classifier.assess(text);
        assert_eq!(
            assessment.detected,
            BTreeSet::from([Pillar::Criminal, Pillar::QuasiCriminal])
        );
        assert!(assessment.ambiguous);
        assert_eq!(assessment.primary, Pillar::Criminal);
        assert_eq!(classifier.classify(text), Pillar::Criminal);
    }

    #[test]
    fn test_slip_and_fall_is_civil_only() {
        let classifier = PillarClassifier::default();
        let text = "Slip and fall negligence at a supermarket causing injury";

        assert_eq!(classifier.detect_all_pillars(text), BTreeSet::from([Pillar::Civil]));
        assert_eq!(classifier.classify(text), Pillar::Civil);
        assert!(!classifier.assess(text).ambiguous);
    }

    #[test]
    fn test_two_non_criminal_pillars_are_unknown() {
        let classifier = PillarClassifier::default();
        let text = "My landlord kept my deposit";
        assert_eq!(
            classifier.detect_all_pillars(text),
            BTreeSet::from([Pillar::Administrative, Pillar::Civil])
        );
        assert_eq!(classifier.classify(text), Pillar::Unknown);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = PillarClassifier::default();
        assert_eq!(classifier.classify("HUMAN RIGHTS complaint"), Pillar::Administrative);
    }

    #[test]
    fn test_no_match_is_unknown() {
        let classifier = PillarClassifier::default();
        let assessment = classifier.assess("hello world");
        assert_eq!(assessment.primary, Pillar::Unknown);
        assert!(assessment.detected.is_empty());
        assert!(!assessment.ambiguous);
    }

    #[test]
    fn test_keywords_inside_common_words_ignored() {
        let classifier = PillarClassifier::default();

        assert_eq!(
            classifier.detect_all_pillars("The tribunal allowed my appeal"),
            BTreeSet::from([Pillar::Administrative])
        );
        assert_eq!(classifier.classify("The tribunal allowed my appeal"), Pillar::Administrative);
        assert!(classifier.detect_all_pillars("My car was towed from a lot").is_empty());
        assert!(classifier.detect_all_pillars("I spilled coffee on my keyboard").is_empty());
        assert!(classifier.detect_all_pillars("the bailiff showed up").is_empty());
    }

    #[test]
    fn test_debt_phrases_still_civil() {
        let classifier = PillarClassifier::default();
        assert_eq!(classifier.classify("My cousin owes me $900"), Pillar::Civil);
        assert_eq!(classifier.classify("There is money owed on the invoice"), Pillar::Civil);
    }

    #[test]
    fn test_custom_keywords() {
        let config = ClassifierConfig {
            civil_keywords: vec!["tort".to_string()],
            ..ClassifierConfig::default()
        };
        let classifier = PillarClassifier::new(config);
        assert_eq!(classifier.classify("a tort claim"), Pillar::Civil);
    }

    #[test]
    fn test_matched_keywords_reported() {
        let classifier = PillarClassifier::default();
        let assessment = classifier.assess("police arrested me for theft");
        let hits = &assessment.matched_keywords[&Pillar::Criminal];
        assert!(hits.contains(&"police".to_string()));
        assert!(hits.contains(&"theft".to_string()));
    }
}
