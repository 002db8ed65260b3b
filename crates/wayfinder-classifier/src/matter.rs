//! Matter classification: domain, jurisdiction, pillar and urgency

use crate::{ClassifierConfig, PillarClassifier};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfinder_domain::{
    Domain, Jurisdiction, KeyDate, MatterClassification, MatterId, MatterStatus, PartyType,
    UrgencyLevel,
};

/// Intake data for one matter
///
/// Every field except the description is optional; missing or malformed
/// hints fall through to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatterInput {
    /// The user's own description of the situation
    pub description: String,

    /// Domain hint (e.g., "tenant", "insurance")
    pub domain_hint: Option<String>,

    /// Jurisdiction hint (e.g., "federal")
    pub jurisdiction_hint: Option<String>,

    /// Parties involved
    pub party_types: Vec<PartyType>,

    /// Amount in dispute, in dollars
    pub dispute_amount: Option<f64>,

    /// Key dates
    pub key_dates: Vec<KeyDate>,

    /// Free-text timeline summary
    pub timeline: Option<String>,

    /// Urgency stated by the user
    pub urgency: Option<UrgencyLevel>,
}

impl MatterInput {
    /// Create input from a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the domain hint
    pub fn with_domain_hint(mut self, hint: impl Into<String>) -> Self {
        self.domain_hint = Some(hint.into());
        self
    }

    /// Set the jurisdiction hint
    pub fn with_jurisdiction_hint(mut self, hint: impl Into<String>) -> Self {
        self.jurisdiction_hint = Some(hint.into());
        self
    }

    /// Set the dispute amount
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.dispute_amount = Some(amount);
        self
    }

    /// Add a key date
    pub fn with_key_date(mut self, key_date: KeyDate) -> Self {
        self.key_dates.push(key_date);
        self
    }
}

/// Resolve a domain from a hint by substring
///
/// # Examples
///
/// ```
/// use wayfinder_classifier::resolve_domain;
/// use wayfinder_domain::Domain;
///
/// assert_eq!(resolve_domain("My TENANT stopped paying"), Domain::LandlordTenant);
/// assert_eq!(resolve_domain("???"), Domain::Other);
/// ```
pub fn resolve_domain(hint: &str) -> Domain {
    // Leading space lets " tree" match at the start without matching "street";
    // " lease" and " wage" likewise skip "please" and "sewage".
    let h = format!(" {}", hint.to_lowercase());
    let has = |needles: &[&str]| needles.iter().any(|n| h.contains(n));

    if has(&["tenant", "landlord", "evict", " ltb", " lease"]) {
        Domain::LandlordTenant
    } else if has(&["human rights", "discriminat", "hrto"]) {
        Domain::HumanRights
    } else if has(&["insurance", "insurer"]) {
        Domain::Insurance
    } else if has(&["employ", " fired", "dismiss", " wage", "workplace", "overtime", "severance"]) {
        Domain::Employment
    } else if has(&[" tree"]) {
        Domain::TreeDamage
    } else if has(&["consumer", "contractor", "warranty", "ocpp", "purchase", "refund"]) {
        Domain::ConsumerProtection
    } else if has(&["negligence", "injur", "slip", "contract", "debt", "small claims", "civil"]) {
        Domain::CivilLitigation
    } else {
        Domain::Other
    }
}

/// Resolve a jurisdiction from a hint: Federal when it mentions "federal"
/// or "canada", otherwise Ontario
pub fn resolve_jurisdiction(hint: Option<&str>) -> Jurisdiction {
    match hint.map(str::to_lowercase) {
        Some(h) if h.contains("federal") || h.contains("canada") => Jurisdiction::Federal,
        _ => Jurisdiction::Ontario,
    }
}

/// Builds a `MatterClassification` from intake data
#[derive(Debug, Clone, Default)]
pub struct MatterClassifier {
    pillars: PillarClassifier,
    config: ClassifierConfig,
}

impl MatterClassifier {
    /// Create a matter classifier with the given keyword lists
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            pillars: PillarClassifier::new(config.clone()),
            config,
        }
    }

    /// Classify a new matter
    pub fn classify(&self, input: &MatterInput) -> MatterClassification {
        self.classify_with_id(MatterId::new(), input)
    }

    /// Re-classify an existing matter, keeping its id
    pub fn reclassify(
        &self,
        existing: &MatterClassification,
        input: &MatterInput,
    ) -> MatterClassification {
        self.classify_with_id(existing.id, input)
    }

    fn classify_with_id(&self, id: MatterId, input: &MatterInput) -> MatterClassification {
        let domain = match input.domain_hint.as_deref() {
            Some(hint) if !hint.trim().is_empty() => resolve_domain(hint),
            _ => resolve_domain(&input.description),
        };
        let jurisdiction = resolve_jurisdiction(input.jurisdiction_hint.as_deref());
        let assessment = self.pillars.assess(&input.description);
        let urgency = input
            .urgency
            .unwrap_or_else(|| self.derive_urgency(&input.description));
        let dispute_amount = input.dispute_amount.filter(|a| a.is_finite() && *a >= 0.0);

        debug!(
            %id,
            domain = domain.as_str(),
            jurisdiction = %jurisdiction,
            pillar = assessment.primary.as_str(),
            urgency = urgency.as_str(),
            "Classified matter"
        );

        MatterClassification {
            id,
            domain,
            jurisdiction,
            pillar: assessment.primary,
            pillars: assessment.detected,
            pillar_ambiguous: assessment.ambiguous,
            party_types: input.party_types.clone(),
            timeline: input.timeline.clone(),
            key_dates: input.key_dates.clone(),
            urgency,
            dispute_amount,
            status: MatterStatus::Classified,
        }
    }

    fn derive_urgency(&self, description: &str) -> UrgencyLevel {
        let lower = description.to_lowercase();
        for level in [UrgencyLevel::Critical, UrgencyLevel::High] {
            if self
                .config
                .keywords_for_urgency(level)
                .iter()
                .any(|kw| lower.contains(kw.as_str()))
            {
                return level;
            }
        }
        UrgencyLevel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;
    use wayfinder_domain::Pillar;

    #[test]
    fn test_domain_chain() {
        assert_eq!(resolve_domain("tenant issue"), Domain::LandlordTenant);
        assert_eq!(resolve_domain("insurance denied"), Domain::Insurance);
        assert_eq!(resolve_domain("I was fired"), Domain::Employment);
        assert_eq!(resolve_domain("discrimination at work"), Domain::HumanRights);
        assert_eq!(resolve_domain("city tree fell"), Domain::TreeDamage);
        assert_eq!(resolve_domain("tree damage"), Domain::TreeDamage);
        assert_eq!(resolve_domain("slipped on the street"), Domain::CivilLitigation);
        assert_eq!(resolve_domain("contractor never finished"), Domain::ConsumerProtection);
        assert_eq!(resolve_domain("slip and fall"), Domain::CivilLitigation);
        assert_eq!(resolve_domain(""), Domain::Other);
    }

    #[test]
    fn test_domain_ignores_words_containing_keywords() {
        assert_eq!(
            resolve_domain("Please help, a city tree fell on my car"),
            Domain::TreeDamage
        );
        assert_eq!(resolve_domain("The car was released to me"), Domain::Other);
        assert_eq!(resolve_domain("sewage backed up into the basement"), Domain::Other);
        assert_eq!(resolve_domain("Lease ended early"), Domain::LandlordTenant);
        assert_eq!(resolve_domain("they broke the lease"), Domain::LandlordTenant);
        assert_eq!(resolve_domain("unpaid wages"), Domain::Employment);
    }

    #[test]
    fn test_please_does_not_route_to_landlord_tenant() {
        let classifier = MatterClassifier::default();
        let c = classifier.classify(&MatterInput::new("Please help, a city tree fell on my car"));
        assert_eq!(c.domain, Domain::TreeDamage);
        assert_eq!(c.pillar, Pillar::Unknown);
    }

    #[test]
    fn test_jurisdiction_defaults_to_ontario() {
        assert_eq!(resolve_jurisdiction(None), Jurisdiction::Ontario);
        assert_eq!(resolve_jurisdiction(Some("Toronto")), Jurisdiction::Ontario);
        assert_eq!(resolve_jurisdiction(Some("gibberish ###")), Jurisdiction::Ontario);
        assert_eq!(resolve_jurisdiction(Some("Federal")), Jurisdiction::Federal);
        assert_eq!(resolve_jurisdiction(Some("Government of Canada")), Jurisdiction::Federal);
    }

    #[test]
    fn test_hint_takes_precedence_over_description() {
        let classifier = MatterClassifier::default();
        let input = MatterInput::new("My insurer denied my claim").with_domain_hint("tenant");
        assert_eq!(classifier.classify(&input).domain, Domain::LandlordTenant);
    }

    #[test]
    fn test_blank_hint_falls_back_to_description() {
        let classifier = MatterClassifier::default();
        let input = MatterInput::new("My insurer denied my claim").with_domain_hint("   ");
        assert_eq!(classifier.classify(&input).domain, Domain::Insurance);
    }

    #[test]
    fn test_malformed_hint_falls_through_to_other() {
        let classifier = MatterClassifier::default();
        let input = MatterInput::new("My landlord is ignoring repairs").with_domain_hint("%%%");
        assert_eq!(classifier.classify(&input).domain, Domain::Other);
    }

    #[test]
    fn test_classification_carries_pillar_fields() {
        let classifier = MatterClassifier::default();
        let input = MatterInput::new("I was assaulted and also received a parking ticket");
        let c = classifier.classify(&input);

        assert_eq!(c.pillar, Pillar::Criminal);
        assert_eq!(c.pillars, BTreeSet::from([Pillar::Criminal, Pillar::QuasiCriminal]));
        assert!(c.pillar_ambiguous);
        assert_eq!(c.status, MatterStatus::Classified);
    }

    #[test]
    fn test_urgency_derivation() {
        let classifier = MatterClassifier::default();
        let c = classifier.classify(&MatterInput::new("The landlord locked out my family"));
        assert_eq!(c.urgency, UrgencyLevel::Critical);

        let c = classifier.classify(&MatterInput::new("I have a hearing next week"));
        assert_eq!(c.urgency, UrgencyLevel::High);

        let c = classifier.classify(&MatterInput::new("Noisy neighbours"));
        assert_eq!(c.urgency, UrgencyLevel::Normal);

        let mut input = MatterInput::new("hearing today");
        input.urgency = Some(UrgencyLevel::Low);
        assert_eq!(classifier.classify(&input).urgency, UrgencyLevel::Low);
    }

    #[test]
    fn test_invalid_amount_dropped() {
        let classifier = MatterClassifier::default();
        let c = classifier.classify(&MatterInput::new("debt").with_amount(f64::NAN));
        assert_eq!(c.dispute_amount, None);
        let c = classifier.classify(&MatterInput::new("debt").with_amount(-5.0));
        assert_eq!(c.dispute_amount, None);
        let c = classifier.classify(&MatterInput::new("debt").with_amount(1200.0));
        assert_eq!(c.dispute_amount, Some(1200.0));
    }

    #[test]
    fn test_reclassify_keeps_id() {
        let classifier = MatterClassifier::default();
        let first = classifier.classify(&MatterInput::new("tenant"));
        let second = classifier.reclassify(&first, &MatterInput::new("insurance"));
        assert_eq!(first.id, second.id);
        assert_eq!(second.domain, Domain::Insurance);
    }

    #[test]
    fn test_key_dates_preserved() {
        let classifier = MatterClassifier::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let input = MatterInput::new("tenant").with_key_date(KeyDate::new("Notice served", date));
        let c = classifier.classify(&input);
        assert_eq!(c.key_dates.len(), 1);
        assert_eq!(c.earliest_key_date().unwrap().date, date);
    }
}
