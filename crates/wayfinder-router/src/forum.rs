//! Forum routing: choose where a classified matter should be heard.
//!
//! Decision order:
//! 1. Domain tribunal override (LTB, HRTO), which short-circuits everything
//! 2. Appeal or judicial review, by jurisdiction
//! 3. Trial court, split at the small-claims limit

use crate::config::RoutingConfig;
use crate::RouterError;
use std::collections::HashSet;
use tracing::info;
use wayfinder_domain::{
    Authority, AuthorityLookup, Domain, ForumMap, Jurisdiction, MatterClassification,
};

/// Landlord and Tenant Board
pub const LTB: &str = "ON-LTB";
/// Human Rights Tribunal of Ontario
pub const HRTO: &str = "ON-HRTO";
/// Superior Court of Justice
pub const SCJ: &str = "ON-SCJ";
/// Divisional Court (Ontario judicial review)
pub const DIVISIONAL_COURT: &str = "ON-DIVCOURT";
/// Court of Appeal for Ontario
pub const COURT_OF_APPEAL: &str = "ON-CA";
/// Federal Court
pub const FEDERAL_COURT: &str = "CA-FC";
/// Federal Court of Appeal
pub const FEDERAL_COURT_OF_APPEAL: &str = "CA-FCA";

/// Routing request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteInput {
    /// Legal domain
    pub domain: Option<Domain>,

    /// Jurisdiction of the matter
    pub jurisdiction: Jurisdiction,

    /// Amount in dispute, in dollars
    pub dispute_amount: Option<f64>,

    /// The user is appealing a decision
    pub is_appeal: bool,

    /// The user seeks judicial review of a decision
    pub is_judicial_review: bool,
}

impl RouteInput {
    /// Create a routing request for a domain in a jurisdiction
    pub fn new(domain: Domain, jurisdiction: Jurisdiction) -> Self {
        Self {
            domain: Some(domain),
            jurisdiction,
            ..Self::default()
        }
    }

    /// Set the dispute amount
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.dispute_amount = Some(amount);
        self
    }

    /// Mark as an appeal
    pub fn appeal(mut self) -> Self {
        self.is_appeal = true;
        self
    }

    /// Mark as a judicial review
    pub fn judicial_review(mut self) -> Self {
        self.is_judicial_review = true;
        self
    }
}

impl From<&MatterClassification> for RouteInput {
    fn from(c: &MatterClassification) -> Self {
        Self {
            domain: Some(c.domain),
            jurisdiction: c.jurisdiction.clone(),
            dispute_amount: c.dispute_amount,
            is_appeal: false,
            is_judicial_review: false,
        }
    }
}

/// Selects a primary forum, alternatives and an escalation chain
pub struct ForumRouter<'a, L: AuthorityLookup> {
    lookup: &'a L,
    config: &'a RoutingConfig,
}

impl<'a, L: AuthorityLookup> ForumRouter<'a, L> {
    /// Create a router over an authority lookup
    pub fn new(lookup: &'a L, config: &'a RoutingConfig) -> Self {
        Self { lookup, config }
    }

    /// Route a matter
    ///
    /// Fails only when the chosen primary authority is missing from the lookup.
    pub fn route(&self, input: &RouteInput) -> Result<ForumMap, RouterError> {
        let federal = input.jurisdiction == Jurisdiction::Federal;
        let (primary_id, mut rationale) = self.primary_forum(input, federal);

        let primary = self
            .lookup
            .authority(&primary_id)
            .cloned()
            .ok_or_else(|| RouterError::AuthorityUnavailable(primary_id.clone()))?;

        let alternatives: Vec<Authority> = self
            .lookup
            .resolve_all(&alternative_ids(input.domain))
            .into_iter()
            .filter(|a| a.id != primary.id)
            .collect();
        let escalation_chain = self.escalation_chain(&primary);

        rationale.push_str(&format!(" Recommended forum: {}.", primary.name));
        if !alternatives.is_empty() {
            let names: Vec<&str> = alternatives.iter().map(|a| a.name.as_str()).collect();
            rationale.push_str(&format!(" Alternatives: {}.", names.join(", ")));
        }
        if !escalation_chain.is_empty() {
            let names: Vec<&str> = escalation_chain.iter().map(|a| a.name.as_str()).collect();
            rationale.push_str(&format!(" Escalation path: {}.", names.join(" → ")));
        }

        info!(
            primary = %primary.id,
            alternatives = alternatives.len(),
            escalation = escalation_chain.len(),
            "Routed matter"
        );

        Ok(ForumMap {
            primary,
            alternatives,
            escalation_chain,
            rationale,
        })
    }

    fn primary_forum(&self, input: &RouteInput, federal: bool) -> (String, String) {
        match input.domain {
            Some(Domain::LandlordTenant) => {
                return (
                    LTB.to_string(),
                    "Residential tenancy disputes in Ontario go to the Landlord and Tenant Board, \
                     whatever the amount in dispute."
                        .to_string(),
                )
            }
            Some(Domain::HumanRights) => {
                return (
                    HRTO.to_string(),
                    "Human Rights Code applications in Ontario go to the Human Rights Tribunal of \
                     Ontario."
                        .to_string(),
                )
            }
            _ => {}
        }

        if input.is_appeal {
            let id = if federal { FEDERAL_COURT_OF_APPEAL } else { COURT_OF_APPEAL };
            return (
                id.to_string(),
                format!(
                    "Appeals in {} matters are heard by the appellate court.",
                    input.jurisdiction
                ),
            );
        }

        if input.is_judicial_review {
            let id = if federal { FEDERAL_COURT } else { DIVISIONAL_COURT };
            return (
                id.to_string(),
                format!(
                    "Judicial review of a {} decision is brought in the reviewing court.",
                    input.jurisdiction
                ),
            );
        }

        if federal {
            return (
                FEDERAL_COURT.to_string(),
                "Federal matters start in the Federal Court.".to_string(),
            );
        }

        match input.dispute_amount {
            Some(amount) if amount <= self.config.small_claims_limit => {
                let id = self
                    .config
                    .small_claims_authority_id
                    .clone()
                    .unwrap_or_else(|| SCJ.to_string());
                (
                    id,
                    format!(
                        "The amount in dispute (${:.2}) is within the ${:.0} small claims limit.",
                        amount, self.config.small_claims_limit
                    ),
                )
            }
            Some(amount) => (
                SCJ.to_string(),
                format!(
                    "The amount in dispute (${:.2}) is above the ${:.0} small claims limit.",
                    amount, self.config.small_claims_limit
                ),
            ),
            None => (
                SCJ.to_string(),
                "No amount in dispute was given; civil claims start in the trial court."
                    .to_string(),
            ),
        }
    }

    /// Breadth-first walk of escalation routes from the primary forum
    fn escalation_chain(&self, primary: &Authority) -> Vec<Authority> {
        let mut seen: HashSet<String> = HashSet::from([primary.id.clone()]);
        let mut queue: Vec<String> = primary.escalation_routes.clone();
        let mut chain = Vec::new();
        let mut i = 0;

        while i < queue.len() {
            let id = queue[i].clone();
            i += 1;
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(next) = self.lookup.authority(&id) {
                queue.extend(next.escalation_routes.iter().cloned());
                chain.push(next.clone());
            }
        }

        chain
    }
}

/// Other forums worth knowing about for a domain
fn alternative_ids(domain: Option<Domain>) -> Vec<String> {
    let ids: &[&str] = match domain {
        Some(Domain::LandlordTenant) => &[SCJ],
        Some(Domain::HumanRights) => &[SCJ],
        Some(Domain::Employment) => &["ON-ESB", HRTO, SCJ],
        Some(Domain::Insurance) => &["CA-GIO", "ON-LAT", SCJ],
        Some(Domain::ConsumerProtection) => &["ON-CPO", SCJ],
        Some(Domain::TreeDamage) | Some(Domain::CivilLitigation) | Some(Domain::Other) | None => {
            &[]
        }
    };
    ids.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthorityRegistry;

    fn route(input: RouteInput) -> ForumMap {
        let registry = AuthorityRegistry::ontario_defaults();
        let config = RoutingConfig::default();
        ForumRouter::new(&registry, &config).route(&input).unwrap()
    }

    #[test]
    fn test_landlord_tenant_goes_to_ltb() {
        let map = route(RouteInput::new(Domain::LandlordTenant, Jurisdiction::Ontario));
        assert_eq!(map.primary.id, LTB);
        let chain: Vec<_> = map.escalation_chain.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(chain, vec!["ON-DIVCOURT", "ON-CA", "CA-SCC"]);
    }

    #[test]
    fn test_tribunal_override_beats_appeal_flag() {
        let map = route(
            RouteInput::new(Domain::HumanRights, Jurisdiction::Federal)
                .with_amount(1_000_000.0)
                .appeal()
                .judicial_review(),
        );
        assert_eq!(map.primary.id, HRTO);
    }

    #[test]
    fn test_appeal_routes_by_jurisdiction() {
        let on = route(RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario).appeal());
        assert_eq!(on.primary.id, COURT_OF_APPEAL);
        let fed = route(RouteInput::new(Domain::Other, Jurisdiction::Federal).appeal());
        assert_eq!(fed.primary.id, FEDERAL_COURT_OF_APPEAL);
    }

    #[test]
    fn test_judicial_review_routes_by_jurisdiction() {
        let on = route(RouteInput::new(Domain::Employment, Jurisdiction::Ontario).judicial_review());
        assert_eq!(on.primary.id, DIVISIONAL_COURT);
        let fed = route(RouteInput::new(Domain::Other, Jurisdiction::Federal).judicial_review());
        assert_eq!(fed.primary.id, FEDERAL_COURT);
    }

    #[test]
    fn test_appeal_checked_before_judicial_review() {
        let map = route(
            RouteInput::new(Domain::Other, Jurisdiction::Ontario)
                .appeal()
                .judicial_review(),
        );
        assert_eq!(map.primary.id, COURT_OF_APPEAL);
    }

    #[test]
    fn test_trial_court_both_branches_default_to_scj() {
        let low = route(RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario).with_amount(5_000.0));
        let high = route(RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario).with_amount(90_000.0));
        assert_eq!(low.primary.id, SCJ);
        assert_eq!(high.primary.id, SCJ);
        assert!(low.rationale.contains("within"));
        assert!(high.rationale.contains("above"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let map = route(RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario).with_amount(35_000.0));
        assert!(map.rationale.contains("within"));
    }

    #[test]
    fn test_configured_small_claims_authority() {
        let mut registry = AuthorityRegistry::ontario_defaults();
        registry.add(
            Authority::new(
                "ON-SCJ-SC",
                "Small Claims Court",
                wayfinder_domain::AuthorityType::Court,
                Jurisdiction::Ontario,
            )
            .with_escalation(&["ON-DIVCOURT"]),
        );
        let config = RoutingConfig {
            small_claims_authority_id: Some("ON-SCJ-SC".to_string()),
            ..RoutingConfig::default()
        };
        let router = ForumRouter::new(&registry, &config);

        let low = router
            .route(&RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario).with_amount(100.0))
            .unwrap();
        assert_eq!(low.primary.id, "ON-SCJ-SC");
        let high = router
            .route(&RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario).with_amount(100_000.0))
            .unwrap();
        assert_eq!(high.primary.id, SCJ);
    }

    #[test]
    fn test_alternatives_exclude_primary_and_unresolved() {
        let mut registry = AuthorityRegistry::ontario_defaults();
        let config = RoutingConfig::default();
        let map = ForumRouter::new(&registry, &config)
            .route(&RouteInput::new(Domain::Insurance, Jurisdiction::Ontario).with_amount(100.0))
            .unwrap();
        let alts: Vec<_> = map.alternatives.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(alts, vec!["CA-GIO", "ON-LAT"]);

        registry = AuthorityRegistry::new();
        registry.add(Authority::new(
            SCJ,
            "Superior Court of Justice",
            wayfinder_domain::AuthorityType::Court,
            Jurisdiction::Ontario,
        ));
        let map = ForumRouter::new(&registry, &config)
            .route(&RouteInput::new(Domain::Insurance, Jurisdiction::Ontario))
            .unwrap();
        assert!(map.alternatives.is_empty());
        assert!(map.escalation_chain.is_empty());
    }

    #[test]
    fn test_missing_primary_is_error() {
        let registry = AuthorityRegistry::new();
        let config = RoutingConfig::default();
        let result = ForumRouter::new(&registry, &config)
            .route(&RouteInput::new(Domain::LandlordTenant, Jurisdiction::Ontario));
        assert!(matches!(result, Err(RouterError::AuthorityUnavailable(id)) if id == LTB));
    }

    #[test]
    fn test_escalation_cycle_terminates() {
        let mut registry = AuthorityRegistry::new();
        let court = wayfinder_domain::AuthorityType::Court;
        registry.add(Authority::new(SCJ, "Trial", court, Jurisdiction::Ontario).with_escalation(&["X"]));
        registry.add(Authority::new("X", "X", court, Jurisdiction::Ontario).with_escalation(&["Y", SCJ]));
        registry.add(Authority::new("Y", "Y", court, Jurisdiction::Ontario).with_escalation(&["X"]));
        let config = RoutingConfig::default();

        let map = ForumRouter::new(&registry, &config)
            .route(&RouteInput::new(Domain::CivilLitigation, Jurisdiction::Ontario))
            .unwrap();
        let chain: Vec<_> = map.escalation_chain.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(chain, vec!["X", "Y"]);
    }

    #[test]
    fn test_rationale_mentions_forum() {
        let map = route(RouteInput::new(Domain::Employment, Jurisdiction::Ontario).with_amount(8_000.0));
        assert!(map.rationale.contains("Superior Court of Justice"));
        assert!(map.rationale.contains("Alternatives: Employment Standards Program"));
    }
}
