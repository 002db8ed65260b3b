//! Employment disputes: Employment Standards claim or civil action

use crate::module::{amount_phrase, evidence_refs, format_amount, DomainModule, ModuleInput};
use serde::Serialize;
use wayfinder_domain::{DocumentDraft, Domain, DraftSection};

/// Most an Employment Standards officer can order for unpaid wages
pub const ESA_CLAIM_LIMIT: f64 = 10_000.0;

const DISMISSAL_KEYWORDS: &[&str] = &[
    "fired",
    "dismiss",
    "terminated",
    "let go",
    "laid off",
    "wrongful",
    "constructive",
];

/// Recommended path for an employment dispute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentPath {
    /// Claim with the Employment Standards Program
    EsaClaim,
    /// Wrongful dismissal or wage action in court
    CivilAction,
}

/// Chooses between an ESA claim and a civil action, then drafts for it
#[derive(Debug, Clone, Copy, Default)]
pub struct EmploymentLawRouterModule;

impl EmploymentLawRouterModule {
    /// Dismissal language or an amount above the ESA limit points to court
    pub fn recommend(input: &ModuleInput<'_>) -> EmploymentPath {
        let over_limit = input
            .classification
            .dispute_amount
            .is_some_and(|a| a > ESA_CLAIM_LIMIT);

        if over_limit || input.mentions(DISMISSAL_KEYWORDS) {
            EmploymentPath::CivilAction
        } else {
            EmploymentPath::EsaClaim
        }
    }
}

impl DomainModule for EmploymentLawRouterModule {
    fn id(&self) -> &'static str {
        "employment"
    }

    fn name(&self) -> &'static str {
        "Employment Law Router"
    }

    fn domains(&self) -> &'static [Domain] {
        &[Domain::Employment]
    }

    fn build_drafts(&self, input: &ModuleInput<'_>) -> Vec<DocumentDraft> {
        let c = input.classification;
        let refs = evidence_refs(input.evidence);
        let path = Self::recommend(input);

        let comparison = DocumentDraft::new("Choosing Your Path")
            .section(DraftSection::new(
                "Employment Standards claim",
                format!(
                    "A claim with the Employment Standards Program is free and does not need a \
                     lawyer. An officer can order up to {} in unpaid wages.",
                    format_amount(ESA_CLAIM_LIMIT)
                ),
            ))
            .section(DraftSection::new(
                "Court action",
                "A lawsuit can recover reasonable notice for a dismissal and amounts above the \
                 Employment Standards limit. Small claims court handles lower amounts.",
            ))
            .section(
                DraftSection::new(
                    "Our suggestion",
                    match path {
                        EmploymentPath::EsaClaim => format!(
                            "{} An Employment Standards claim looks like the better fit.",
                            amount_phrase(c.dispute_amount)
                        ),
                        EmploymentPath::CivilAction => format!(
                            "{} A court action looks like the better fit.",
                            amount_phrase(c.dispute_amount)
                        ),
                    },
                )
                .with_evidence(refs.clone()),
            )
            .cite("Employment Standards Act, 2000, S.O. 2000, c. 41")
            .warn("Filing an Employment Standards claim for termination pay can stop you from suing for the same dismissal.");

        let next = match path {
            EmploymentPath::EsaClaim => DocumentDraft::new("Employment Standards Claim Notes")
                .section(DraftSection::new(
                    "Before you file",
                    "List each pay period, the hours you worked and what you were paid. Note \
                     any vacation pay or overtime that was not paid.",
                ))
                .section(
                    DraftSection::new(
                        "Filing",
                        "File your claim online with the Employment Standards Program and keep \
                         the claim number.",
                    )
                    .with_evidence(refs),
                )
                .warn("Claims must usually be filed within two years of the wages being owed."),
            EmploymentPath::CivilAction => DocumentDraft::new("Demand Letter to Employer")
                .section(DraftSection::new(
                    "Demand",
                    "I am writing about the end of my employment. I ask that you pay the \
                     notice and other amounts I am owed.",
                ))
                .section(
                    DraftSection::new(
                        "Response",
                        "Please respond in writing within fourteen days. If we cannot resolve \
                         this, I will start a court action.",
                    )
                    .with_evidence(refs),
                )
                .cite("Limitations Act, 2002, S.O. 2002, c. 24, Sch. B")
                .warn("You generally have two years from your dismissal to start a lawsuit."),
        };

        vec![comparison, next]
    }
}
