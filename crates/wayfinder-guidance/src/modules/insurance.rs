//! Insurance claim denials and disputes

use crate::module::{amount_phrase, evidence_refs, key_date_phrase, DomainModule, ModuleInput};
use wayfinder_domain::{DocumentDraft, Domain, DraftSection};

/// Guidance for disputes with an insurer
#[derive(Debug, Clone, Copy, Default)]
pub struct InsuranceModule;

impl DomainModule for InsuranceModule {
    fn id(&self) -> &'static str {
        "insurance"
    }

    fn name(&self) -> &'static str {
        "Insurance Dispute"
    }

    fn domains(&self) -> &'static [Domain] {
        &[Domain::Insurance]
    }

    fn build_drafts(&self, input: &ModuleInput<'_>) -> Vec<DocumentDraft> {
        let c = input.classification;
        let refs = evidence_refs(input.evidence);
        let auto = input.mentions(&["car", "auto", "vehicle", "accident benefits"]);

        let summary = DocumentDraft::new("Insurance Claim Summary")
            .section(
                DraftSection::new(
                    "Your claim",
                    format!(
                        "This summary sets out your dispute with your insurer. {} {}",
                        amount_phrase(c.dispute_amount),
                        key_date_phrase(c)
                    ),
                )
                .with_evidence(refs.clone()),
            )
            .section(DraftSection::new(
                "What to gather",
                "Collect your policy, the denial letter, every email with the adjuster, photos \
                 of the loss and receipts for repairs or replacement.",
            ))
            .cite("Insurance Act, R.S.O. 1990, c. I.8")
            .warn("Your policy may set a short deadline to sue. Check it today.");

        let complaint = DocumentDraft::new("Internal Complaint Letter")
            .section(DraftSection::new(
                "Request for review",
                "I am writing to ask for a review of the decision on my claim. I believe the \
                 decision is wrong for the reasons below, and I ask you to reconsider it.",
            ))
            .section(
                DraftSection::new(
                    "Reasons",
                    format!(
                        "{} I have attached copies of my supporting documents.",
                        amount_phrase(c.dispute_amount)
                    ),
                )
                .with_evidence(refs),
            )
            .section(DraftSection::new(
                "Next step",
                "Please send me your final written position so I can take the matter to the \
                 ombudservice if needed.",
            ))
            .warn("Most insurers require you to finish their complaint process before an ombudservice will review your file.");

        let mut escalation = DocumentDraft::new("Escalation Options")
            .section(DraftSection::new(
                "General Insurance OmbudService",
                "If the insurer's final answer does not resolve your complaint, the General \
                 Insurance OmbudService can review it for free.",
            ))
            .section(DraftSection::new(
                "Court",
                "You may also sue your insurer. Claims up to the small claims limit can be \
                 brought without a lawyer.",
            ))
            .cite("General Insurance OmbudService Terms of Reference");

        if auto {
            escalation = escalation
                .section(DraftSection::new(
                    "Accident benefits",
                    "Disputes about statutory accident benefits go to the Licence Appeal \
                     Tribunal, not to court.",
                ))
                .cite("Statutory Accident Benefits Schedule, O. Reg. 34/10")
                .warn("Accident benefits disputes have a two-year limit from the insurer's refusal.");
        }

        vec![summary, complaint, escalation]
    }
}
