//! Consumer Protection Ontario complaint filing

use crate::module::{amount_phrase, evidence_refs, DomainModule, ModuleInput};
use wayfinder_domain::{DocumentDraft, Domain, DraftSection};

/// Drafts a consumer complaint and a demand to the business
#[derive(Debug, Clone, Copy, Default)]
pub struct OcppFilingModule;

impl DomainModule for OcppFilingModule {
    fn id(&self) -> &'static str {
        "ocpp"
    }

    fn name(&self) -> &'static str {
        "Consumer Protection Complaint"
    }

    fn domains(&self) -> &'static [Domain] {
        &[Domain::ConsumerProtection]
    }

    fn build_drafts(&self, input: &ModuleInput<'_>) -> Vec<DocumentDraft> {
        let c = input.classification;
        let refs = evidence_refs(input.evidence);
        let contractor = input.mentions(&["contractor", "renovation", "roof", "repair"]);
        let card = input.mentions(&["credit card", "visa", "mastercard"]);

        let mut demand = DocumentDraft::new("Demand Letter to Business")
            .section(DraftSection::new(
                "The problem",
                "I am writing about goods or services I paid for that were not delivered as \
                 agreed.",
            ))
            .section(
                DraftSection::new(
                    "What I am asking for",
                    format!(
                        "{} I ask for a full refund or for the work to be completed within \
                         fourteen days.",
                        amount_phrase(c.dispute_amount)
                    ),
                )
                .with_evidence(refs.clone()),
            )
            .cite("Consumer Protection Act, 2002, S.O. 2002, c. 30, Sch. A")
            .warn("Send the letter in a way you can prove, such as email or registered mail.");

        if contractor {
            demand = demand.section(DraftSection::new(
                "Written estimate",
                "A contractor generally cannot charge more than ten percent above a written \
                 estimate unless you agreed to the higher price.",
            ));
        }

        let mut complaint = DocumentDraft::new("Consumer Protection Ontario Complaint")
            .section(DraftSection::new(
                "Business details",
                "Give the business name, address, phone number and the name of anyone you \
                 dealt with.",
            ))
            .section(
                DraftSection::new(
                    "What happened",
                    "Describe the agreement, what went wrong and what you have done to fix it.",
                )
                .with_evidence(refs),
            )
            .section(DraftSection::new(
                "Outcome",
                "Consumer Protection Ontario can mediate with the business and may take action \
                 against businesses that break the law.",
            ))
            .warn("Consumer Protection Ontario cannot order the business to pay you.");

        if card {
            complaint = complaint.warn(
                "If you paid by credit card, you may be able to ask your card issuer for a \
                 chargeback after sending the business a written cancellation.",
            );
        }

        vec![demand, complaint]
    }
}
