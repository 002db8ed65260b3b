//! Residential tenancy disputes before the Landlord and Tenant Board

use crate::module::{evidence_refs, key_date_phrase, DomainModule, ModuleInput};
use wayfinder_domain::{DocumentDraft, Domain, DraftSection, UrgencyLevel};

/// Guidance for tenants and landlords
#[derive(Debug, Clone, Copy, Default)]
pub struct LandlordTenantModule;

impl LandlordTenantModule {
    /// LTB form that fits the description
    fn form(input: &ModuleInput<'_>) -> (&'static str, &'static str) {
        if input.mentions(&["repair", "mould", "mold", "heat", "pest", "maintenance"]) {
            ("T6", "Tenant Application about Maintenance")
        } else if input.mentions(&["deposit", "rent increase", "overcharg", "money owed"]) {
            ("T1", "Tenant Application for a Rebate of Money Owed")
        } else {
            ("T2", "Application about Tenant Rights")
        }
    }
}

impl DomainModule for LandlordTenantModule {
    fn id(&self) -> &'static str {
        "landlord-tenant"
    }

    fn name(&self) -> &'static str {
        "Landlord and Tenant"
    }

    fn domains(&self) -> &'static [Domain] {
        &[Domain::LandlordTenant]
    }

    fn build_drafts(&self, input: &ModuleInput<'_>) -> Vec<DocumentDraft> {
        let c = input.classification;
        let refs = evidence_refs(input.evidence);
        let (form, form_name) = Self::form(input);

        let mut overview = DocumentDraft::new("Landlord and Tenant Board Application")
            .section(DraftSection::new(
                "Where to file",
                "Disputes about a residential tenancy in Ontario are decided by the Landlord \
                 and Tenant Board. The Board hears these cases whatever the amount involved.",
            ))
            .section(
                DraftSection::new(
                    "Which form",
                    format!("Based on what you told us, start with Form {form} ({form_name})."),
                )
                .with_evidence(refs.clone()),
            )
            .section(DraftSection::new("Key dates", key_date_phrase(c)))
            .cite("Residential Tenancies Act, 2006, S.O. 2006, c. 17")
            .warn("Do not stop paying rent while your application is pending unless the Board orders it.");

        if c.urgency == UrgencyLevel::Critical {
            overview = overview.warn(
                "If you have been locked out or your vital services were cut off, file a T2 \
                 application and ask the Board for an urgent hearing today.",
            );
        }

        let notice = DocumentDraft::new("Letter to Landlord")
            .section(DraftSection::new(
                "Issue",
                "I am writing about a problem with my rental unit that has not been resolved.",
            ))
            .section(
                DraftSection::new(
                    "Request",
                    "Please fix the problem within a reasonable time and confirm in writing \
                     when it will be done.",
                )
                .with_evidence(refs),
            )
            .section(DraftSection::new(
                "Next step",
                "If this is not resolved, I will apply to the Landlord and Tenant Board.",
            ))
            .warn("Keep a copy of this letter and proof of when you sent it.");

        vec![overview, notice]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::fixtures;

    #[test]
    fn test_form_selection() {
        let c = fixtures::classification(Domain::LandlordTenant, None);
        let drafts = LandlordTenantModule
            .build_drafts(&ModuleInput::new(&c, &[]).with_description("No heat all winter"));
        assert!(drafts[0].sections[1].content.contains("Form T6"));

        let drafts = LandlordTenantModule
            .build_drafts(&ModuleInput::new(&c, &[]).with_description("They kept my deposit"));
        assert!(drafts[0].sections[1].content.contains("Form T1"));

        let drafts = LandlordTenantModule.build_drafts(&ModuleInput::new(&c, &[]));
        assert!(drafts[0].sections[1].content.contains("Form T2"));
    }

    #[test]
    fn test_lockout_warning() {
        let mut c = fixtures::classification(Domain::LandlordTenant, None);
        let evidence = fixtures::evidence();
        let drafts = LandlordTenantModule.build_drafts(&ModuleInput::new(&c, &evidence));
        assert_eq!(drafts[0].warnings.len(), 1);
        assert_eq!(drafts[1].sections[1].evidence_refs, vec!["letter.pdf"]);

        c.urgency = UrgencyLevel::Critical;
        let drafts = LandlordTenantModule.build_drafts(&ModuleInput::new(&c, &evidence));
        assert!(drafts[0].warnings.iter().any(|w| w.contains("locked out")));
    }
}
