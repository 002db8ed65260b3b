//! Tree damage: who owns the tree decides who pays

use crate::module::{amount_phrase, evidence_refs, DomainModule, ModuleInput};
use serde::Serialize;
use wayfinder_domain::{DocumentDraft, Domain, DraftSection};

/// Who owns the tree that caused the damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeOwnership {
    /// City or town tree, usually on the road allowance
    Municipal,
    /// A neighbour's tree, or one on the boundary
    Neighbour,
    /// The user's own tree
    Own,
    /// Not stated
    Unknown,
}

/// Classifies tree ownership and drafts the matching claim
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeDamageClassifierModule;

impl TreeDamageClassifierModule {
    /// Ownership from keywords; municipal wins over neighbour, neighbour over own
    pub fn ownership(input: &ModuleInput<'_>) -> TreeOwnership {
        if input.mentions(&["city", "municipal", "town", "boulevard", "street tree", "public"]) {
            TreeOwnership::Municipal
        } else if input.mentions(&["neighbour", "neighbor", "next door", "boundary"]) {
            TreeOwnership::Neighbour
        } else if input.mentions(&["my tree", "our tree", "my own", "my yard", "my property"]) {
            TreeOwnership::Own
        } else {
            TreeOwnership::Unknown
        }
    }
}

impl DomainModule for TreeDamageClassifierModule {
    fn id(&self) -> &'static str {
        "tree-damage"
    }

    fn name(&self) -> &'static str {
        "Tree Damage Classifier"
    }

    fn domains(&self) -> &'static [Domain] {
        &[Domain::TreeDamage]
    }

    fn build_drafts(&self, input: &ModuleInput<'_>) -> Vec<DocumentDraft> {
        let c = input.classification;
        let refs = evidence_refs(input.evidence);
        let ownership = Self::ownership(input);

        let assessment = DocumentDraft::new("Tree Damage Assessment").section(
            DraftSection::new(
                "What happened",
                format!(
                    "A tree caused damage to your property. {}",
                    amount_phrase(c.dispute_amount)
                ),
            )
            .with_evidence(refs.clone()),
        );

        let assessment = match ownership {
            TreeOwnership::Municipal => assessment
                .section(DraftSection::new(
                    "Claim against the municipality",
                    "Send written notice of your claim to the city clerk right away. Describe \
                     the tree, where it stood and the damage it caused.",
                ))
                .cite("Municipal Act, 2001, S.O. 2001, c. 25")
                .warn("Municipalities can require written notice within days of the damage. Send notice now."),
            TreeOwnership::Neighbour => assessment
                .section(DraftSection::new(
                    "Claim against your neighbour",
                    "Your neighbour may be responsible if they knew or should have known the tree \
                     was unsafe. Trees on the boundary belong to both owners.",
                ))
                .cite("Forestry Act, R.S.O. 1990, c. F.26, s. 10")
                .warn("Talk to your own insurer before you agree to anything with your neighbour."),
            TreeOwnership::Own => assessment
                .section(DraftSection::new(
                    "Your home insurance",
                    "Damage from your own tree is usually a claim under your home insurance \
                     policy. Report it to your insurer promptly.",
                ))
                .warn("Removing the tree before the adjuster visits can weaken your claim."),
            TreeOwnership::Unknown => assessment
                .section(DraftSection::new(
                    "Find out who owns the tree",
                    "Check your survey or ask the city whether the tree stood on public land. \
                     Who owns the tree decides who you claim against.",
                ))
                .warn("Photograph the tree and the damage before anything is moved."),
        };

        let record = DocumentDraft::new("Damage Record").section(
            DraftSection::new(
                "Record",
                "List the date, the weather, every damaged item and the repair quotes you \
                 received.",
            )
            .with_evidence(refs),
        );

        vec![assessment, record]
    }
}
