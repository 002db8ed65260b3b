//! In-memory document packages: one Markdown file per draft

use serde::Serialize;
use wayfinder_domain::{DocumentDraft, MatterClassification};
use wayfinder_evidence::{ReadabilityReport, ReadabilityScorer};

/// One rendered draft
#[derive(Debug, Clone, Serialize)]
pub struct PackageFile {
    /// File name within the package folder
    pub filename: String,

    /// Draft title
    pub title: String,

    /// Rendered Markdown
    pub content: String,

    /// Readability of the draft's section text
    pub readability: ReadabilityReport,
}

/// Rendered drafts for one matter
///
/// Nothing is written to disk; callers decide where files go.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPackage {
    /// Suggested folder name
    pub folder_name: String,

    /// Files in draft order
    pub files: Vec<PackageFile>,

    /// Warnings from every draft, first occurrence kept
    pub warnings: Vec<String>,
}

impl DocumentPackage {
    /// Render drafts into a package
    pub fn assemble(
        module_id: &str,
        classification: &MatterClassification,
        drafts: &[DocumentDraft],
    ) -> Self {
        let scorer = ReadabilityScorer::new();

        let files = drafts
            .iter()
            .enumerate()
            .map(|(i, draft)| PackageFile {
                filename: format!("{:02}-{}.md", i + 1, slugify(&draft.title)),
                title: draft.title.clone(),
                content: draft.to_markdown(),
                readability: scorer.score(&draft.body_text()),
            })
            .collect();

        let mut warnings: Vec<String> = Vec::new();
        for w in drafts.iter().flat_map(|d| &d.warnings) {
            if !warnings.contains(w) {
                warnings.push(w.clone());
            }
        }

        Self {
            folder_name: format!("{}-{}", module_id, classification.id),
            files,
            warnings,
        }
    }

    /// Markdown index listing every file with its grade level
    pub fn index_markdown(&self) -> String {
        let mut out = String::from("# Document package\n\n");
        for f in &self.files {
            out.push_str(&format!(
                "- [{}]({}) (grade {:.1}, {})\n",
                f.title, f.filename, f.readability.flesch_kincaid_grade, f.readability.band
            ));
        }
        out
    }

    /// Look up a file by name
    pub fn file(&self, filename: &str) -> Option<&PackageFile> {
        self.files.iter().find(|f| f.filename == filename)
    }
}

/// Lower-case ASCII slug with single dashes
fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use wayfinder_domain::{
        DraftSection, Domain, Jurisdiction, MatterId, MatterStatus, Pillar, UrgencyLevel,
    };

    fn classification() -> MatterClassification {
        MatterClassification {
            id: MatterId::new(),
            domain: Domain::Insurance,
            jurisdiction: Jurisdiction::Ontario,
            pillar: Pillar::Civil,
            pillars: BTreeSet::from([Pillar::Civil]),
            pillar_ambiguous: false,
            party_types: vec![],
            timeline: None,
            key_dates: vec![],
            urgency: UrgencyLevel::Normal,
            dispute_amount: None,
            status: MatterStatus::Classified,
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Notice to Landlord (Repairs)"), "notice-to-landlord-repairs");
        assert_eq!(slugify("  --  "), "document");
        assert_eq!(slugify("T2: Tenant Rights"), "t2-tenant-rights");
    }

    #[test]
    fn test_assemble() {
        let c = classification();
        let drafts = vec![
            DocumentDraft::new("Claim Summary")
                .section(DraftSection::new("Facts", "The roof leaked."))
                .warn("Act within two years."),
            DocumentDraft::new("Complaint Letter")
                .section(DraftSection::new("Request", "Please review my claim."))
                .warn("Act within two years.")
                .warn("Keep copies."),
        ];

        let package = DocumentPackage::assemble("insurance", &c, &drafts);
        assert_eq!(package.folder_name, format!("insurance-{}", c.id));
        assert_eq!(package.files.len(), 2);
        assert_eq!(package.files[0].filename, "01-claim-summary.md");
        assert_eq!(package.files[1].filename, "02-complaint-letter.md");
        assert!(package.files[0].content.starts_with("# Claim Summary"));
        assert_eq!(package.files[0].readability.words, 3);
        assert_eq!(package.warnings, vec!["Act within two years.", "Keep copies."]);
        assert!(package.file("02-complaint-letter.md").is_some());
        assert!(package.index_markdown().contains("[Claim Summary](01-claim-summary.md)"));
    }

    #[test]
    fn test_package_serializes() {
        let c = classification();
        let drafts = vec![DocumentDraft::new("Only").section(DraftSection::new("A", "Short text."))];
        let package = DocumentPackage::assemble("insurance", &c, &drafts);

        let json = serde_json::to_value(&package).unwrap();
        assert_eq!(json["files"][0]["filename"], "01-only.md");
        assert_eq!(json["files"][0]["readability"]["band"], "easy");
    }
}
