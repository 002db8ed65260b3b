//! Document module - generated guidance drafts

use serde::{Deserialize, Serialize};

/// One section of a document draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSection {
    /// Section heading
    pub heading: String,

    /// Section body
    pub content: String,

    /// Filenames of evidence the section relies on
    #[serde(default)]
    pub evidence_refs: Vec<String>,

    /// Whether the user has confirmed the section's facts
    #[serde(default)]
    pub confirmed: bool,
}

impl DraftSection {
    /// Create an unconfirmed section with no evidence references
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
            evidence_refs: Vec::new(),
            confirmed: false,
        }
    }

    /// Attach evidence references
    pub fn with_evidence(mut self, refs: Vec<String>) -> Self {
        self.evidence_refs = refs;
        self
    }
}

/// A generated guidance document
///
/// Built once per module invocation and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    /// Document title
    pub title: String,

    /// Ordered sections
    pub sections: Vec<DraftSection>,

    /// Statutes, rules and forms cited
    #[serde(default)]
    pub citations: Vec<String>,

    /// Deadlines and cautions the user must read
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl DocumentDraft {
    /// Start a draft with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            citations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Append a section
    pub fn section(mut self, section: DraftSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a citation
    pub fn cite(mut self, citation: impl Into<String>) -> Self {
        self.citations.push(citation.into());
        self
    }

    /// Append a warning
    pub fn warn(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// All section text joined for scoring and rendering
    pub fn body_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the draft as Markdown
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);

        if !self.warnings.is_empty() {
            out.push_str("\n> **Important**\n");
            for w in &self.warnings {
                out.push_str(&format!("> - {}\n", w));
            }
        }

        for s in &self.sections {
            out.push_str(&format!("\n## {}\n\n{}\n", s.heading, s.content));
            if !s.evidence_refs.is_empty() {
                out.push_str(&format!("\n_Evidence: {}_\n", s.evidence_refs.join(", ")));
            }
        }

        if !self.citations.is_empty() {
            out.push_str("\n## Sources\n\n");
            for c in &self.citations {
                out.push_str(&format!("- {}\n", c));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_section_order() {
        let draft = DocumentDraft::new("Letter")
            .section(DraftSection::new("First", "a"))
            .section(DraftSection::new("Second", "b"));
        let headings: Vec<_> = draft.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["First", "Second"]);
        assert_eq!(draft.body_text(), "a\n\nb");
    }

    #[test]
    fn test_markdown_includes_warnings_and_sources() {
        let draft = DocumentDraft::new("Notice")
            .section(DraftSection::new("Facts", "It rained.").with_evidence(vec!["photo.jpg".into()]))
            .cite("Limitations Act, 2002")
            .warn("File within two years");
        let md = draft.to_markdown();
        assert!(md.starts_with("# Notice"));
        assert!(md.contains("> - File within two years"));
        assert!(md.contains("_Evidence: photo.jpg_"));
        assert!(md.contains("- Limitations Act, 2002"));
    }
}
