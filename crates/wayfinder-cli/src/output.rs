//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::DateTime;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use wayfinder_domain::{Authority, EvidenceItem, ForumMap, MatterClassification};
use wayfinder_evidence::{ReadabilityReport, TimelineEvent};
use wayfinder_guidance::ModuleOutput;
use wayfinder_router::JourneyProgress;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a matter classification.
    pub fn format_classification(&self, c: &MatterClassification) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(c);
        }

        let pillars = c
            .pillars
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let parties = c
            .party_types
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let amount = c
            .dispute_amount
            .map(wayfinder_guidance::format_amount)
            .unwrap_or_else(|| "-".to_string());

        Ok(key_value_table(&[
            ("Matter", c.id.to_string()),
            ("Domain", c.domain.label().to_string()),
            ("Jurisdiction", c.jurisdiction.to_string()),
            ("Pillar", c.pillar.label().to_string()),
            ("Matched pillars", if pillars.is_empty() { "-".into() } else { pillars }),
            ("Ambiguous", c.pillar_ambiguous.to_string()),
            ("Parties", if parties.is_empty() { "-".into() } else { parties }),
            ("Urgency", c.urgency.as_str().to_string()),
            ("Amount", amount),
        ]))
    }

    /// Format a routing result.
    pub fn format_forum(&self, forum: &ForumMap) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(forum);
        }

        let mut builder = Builder::default();
        builder.push_record(["Role", "ID", "Name", "Type"]);
        builder.push_record([
            "primary",
            forum.primary.id.as_str(),
            forum.primary.name.as_str(),
            forum.primary.authority_type.as_str(),
        ]);
        for alt in &forum.alternatives {
            builder.push_record([
                "alternative",
                alt.id.as_str(),
                alt.name.as_str(),
                alt.authority_type.as_str(),
            ]);
        }
        for (i, step) in forum.escalation_chain.iter().enumerate() {
            let role = format!("escalation {}", i + 1);
            builder.push_record([
                role.as_str(),
                step.id.as_str(),
                step.name.as_str(),
                step.authority_type.as_str(),
            ]);
        }

        Ok(format!(
            "{}\n\n{}",
            styled(builder),
            self.colorize(&forum.rationale, "cyan")
        ))
    }

    /// Format a list of authorities.
    pub fn format_authorities(&self, authorities: &[&Authority]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(authorities);
        }
        if authorities.is_empty() {
            return Ok(self.colorize("No authorities found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Type", "Jurisdiction", "Reviewed", "Cadence"]);
        for a in authorities {
            let jurisdiction = a.jurisdiction.to_string();
            let cadence = format!("{} days", a.update_cadence_days);
            builder.push_record([
                a.id.as_str(),
                a.name.as_str(),
                a.authority_type.as_str(),
                jurisdiction.as_str(),
                review_date(a.last_updated).as_str(),
                cadence.as_str(),
            ]);
        }

        Ok(styled(builder))
    }

    /// Format one authority in detail.
    pub fn format_authority(&self, a: &Authority) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(a);
        }

        let routes = if a.escalation_routes.is_empty() {
            "-".to_string()
        } else {
            a.escalation_routes.join(" → ")
        };
        Ok(key_value_table(&[
            ("ID", a.id.clone()),
            ("Name", a.name.clone()),
            ("Type", a.authority_type.as_str().to_string()),
            ("Jurisdiction", a.jurisdiction.to_string()),
            ("Version", a.version.clone()),
            ("Last reviewed", review_date(a.last_updated)),
            ("Review due", review_date(a.due_at())),
            ("Escalation", routes),
            ("URL", a.url.clone().unwrap_or_else(|| "-".to_string())),
        ]))
    }

    /// Format indexed evidence.
    pub fn format_evidence(&self, items: &[EvidenceItem]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(items);
        }
        if items.is_empty() {
            return Ok(self.colorize("No evidence indexed.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Type", "Provenance", "Date", "Credibility", "SHA-256"]);
        for item in items {
            let date = item
                .date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            let credibility = format!("{:.2}", item.credibility());
            builder.push_record([
                item.filename(),
                item.evidence_type().as_str(),
                item.provenance().as_str(),
                date.as_str(),
                credibility.as_str(),
                &item.hash()[..12], // Truncate hash for readability
            ]);
        }

        Ok(styled(builder))
    }

    /// Format a readability report.
    pub fn format_readability(&self, report: &ReadabilityReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(report);
        }

        Ok(key_value_table(&[
            ("Words", report.words.to_string()),
            ("Sentences", report.sentences.to_string()),
            ("Syllables", report.syllables.to_string()),
            ("Reading ease", format!("{:.1}", report.flesch_reading_ease)),
            ("Grade level", format!("{:.1}", report.flesch_kincaid_grade)),
            ("Band", report.band.to_string()),
        ]))
    }

    /// Format journey progress.
    pub fn format_progress(&self, progress: &JourneyProgress) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(progress);
        }

        let mut builder = Builder::default();
        builder.push_record(["", "Stage", "Next step"]);
        for step in &progress.steps {
            let mark = if step.complete {
                "✓"
            } else if step.stage == progress.current_stage {
                "→"
            } else {
                " "
            };
            builder.push_record([mark, step.title.as_str(), step.next_step.as_str()]);
        }

        Ok(format!(
            "{}\n{}",
            styled(builder),
            self.info(&format!("{:.0}% complete", progress.percent_complete))
        ))
    }

    /// Format a timeline.
    pub fn format_timeline(&self, events: &[TimelineEvent]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(events);
        }
        if events.is_empty() {
            return Ok(self.colorize("No dated events.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Event"]);
        for event in events {
            builder.push_record([event.date.to_string(), event.label.clone()]);
        }
        Ok(styled(builder))
    }

    /// Format generated documents.
    ///
    /// Table mode prints the package index, per-file readability and any
    /// warnings; the drafts themselves are only included in JSON.
    pub fn format_documents(&self, output: &ModuleOutput) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(output);
        }

        let package = &output.package;
        let mut builder = Builder::default();
        builder.push_record(["File", "Title", "Grade", "Band"]);
        for file in &package.files {
            let grade = format!("{:.1}", file.readability.flesch_kincaid_grade);
            builder.push_record([
                file.filename.as_str(),
                file.title.as_str(),
                grade.as_str(),
                file.readability.band.label(),
            ]);
        }

        let mut out = format!("{}/\n{}", package.folder_name, styled(builder));
        for warning in &package.warnings {
            out.push('\n');
            out.push_str(&self.warning(warning));
        }
        Ok(out)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn key_value_table(rows: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, value) in rows {
        builder.push_record([*key, value.as_str()]);
    }
    styled(builder)
}

/// Render a Unix-millis review timestamp as a calendar date.
fn review_date(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_classifier::{MatterClassifier, MatterInput};
    use wayfinder_domain::{AuthorityType, Jurisdiction, Provenance};
    use wayfinder_evidence::{EvidenceIndexer, ReadabilityScorer};

    fn authority() -> Authority {
        Authority::new("ON-LTB", "Landlord and Tenant Board", AuthorityType::Tribunal, Jurisdiction::Ontario)
            .with_escalation(&["ON-DIVCOURT"])
            .with_review(1_704_067_200_000, 90)
    }

    #[test]
    fn test_classification_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let c = MatterClassifier::default().classify(&MatterInput::new("My landlord kept my deposit"));
        let output = formatter.format_classification(&c).unwrap();
        assert!(output.contains("Landlord and Tenant"));
        assert!(output.contains("Urgency"));
    }

    #[test]
    fn test_classification_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let c = MatterClassifier::default().classify(&MatterInput::new("insurance claim denied"));
        let output = formatter.format_classification(&c).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["domain"], "insurance");
    }

    #[test]
    fn test_authority_detail() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_authority(&authority()).unwrap();
        assert!(output.contains("ON-DIVCOURT"));
        assert!(output.contains("2024-01-01"));
    }

    #[test]
    fn test_empty_authorities() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_authorities(&[]).unwrap();
        assert!(output.contains("No authorities found"));
    }

    #[test]
    fn test_evidence_table_truncates_hash() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut indexer = EvidenceIndexer::new();
        let item = indexer.add_item("lease.pdf", b"lease", Provenance::Original, None);
        let output = formatter.format_evidence(indexer.items()).unwrap();
        assert!(output.contains("lease.pdf"));
        assert!(output.contains(&item.hash()[..12]));
        assert!(!output.contains(item.hash()));
    }

    #[test]
    fn test_readability_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let report = ReadabilityScorer::new().score("The cat sat. The dog ran.");
        let output = formatter.format_readability(&report).unwrap();
        assert!(output.contains("flesch_reading_ease"));
    }

    #[test]
    fn test_review_date_out_of_range() {
        assert_eq!(review_date(u64::MAX), "-");
        assert_eq!(review_date(0), "1970-01-01");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("late"), "⚠ late");
    }
}
