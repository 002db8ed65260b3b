//! The `DomainModule` trait and helpers shared by every module

use crate::DocumentPackage;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use wayfinder_domain::{DocumentDraft, Domain, EvidenceItem, MatterClassification};

/// What a module needs to build its drafts
#[derive(Debug, Clone, Copy)]
pub struct ModuleInput<'a> {
    /// The classified matter
    pub classification: &'a MatterClassification,

    /// Indexed evidence, in insertion order
    pub evidence: &'a [EvidenceItem],

    /// The user's own description, used by modules that pick templates by keyword
    pub description: &'a str,
}

impl<'a> ModuleInput<'a> {
    /// Create input without a description
    pub fn new(classification: &'a MatterClassification, evidence: &'a [EvidenceItem]) -> Self {
        Self {
            classification,
            evidence,
            description: "",
        }
    }

    /// Attach the user's description
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    /// Whether the description mentions any of the given phrases
    pub fn mentions(&self, phrases: &[&str]) -> bool {
        let lower = self.description.to_lowercase();
        phrases.iter().any(|p| lower.contains(p))
    }
}

/// Drafts plus their packaged rendering
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOutput {
    /// Generated drafts, in order
    pub drafts: Vec<DocumentDraft>,

    /// Markdown package for the drafts
    pub package: DocumentPackage,
}

/// A domain-specific guidance generator
///
/// Implementors provide the drafts; `generate` packages them.
pub trait DomainModule {
    /// Stable module identifier (e.g., "landlord-tenant")
    fn id(&self) -> &'static str;

    /// Display name
    fn name(&self) -> &'static str;

    /// Domains this module handles
    fn domains(&self) -> &'static [Domain];

    /// Build the drafts for one matter
    fn build_drafts(&self, input: &ModuleInput<'_>) -> Vec<DocumentDraft>;

    /// Build the drafts and package them
    fn generate(&self, input: &ModuleInput<'_>) -> ModuleOutput {
        let drafts = self.build_drafts(input);
        let package = DocumentPackage::assemble(self.id(), input.classification, &drafts);

        info!(
            module = self.id(),
            matter = %input.classification.id,
            drafts = drafts.len(),
            "Generated documents"
        );

        ModuleOutput { drafts, package }
    }
}

/// Evidence references for a draft section: the first evidence item only
pub fn evidence_refs(evidence: &[EvidenceItem]) -> Vec<String> {
    evidence
        .first()
        .map(|item| vec![item.filename().to_string()])
        .unwrap_or_default()
}

/// Dollar amount with thousands separators, e.g. `$12,500.00`
pub fn format_amount(amount: f64) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

/// Long-form date, e.g. `March 1, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Amount sentence used by several templates
pub(crate) fn amount_phrase(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("The amount in dispute is {}.", format_amount(a)),
        None => "You have not yet estimated the amount in dispute.".to_string(),
    }
}

/// Key-date sentence used by several templates
pub(crate) fn key_date_phrase(classification: &MatterClassification) -> String {
    match classification.earliest_key_date() {
        Some(k) => format!("The earliest date you recorded is {} ({}).", format_date(k.date), k.label),
        None => "Record the dates of each event as soon as you can.".to_string(),
    }
}
