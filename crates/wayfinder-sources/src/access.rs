//! Source access control: which external sources may be used for what

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, warn};

/// Why a source is being accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPurpose {
    /// Fetch metadata for a known case or statute
    MetadataFetch,
    /// Free-text search
    Search,
    /// Download full text
    FullText,
    /// Bulk download
    BulkDownload,
}

impl AccessPurpose {
    /// Get the purpose name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessPurpose::MetadataFetch => "metadata_fetch",
            AccessPurpose::Search => "search",
            AccessPurpose::FullText => "full_text",
            AccessPurpose::BulkDownload => "bulk_download",
        }
    }
}

impl fmt::Display for AccessPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed purposes for one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePolicy {
    /// Purposes this source may be used for
    pub allowed: BTreeSet<AccessPurpose>,

    /// Terms-of-use note shown when access is denied
    #[serde(default)]
    pub note: Option<String>,
}

impl SourcePolicy {
    /// Policy allowing the given purposes
    pub fn allowing(purposes: &[AccessPurpose]) -> Self {
        Self {
            allowed: purposes.iter().copied().collect(),
            note: None,
        }
    }

    /// Attach a terms-of-use note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    /// Whether access is allowed
    pub ok: bool,

    /// Reason for a denial
    pub reason: Option<String>,
}

impl AccessDecision {
    fn allow() -> Self {
        Self { ok: true, reason: None }
    }

    fn deny(reason: String) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
        }
    }
}

/// One logged access check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessLogEntry {
    /// Source id
    pub source: String,
    /// Purpose requested
    pub purpose: AccessPurpose,
    /// Decision made
    pub decision: AccessDecision,
}

/// Checks source access against per-source policies and logs every check
#[derive(Debug, Clone, Default)]
pub struct SourceAccessController {
    policies: HashMap<String, SourcePolicy>,
    log: Vec<AccessLogEntry>,
}

impl SourceAccessController {
    /// Controller with no policies; every check is denied
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with the built-in policies
    ///
    /// CanLII allows metadata fetches only. e-Laws allows metadata and full
    /// text.
    pub fn with_defaults() -> Self {
        let mut controller = Self::new();
        controller.set_policy(
            "canlii",
            SourcePolicy::allowing(&[AccessPurpose::MetadataFetch])
                .with_note("CanLII API terms allow metadata lookups of known cases only"),
        );
        controller.set_policy(
            "elaws",
            SourcePolicy::allowing(&[AccessPurpose::MetadataFetch, AccessPurpose::FullText]),
        );
        controller
    }

    /// Set or replace the policy for a source
    pub fn set_policy(&mut self, source: impl Into<String>, policy: SourcePolicy) {
        self.policies.insert(source.into(), policy);
    }

    /// Policy for a source, if any
    pub fn policy(&self, source: &str) -> Option<&SourcePolicy> {
        self.policies.get(source)
    }

    /// Check access and append the result to the log
    pub fn check(&mut self, source: &str, purpose: AccessPurpose) -> AccessDecision {
        let decision = match self.policies.get(source) {
            None => AccessDecision::deny(format!("No access policy for source '{source}'")),
            Some(policy) if policy.allowed.contains(&purpose) => AccessDecision::allow(),
            Some(policy) => {
                let mut reason = format!("Purpose '{purpose}' is not allowed for source '{source}'");
                if let Some(note) = &policy.note {
                    reason.push_str(&format!(": {note}"));
                }
                AccessDecision::deny(reason)
            }
        };

        match &decision.reason {
            Some(reason) => warn!(source, %purpose, reason = %reason, "Source access denied"),
            None => debug!(source, %purpose, "Source access allowed"),
        }

        self.log.push(AccessLogEntry {
            source: source.to_string(),
            purpose,
            decision: decision.clone(),
        });
        decision
    }

    /// Every check made so far, oldest first
    pub fn log(&self) -> &[AccessLogEntry] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_policy_denied() {
        let mut controller = SourceAccessController::new();
        let decision = controller.check("westlaw", AccessPurpose::Search);

        assert!(!decision.ok);
        assert!(decision.reason.unwrap().contains("No access policy"));
        assert_eq!(controller.log().len(), 1);
    }

    #[test]
    fn test_default_canlii_policy() {
        let mut controller = SourceAccessController::with_defaults();

        assert!(controller.check("canlii", AccessPurpose::MetadataFetch).ok);
        let denied = controller.check("canlii", AccessPurpose::Search);
        assert!(!denied.ok);
        assert!(denied.reason.unwrap().contains("metadata lookups"));
        assert!(controller.check("elaws", AccessPurpose::FullText).ok);
    }

    #[test]
    fn test_every_check_logged_in_order() {
        let mut controller = SourceAccessController::with_defaults();
        controller.check("canlii", AccessPurpose::MetadataFetch);
        controller.check("canlii", AccessPurpose::BulkDownload);
        controller.check("unknown", AccessPurpose::MetadataFetch);

        let log = controller.log();
        assert_eq!(log.len(), 3);
        assert!(log[0].decision.ok);
        assert!(!log[1].decision.ok);
        assert_eq!(log[2].source, "unknown");
    }

    #[test]
    fn test_set_policy_replaces() {
        let mut controller = SourceAccessController::with_defaults();
        controller.set_policy("canlii", SourcePolicy::allowing(&[AccessPurpose::Search]));

        assert!(controller.check("canlii", AccessPurpose::Search).ok);
        assert!(!controller.check("canlii", AccessPurpose::MetadataFetch).ok);
    }
}
