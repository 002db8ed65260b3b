//! CanLII client
//!
//! The CanLII API has no free-text search, so `search` always fails. Case
//! fetches pass the access check and return fixed metadata; there is no
//! network call.

use crate::{AccessPurpose, SourceAccessController, SourceError};
use serde::Serialize;
use tracing::info;

/// Source id used in access policies
pub const CANLII_SOURCE: &str = "canlii";

/// Metadata for one decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseMetadata {
    /// CanLII database id (e.g., "onltb")
    pub database_id: String,
    /// Case id within the database
    pub case_id: String,
    /// Style of cause
    pub title: String,
    /// Neutral citation
    pub citation: String,
    /// Decision date (ISO 8601)
    pub decision_date: String,
    /// Public URL
    pub url: String,
    /// Language code
    pub language: String,
}

/// Stub client for the CanLII API
#[derive(Debug, Clone)]
pub struct CanLiiClient {
    base_url: String,
}

impl Default for CanLiiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CanLiiClient {
    /// Create a client for the public CanLII site
    pub fn new() -> Self {
        Self::with_base_url("https://www.canlii.org")
    }

    /// Create a client with a different base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Free-text search; always `SourceError::NoSearch`
    pub fn search(&self, query: &str) -> Result<Vec<CaseMetadata>, SourceError> {
        info!(query, "CanLII search requested");
        Err(SourceError::NoSearch)
    }

    /// Fetch metadata for a known case
    pub fn fetch_case(
        &self,
        access: &mut SourceAccessController,
        database_id: &str,
        case_id: &str,
    ) -> Result<CaseMetadata, SourceError> {
        let decision = access.check(CANLII_SOURCE, AccessPurpose::MetadataFetch);
        if !decision.ok {
            return Err(SourceError::AccessDenied(
                decision.reason.unwrap_or_else(|| CANLII_SOURCE.to_string()),
            ));
        }
        if database_id.trim().is_empty() || case_id.trim().is_empty() {
            return Err(SourceError::InvalidRequest(
                "database and case id are required".to_string(),
            ));
        }

        Ok(CaseMetadata {
            database_id: database_id.to_string(),
            case_id: case_id.to_string(),
            title: "Sample v. Example".to_string(),
            citation: format!("2023 {} 1", database_id.to_uppercase()),
            decision_date: "2023-01-15".to_string(),
            url: format!("{}/en/on/{}/doc/{}", self.base_url, database_id, case_id),
            language: "en".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourcePolicy;

    #[test]
    fn test_search_always_fails() {
        let client = CanLiiClient::new();
        let err = client.search("wrongful dismissal").unwrap_err();
        assert!(matches!(err, SourceError::NoSearch));
        assert_eq!(err.code(), "CanLII_API_NO_SEARCH");
    }

    #[test]
    fn test_fetch_case() {
        let client = CanLiiClient::new();
        let mut access = SourceAccessController::with_defaults();

        let case = client.fetch_case(&mut access, "onltb", "2023onltb123").unwrap();
        assert_eq!(case.case_id, "2023onltb123");
        assert_eq!(case.url, "https://www.canlii.org/en/on/onltb/doc/2023onltb123");
        assert_eq!(access.log().len(), 1);
    }

    #[test]
    fn test_fetch_denied_without_policy() {
        let client = CanLiiClient::with_base_url("http://localhost/");
        let mut access = SourceAccessController::new();

        let err = client.fetch_case(&mut access, "onltb", "x").unwrap_err();
        assert!(matches!(err, SourceError::AccessDenied(_)));
        assert_eq!(err.code(), "SOURCE_ACCESS_DENIED");
        assert!(!access.log()[0].decision.ok);
    }

    #[test]
    fn test_fetch_requires_ids() {
        let client = CanLiiClient::new();
        let mut access = SourceAccessController::new();
        access.set_policy(CANLII_SOURCE, SourcePolicy::allowing(&[AccessPurpose::MetadataFetch]));

        let err = client.fetch_case(&mut access, " ", "x").unwrap_err();
        assert!(matches!(err, SourceError::InvalidRequest(_)));
    }
}
