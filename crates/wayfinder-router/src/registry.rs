//! Authority registry: the reference set of courts, tribunals and regulators.
//!
//! Seeded once at startup and treated as read-mostly. Updates overwrite the
//! stored record without any version check.

use crate::config::RegistryConfig;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};
use wayfinder_domain::{Authority, AuthorityLookup};

/// Registry error
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Authority not found
    #[error("Authority not found: {0}")]
    AuthorityNotFound(String),
}

/// In-memory map of authority records keyed by id
///
/// Records are listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AuthorityRegistry {
    authorities: Vec<Authority>,
    index: HashMap<String, usize>,
}

impl AuthorityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from configuration
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry = Self::new();
        for authority in config.authorities.iter().cloned() {
            registry.add(authority.into_authority());
        }
        info!("Seeded authority registry with {} records", registry.len());
        registry
    }

    /// Create a registry with the built-in Ontario reference data
    pub fn ontario_defaults() -> Self {
        Self::from_config(&RegistryConfig::ontario_defaults())
    }

    /// Add an authority, replacing any existing record with the same id
    pub fn add(&mut self, authority: Authority) {
        match self.index.get(&authority.id) {
            Some(&pos) => self.authorities[pos] = authority,
            None => {
                self.index.insert(authority.id.clone(), self.authorities.len());
                self.authorities.push(authority);
            }
        }
    }

    /// Overwrite an existing authority
    ///
    /// Fails if no record with the same id exists.
    pub fn update(&mut self, authority: Authority) -> Result<(), RegistryError> {
        let pos = *self
            .index
            .get(&authority.id)
            .ok_or_else(|| RegistryError::AuthorityNotFound(authority.id.clone()))?;

        info!(id = %authority.id, version = %authority.version, "Updated authority");
        self.authorities[pos] = authority;
        Ok(())
    }

    /// Get an authority by id
    pub fn get_by_id(&self, id: &str) -> Option<&Authority> {
        self.index.get(id).map(|&pos| &self.authorities[pos])
    }

    /// All authorities in insertion order
    pub fn list(&self) -> &[Authority] {
        &self.authorities
    }

    /// Whether an authority is due for review at `now` (Unix millis)
    ///
    /// True iff `now >= last_updated + cadence_days * 86_400_000`. Unknown ids
    /// are never due.
    pub fn needs_update(&self, id: &str, now: u64) -> bool {
        self.get_by_id(id).is_some_and(|a| a.is_due(now))
    }

    /// All authorities due for review at `now`
    pub fn stale(&self, now: u64) -> Vec<&Authority> {
        self.authorities.iter().filter(|a| a.is_due(now)).collect()
    }

    /// Escalation targets of an authority, resolved to records
    ///
    /// Ids that do not resolve are dropped; an unknown authority has no route.
    pub fn get_escalation_route(&self, id: &str) -> Vec<&Authority> {
        let Some(authority) = self.get_by_id(id) else {
            return Vec::new();
        };

        authority
            .escalation_routes
            .iter()
            .filter_map(|target| {
                let resolved = self.get_by_id(target);
                if resolved.is_none() {
                    warn!(from = %id, to = %target, "Dropping unresolvable escalation route");
                }
                resolved
            })
            .collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.authorities.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.authorities.is_empty()
    }
}

impl AuthorityLookup for AuthorityRegistry {
    fn authority(&self, id: &str) -> Option<&Authority> {
        self.get_by_id(id)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use wayfinder_domain::{AuthorityType, Jurisdiction, MILLIS_PER_DAY};

    proptest! {
        /// Property: needs_update is exactly `now >= updated + cadence days`
        #[test]
        fn test_needs_update_arithmetic(
            updated in 0u64..4_000_000_000_000,
            cadence in 0u32..3650,
            now in 0u64..5_000_000_000_000,
        ) {
            let mut registry = AuthorityRegistry::new();
            registry.add(
                Authority::new("A", "A", AuthorityType::Court, Jurisdiction::Ontario)
                    .with_review(updated, cadence),
            );
            let expected = now >= updated + u64::from(cadence) * MILLIS_PER_DAY;
            prop_assert_eq!(registry.needs_update("A", now), expected);
        }
    }
}
