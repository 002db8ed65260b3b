//! Trait definitions for lookups provided by other layers

use crate::Authority;

/// Read access to authority records
///
/// Implemented by the registry (wayfinder-router) and by test fixtures.
pub trait AuthorityLookup {
    /// Get an authority by id
    fn authority(&self, id: &str) -> Option<&Authority>;

    /// Resolve a list of ids, silently dropping ids that do not resolve
    fn resolve_all(&self, ids: &[String]) -> Vec<Authority> {
        ids.iter()
            .filter_map(|id| self.authority(id))
            .cloned()
            .collect()
    }
}
