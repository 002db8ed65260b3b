//! Wayfinder Domain Layer
//!
//! This crate contains the value types shared by every other Wayfinder crate.
//! It carries no rules of its own: classification, routing and document
//! generation live in the crates that depend on it.
//!
//! ## Key Concepts
//!
//! - **Pillar**: coarse legal-system category (criminal, civil, administrative,
//!   quasi-criminal)
//! - **Matter**: a user's legal situation, classified into a domain and pillar
//! - **Authority**: a court, tribunal or regulator that can hear a matter
//! - **Forum map**: the routing decision for one matter
//! - **Evidence item**: an indexed, hashed piece of evidence
//! - **Document draft**: generated guidance, section by section
//!
//! ## Architecture
//!
//! - Only primitive crates (uuid, chrono, serde) as dependencies
//! - Trait definitions for lookups other layers provide

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authority;
pub mod document;
pub mod evidence;
pub mod matter;
pub mod pillar;
pub mod traits;

// Re-exports for convenience
pub use authority::{Authority, AuthorityType, ForumMap};
pub use document::{DocumentDraft, DraftSection};
pub use evidence::{EvidenceId, EvidenceItem, EvidenceType, Provenance};
pub use matter::{
    Domain, Jurisdiction, KeyDate, MatterClassification, MatterId, MatterStatus, PartyType,
    UrgencyLevel,
};
pub use pillar::Pillar;
pub use traits::AuthorityLookup;

/// Milliseconds in one day, used for cadence arithmetic on Unix-millis timestamps.
pub const MILLIS_PER_DAY: u64 = 86_400_000;
