//! Wayfinder Evidence
//!
//! Evidence indexing, timelines and readability scoring for one matter.
//!
//! - [`EvidenceIndexer`] hashes content with SHA-256 and assigns a
//!   credibility score from provenance, format and date
//! - [`TimelineGenerator`] merges intake key dates with dated evidence
//! - [`ReadabilityScorer`] reports Flesch reading ease and grade level

#![warn(missing_docs)]

mod error;
pub mod indexer;
pub mod readability;
pub mod timeline;

pub use error::EvidenceError;
pub use indexer::{content_hash, credibility_score, EvidenceIndexer};
pub use readability::{ReadabilityBand, ReadabilityReport, ReadabilityScorer};
pub use timeline::{TimelineEvent, TimelineGenerator, TimelineSource};
