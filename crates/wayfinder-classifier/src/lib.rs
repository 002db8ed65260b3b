//! Wayfinder Classifier
//!
//! Rule-based classification of a user's legal situation.
//!
//! The classifier provides:
//! - Pillar detection (criminal, quasi-criminal, administrative, civil)
//!   by keyword containment
//! - Domain and jurisdiction resolution from hints
//! - Urgency derivation when the user gives none
//!
//! Classification never fails: unknown or malformed input falls through to
//! defaults (`Pillar::Unknown`, `Domain::Other`, Ontario).
//!
//! # Examples
//!
//! ```
//! use wayfinder_classifier::{MatterClassifier, MatterInput};
//! use wayfinder_domain::{Domain, Pillar};
//!
//! let classifier = MatterClassifier::default();
//! let matter = classifier.classify(
//!     &MatterInput::new("Slip and fall negligence at a supermarket causing injury"),
//! );
//! assert_eq!(matter.pillar, Pillar::Civil);
//! assert_eq!(matter.domain, Domain::CivilLitigation);
//! ```

#![warn(missing_docs)]

mod config;
mod matter;
mod pillar;

pub use config::ClassifierConfig;
pub use matter::{resolve_domain, resolve_jurisdiction, MatterClassifier, MatterInput};
pub use pillar::{PillarAssessment, PillarClassifier};
