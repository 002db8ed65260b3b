//! Wayfinder Rust SDK
//!
//! Ties classification, routing, evidence and guidance together for one
//! matter at a time.
//!
//! # Example
//!
//! ```
//! use wayfinder_sdk::{MatterInput, Wayfinder};
//! use wayfinder_domain::Provenance;
//!
//! let engine = Wayfinder::ontario();
//! let mut matter = engine.open_matter(
//!     MatterInput::new("My landlord will not return my deposit").with_amount(1800.0),
//! );
//!
//! let forum = matter.route().unwrap();
//! assert_eq!(forum.primary.id, "ON-LTB");
//!
//! matter.add_evidence("lease.pdf", b"lease text", Provenance::Original, None);
//! let output = matter.generate_documents().unwrap();
//! assert!(!output.package.files.is_empty());
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod session;

pub use client::Wayfinder;
pub use error::SdkError;
pub use session::MatterSession;

pub use wayfinder_classifier::{ClassifierConfig, MatterInput};
pub use wayfinder_router::{AuthorityRegistry, RegistryConfig, RoutingConfig};
