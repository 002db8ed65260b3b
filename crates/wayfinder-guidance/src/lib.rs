//! Wayfinder Guidance
//!
//! Domain modules that turn a classified matter and its evidence into
//! guidance drafts, and the in-memory packaging of those drafts.
//!
//! # Modules
//!
//! - `InsuranceModule`: claim summary, complaint letter, escalation options
//! - `LandlordTenantModule`: LTB application overview and landlord letter
//! - `EmploymentLawRouterModule`: Employment Standards claim vs. court action
//! - `OcppFilingModule`: Consumer Protection Ontario complaint
//! - `TreeDamageClassifierModule`: municipal, neighbour or own tree
//!
//! # Examples
//!
//! ```
//! use wayfinder_classifier::{MatterClassifier, MatterInput};
//! use wayfinder_guidance::{DomainModuleRegistry, ModuleInput};
//!
//! let classification = MatterClassifier::default()
//!     .classify(&MatterInput::new("My landlord will not fix the heat"));
//! let registry = DomainModuleRegistry::with_defaults();
//! let output = registry.generate(&ModuleInput::new(&classification, &[])).unwrap();
//! assert!(!output.drafts.is_empty());
//! ```

#![warn(missing_docs)]

mod error;
pub mod module;
pub mod modules;
mod package;
mod registry;

pub use error::GuidanceError;
pub use module::{evidence_refs, format_amount, format_date, DomainModule, ModuleInput, ModuleOutput};
pub use modules::{
    EmploymentLawRouterModule, EmploymentPath, InsuranceModule, LandlordTenantModule,
    OcppFilingModule, TreeDamageClassifierModule, TreeOwnership, ESA_CLAIM_LIMIT,
};
pub use package::{DocumentPackage, PackageFile};
pub use registry::DomainModuleRegistry;
