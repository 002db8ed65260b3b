//! Built-in domain modules

mod employment;
mod insurance;
mod landlord_tenant;
mod ocpp;
mod tree_damage;

pub use employment::{EmploymentLawRouterModule, EmploymentPath, ESA_CLAIM_LIMIT};
pub use insurance::InsuranceModule;
pub use landlord_tenant::LandlordTenantModule;
pub use ocpp::OcppFilingModule;
pub use tree_damage::{TreeDamageClassifierModule, TreeOwnership};
