//! Wayfinder Router
//!
//! Authority registry, forum routing and journey progress.
//!
//! # Example
//!
//! ```
//! use wayfinder_domain::{Domain, Jurisdiction};
//! use wayfinder_router::{AuthorityRegistry, ForumRouter, RouteInput, RoutingConfig};
//!
//! let registry = AuthorityRegistry::ontario_defaults();
//! let config = RoutingConfig::default();
//! let router = ForumRouter::new(&registry, &config);
//!
//! let map = router
//!     .route(&RouteInput::new(Domain::LandlordTenant, Jurisdiction::Ontario).with_amount(50_000.0))
//!     .unwrap();
//! assert_eq!(map.primary.id, "ON-LTB");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod forum;
pub mod journey;
pub mod registry;

pub use config::{AuthorityConfig, ConfigError, RegistryConfig, RoutingConfig};
pub use forum::{ForumRouter, RouteInput};
pub use journey::{JourneyContext, JourneyProgress, JourneyStage, JourneyStep, JourneyTracker};
pub use registry::{AuthorityRegistry, RegistryError};

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The selected forum is not in the registry
    #[error("Authority unavailable: {0}")]
    AuthorityUnavailable(String),
}
