//! The `Wayfinder` engine: shared reference data and services for every matter

use crate::{MatterSession, SdkError};
use std::path::Path;
use tracing::info;
use wayfinder_classifier::{ClassifierConfig, MatterClassifier, MatterInput};
use wayfinder_guidance::DomainModuleRegistry;
use wayfinder_router::{AuthorityRegistry, RegistryConfig, RoutingConfig};
use wayfinder_sources::{CanLiiClient, CaseMetadata, SourceAccessController};

/// Engine holding the authority registry, classifier and guidance modules
///
/// Matters are handled through [`MatterSession`]s opened from here.
pub struct Wayfinder {
    registry: AuthorityRegistry,
    routing: RoutingConfig,
    classifier: MatterClassifier,
    modules: DomainModuleRegistry,
    access: SourceAccessController,
    canlii: CanLiiClient,
}

impl Wayfinder {
    /// Create an engine from its parts
    pub fn new(
        registry: AuthorityRegistry,
        routing: RoutingConfig,
        classifier_config: ClassifierConfig,
    ) -> Self {
        info!(
            authorities = registry.len(),
            small_claims_limit = routing.small_claims_limit,
            "Initialized Wayfinder"
        );
        Self {
            registry,
            routing,
            classifier: MatterClassifier::new(classifier_config),
            modules: DomainModuleRegistry::with_defaults(),
            access: SourceAccessController::with_defaults(),
            canlii: CanLiiClient::new(),
        }
    }

    /// Engine with the built-in Ontario registry and default keyword lists
    pub fn ontario() -> Self {
        let config = RegistryConfig::ontario_defaults();
        Self::new(
            AuthorityRegistry::from_config(&config),
            config.routing,
            ClassifierConfig::default(),
        )
    }

    /// Engine with a registry loaded from a TOML file
    pub fn from_registry_file(
        path: impl AsRef<Path>,
        classifier_config: ClassifierConfig,
    ) -> Result<Self, SdkError> {
        let config = RegistryConfig::from_file(path)?;
        Ok(Self::new(
            AuthorityRegistry::from_config(&config),
            config.routing,
            classifier_config,
        ))
    }

    /// Classify a new matter and open a session for it
    pub fn open_matter(&self, input: MatterInput) -> MatterSession<'_> {
        MatterSession::open(self, input)
    }

    /// Fetch case metadata from CanLII, subject to source policy
    pub fn lookup_case(&mut self, database_id: &str, case_id: &str) -> Result<CaseMetadata, SdkError> {
        Ok(self.canlii.fetch_case(&mut self.access, database_id, case_id)?)
    }

    /// Free-text case search; CanLII does not support it
    pub fn search_cases(&self, query: &str) -> Result<Vec<CaseMetadata>, SdkError> {
        Ok(self.canlii.search(query)?)
    }

    /// Authority registry
    pub fn registry(&self) -> &AuthorityRegistry {
        &self.registry
    }

    /// Authority registry, for updates
    pub fn registry_mut(&mut self) -> &mut AuthorityRegistry {
        &mut self.registry
    }

    /// Routing thresholds
    pub fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    /// Matter classifier
    pub fn classifier(&self) -> &MatterClassifier {
        &self.classifier
    }

    /// Guidance modules
    pub fn modules(&self) -> &DomainModuleRegistry {
        &self.modules
    }

    /// Guidance modules, for registering custom modules
    pub fn modules_mut(&mut self) -> &mut DomainModuleRegistry {
        &mut self.modules
    }

    /// Source access controller and its log
    pub fn access(&self) -> &SourceAccessController {
        &self.access
    }
}

impl Default for Wayfinder {
    fn default() -> Self {
        Self::ontario()
    }
}
