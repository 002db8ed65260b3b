//! Registry of domain modules

use crate::modules::{
    EmploymentLawRouterModule, InsuranceModule, LandlordTenantModule, OcppFilingModule,
    TreeDamageClassifierModule,
};
use crate::{DomainModule, GuidanceError, ModuleInput, ModuleOutput};
use tracing::debug;
use wayfinder_domain::Domain;

/// Domain modules in registration order
#[derive(Default)]
pub struct DomainModuleRegistry {
    modules: Vec<Box<dyn DomainModule>>,
}

impl DomainModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the five built-in modules
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(InsuranceModule));
        registry.register(Box::new(LandlordTenantModule));
        registry.register(Box::new(EmploymentLawRouterModule));
        registry.register(Box::new(OcppFilingModule));
        registry.register(Box::new(TreeDamageClassifierModule));
        registry
    }

    /// Register a module, replacing any module with the same id
    pub fn register(&mut self, module: Box<dyn DomainModule>) {
        debug!(module = module.id(), "Registered domain module");
        match self.modules.iter().position(|m| m.id() == module.id()) {
            Some(pos) => self.modules[pos] = module,
            None => self.modules.push(module),
        }
    }

    /// First module that handles a domain
    pub fn for_domain(&self, domain: Domain) -> Option<&dyn DomainModule> {
        self.modules
            .iter()
            .find(|m| m.domains().contains(&domain))
            .map(|m| m.as_ref())
    }

    /// Module by id
    pub fn get(&self, id: &str) -> Option<&dyn DomainModule> {
        self.modules.iter().find(|m| m.id() == id).map(|m| m.as_ref())
    }

    /// All modules in registration order
    pub fn list(&self) -> impl Iterator<Item = &dyn DomainModule> {
        self.modules.iter().map(|m| m.as_ref())
    }

    /// Run the module for the matter's domain
    pub fn generate(&self, input: &ModuleInput<'_>) -> Result<ModuleOutput, GuidanceError> {
        let domain = input.classification.domain;
        let module = self
            .for_domain(domain)
            .ok_or(GuidanceError::NoModuleForDomain(domain))?;
        Ok(module.generate(input))
    }

    /// Run a module chosen by id
    pub fn generate_with(
        &self,
        id: &str,
        input: &ModuleInput<'_>,
    ) -> Result<ModuleOutput, GuidanceError> {
        let module = self
            .get(id)
            .ok_or_else(|| GuidanceError::ModuleNotFound(id.to_string()))?;
        Ok(module.generate(input))
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no modules are registered
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
