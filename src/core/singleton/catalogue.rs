use super::cell::Singleton;
use crate::core::builder::{MealDirector, MealVariant};
use crate::core::config::CatalogueConfig;
use crate::core::errors::CreationError;
use crate::core::factories::{default_registry, CreatorRegistry, RegistryStats};
use crate::core::products::{Meal, SimpleProduct};
use log::info;
use std::sync::Arc;

static CATALOGUE: Singleton<Catalogue> = Singleton::new();

/// The process-wide catalogue of creators
///
/// Bundles the simple-product registry, the meal director and the batch
/// configuration behind a single shared instance.
pub struct Catalogue {
    config: CatalogueConfig,
    products: CreatorRegistry<SimpleProduct>,
    director: MealDirector,
}

impl Catalogue {
    /// Build a standalone catalogue, outside the process-wide slot
    pub fn new(config: CatalogueConfig) -> Result<Self, CreationError> {
        Ok(Self {
            config,
            products: default_registry()?,
            director: MealDirector::new(),
        })
    }

    /// The shared catalogue, built with the default configuration on first use
    pub fn instance() -> Result<Arc<Catalogue>, CreationError> {
        CATALOGUE.get_or_try_init(|| {
            info!("[Catalogue] initializing process-wide catalogue");
            Catalogue::new(CatalogueConfig::default())
        })
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    /// Create a simple product by discriminator
    pub fn create(&self, discriminator: &str) -> Result<SimpleProduct, CreationError> {
        self.products.create(discriminator)
    }

    /// Create one simple product per discriminator, as configured
    pub fn create_batch(&self, discriminators: &[&str]) -> Result<Vec<SimpleProduct>, CreationError> {
        self.products.create_batch(discriminators, &self.config)
    }

    /// Assemble a meal of the given variant through the director
    pub fn assemble(&self, variant: MealVariant) -> Result<Meal, CreationError> {
        self.director.assemble(variant)
    }

    pub fn discriminators(&self) -> Vec<&str> {
        self.products.discriminators()
    }

    pub fn stats(&self) -> RegistryStats {
        self.products.stats()
    }
}

/// Fetch the process-wide catalogue
pub fn get_singleton() -> Result<Arc<Catalogue>, CreationError> {
    Catalogue::instance()
}
