use super::traits::Creator;
use crate::core::config::CatalogueConfig;
use crate::core::errors::CreationError;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

type Constructor<P> = Box<dyn Fn() -> Result<P, CreationError> + Send + Sync>;

/// Maps discriminator keys to product constructors
///
/// Keys are validated when they are registered, so a lookup either finds
/// exactly one constructor or fails with `UnknownVariant`.
pub struct CreatorRegistry<P> {
    /// Registry name used in logs and errors
    name: String,
    /// Constructors by discriminator
    constructors: HashMap<String, Constructor<P>>,
    /// Counter of successfully created products
    created: AtomicU64,
}

impl<P> CreatorRegistry<P> {
    /// Create an empty registry
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            constructors: HashMap::new(),
            created: AtomicU64::new(0),
        }
    }

    /// Register an infallible constructor under a discriminator
    pub fn register<F>(&mut self, discriminator: &str, constructor: F) -> Result<(), CreationError>
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: 'static,
    {
        self.register_fallible(discriminator, move || Ok(constructor()))
    }

    /// Register a constructor that may fail
    pub fn register_fallible<F>(
        &mut self,
        discriminator: &str,
        constructor: F,
    ) -> Result<(), CreationError>
    where
        F: Fn() -> Result<P, CreationError> + Send + Sync + 'static,
        P: 'static,
    {
        if self.constructors.contains_key(discriminator) {
            return Err(CreationError::DuplicateDiscriminator(discriminator.to_string()));
        }

        debug!("[{}] registered discriminator '{}'", self.name, discriminator);
        self.constructors
            .insert(discriminator.to_string(), Box::new(constructor));
        Ok(())
    }

    /// Create the product registered under `discriminator`
    pub fn create(&self, discriminator: &str) -> Result<P, CreationError> {
        let product = self.construct(discriminator)?;
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(product)
    }

    /// Run the constructor for `discriminator` without touching the counter
    fn construct(&self, discriminator: &str) -> Result<P, CreationError> {
        let constructor = self
            .constructors
            .get(discriminator)
            .ok_or_else(|| CreationError::unknown_variant(&self.name, discriminator))?;
        constructor()
    }

    /// Check if a discriminator is registered
    pub fn has_discriminator(&self, discriminator: &str) -> bool {
        self.constructors.contains_key(discriminator)
    }

    /// Registered discriminators, sorted
    pub fn discriminators(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Get statistics about the registry
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            registered: self.constructors.len(),
            created: self.created.load(Ordering::SeqCst),
        }
    }
}

impl<P: Send> CreatorRegistry<P> {
    /// Create one product per discriminator, preserving input order
    ///
    /// Runs on the calling thread or on a Rayon pool depending on `config`.
    /// Every discriminator is checked before any constructor runs, and the
    /// creation counter only moves once the whole batch has succeeded.
    pub fn create_batch(
        &self,
        discriminators: &[&str],
        config: &CatalogueConfig,
    ) -> Result<Vec<P>, CreationError> {
        if let Some(unknown) = discriminators
            .iter()
            .find(|key| !self.has_discriminator(key))
        {
            return Err(CreationError::unknown_variant(&self.name, unknown));
        }

        let products = if config.is_parallel() {
            info!(
                "[{}] creating batch of {} in parallel",
                self.name,
                discriminators.len()
            );
            let run = || {
                discriminators
                    .par_iter()
                    .map(|key| self.construct(key))
                    .collect::<Result<Vec<P>, CreationError>>()
            };

            match config.thread_pool_size {
                Some(size) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(size)
                        .build()
                        .map_err(|e| CreationError::ThreadPool(e.to_string()))?;
                    pool.install(run)?
                }
                None => run()?,
            }
        } else {
            discriminators
                .iter()
                .map(|key| self.construct(key))
                .collect::<Result<Vec<P>, CreationError>>()?
        };

        self.created
            .fetch_add(products.len() as u64, Ordering::SeqCst);
        Ok(products)
    }
}

impl<P> Creator for CreatorRegistry<P> {
    type Product = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self, discriminator: &str) -> Result<P, CreationError> {
        CreatorRegistry::create(self, discriminator)
    }
}

/// Statistics about the registry state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub registered: usize,
    pub created: u64,
}
