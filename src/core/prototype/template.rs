use super::record::{AttributeBag, Record};
use super::Prototype;
use crate::core::errors::CreationError;
use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};

/// Prototype backed by a template populated once
///
/// The loader does the expensive preparation (fetching the data a product
/// starts from) exactly once, when the prototype is built. Every request after
/// that copies the cached template into a new record.
#[derive(Debug)]
pub struct TemplatePrototype {
    name: String,
    template: AttributeBag,
    /// Number of records copied out of the template
    issued: AtomicU64,
}

impl TemplatePrototype {
    /// Build a prototype from an already prepared template
    pub fn new(name: &str, template: AttributeBag) -> Self {
        Self {
            name: name.to_string(),
            template,
            issued: AtomicU64::new(0),
        }
    }

    /// Run `loader` once to populate the template
    pub fn from_loader<F>(name: &str, loader: F) -> Result<Self, CreationError>
    where
        F: FnOnce() -> Result<AttributeBag, CreationError>,
    {
        let template = loader()?;
        info!(
            "[TemplatePrototype:{}] template loaded with {} attributes",
            name,
            template.len()
        );
        Ok(Self::new(name, template))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &AttributeBag {
        &self.template
    }

    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl Prototype for TemplatePrototype {
    fn clone_product(&self) -> Record {
        let count = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("[TemplatePrototype:{}] issuing copy #{}", self.name, count);
        Record::new(self.template.clone())
    }
}
