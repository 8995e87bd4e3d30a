use super::registry::CreatorRegistry;
use super::traits::Creator;
use crate::core::errors::CreationError;
use crate::core::products::SimpleProduct;
use crate::core::types::ProductVariant;
use log::debug;

/// Single concrete creator that switches on a string discriminator
///
/// `"A"` yields `SimpleProduct::A`, `"B"` yields `SimpleProduct::B`. Each key
/// maps to exactly one product; adding a product means editing this match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFactory;

impl SimpleFactory {
    pub const NAME: &'static str = "SimpleFactory";

    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, discriminator: &str) -> Result<SimpleProduct, CreationError> {
        create_product(discriminator)
    }
}

impl Creator for SimpleFactory {
    type Product = SimpleProduct;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, discriminator: &str) -> Result<SimpleProduct, CreationError> {
        SimpleFactory::create(self, discriminator)
    }
}

/// Static form of the simple factory, usable without a factory value
pub fn create_product(discriminator: &str) -> Result<SimpleProduct, CreationError> {
    let variant: ProductVariant = discriminator
        .parse()
        .map_err(|_| CreationError::unknown_variant(SimpleFactory::NAME, discriminator))?;

    debug!("[{}] creating product {}", SimpleFactory::NAME, variant);
    Ok(match variant {
        ProductVariant::A => SimpleProduct::a(),
        ProductVariant::B => SimpleProduct::b(),
    })
}

/// Registry holding every simple product under its variant key
pub fn default_registry() -> Result<CreatorRegistry<SimpleProduct>, CreationError> {
    crate::creator_registry!(SimpleFactory::NAME, {
        ProductVariant::A.key() => SimpleProduct::a,
        ProductVariant::B.key() => SimpleProduct::b,
    })
}
