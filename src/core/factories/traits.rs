use crate::core::errors::CreationError;
use crate::core::products::{Keyboard, Mouse};
use crate::core::types::PeripheralFamily;

/// Creation capability keyed by a discriminator
///
/// Callers depend on this trait only, never on the concrete product
/// constructors. A new product family is added by implementing it for a new
/// creator rather than by editing an existing dispatch.
pub trait Creator: Send + Sync {
    type Product;

    /// Name used in logs and in `UnknownVariant` errors
    fn name(&self) -> &str;

    /// Create the product mapped to `discriminator`
    ///
    /// Fails with `CreationError::UnknownVariant` when nothing is mapped to it.
    fn create(&self, discriminator: &str) -> Result<Self::Product, CreationError>;
}

/// Abstract factory for a matched keyboard and mouse
///
/// One implementation always yields parts of the same family, so a client
/// holding a single factory can never mix an office keyboard with a game mouse.
pub trait PeripheralFactory: Send + Sync {
    fn family(&self) -> PeripheralFamily;

    fn keyboard(&self) -> Box<dyn Keyboard>;

    fn mouse(&self) -> Box<dyn Mouse>;
}
