pub mod abstract_factory;
pub mod method;
pub mod registry;
pub mod simple;
pub mod traits;

// Re-export commonly used types
pub use abstract_factory::{peripheral_factory, GameFactory, OfficeFactory, PeripheralSet};
pub use method::{creator_for_region, ChFactory, NsFactory};
pub use registry::{CreatorRegistry, RegistryStats};
pub use simple::{create_product, default_registry, SimpleFactory};
pub use traits::{Creator, PeripheralFactory};
