#[macro_use]
pub mod macros;
pub mod core;

// Re-export commonly used types
pub use crate::core::builder::{direct, new_builder, MealBuilder, MealDirector, MealVariant};
pub use crate::core::config::{CatalogueConfig, ConcurrencyMode};
pub use crate::core::errors::CreationError;
pub use crate::core::factories::{create_product, Creator, CreatorRegistry, PeripheralFactory};
pub use crate::core::products::{FoodItem, FoodKind, Meal, SimpleProduct};
pub use crate::core::prototype::{Prototype, Record};
pub use crate::core::singleton::{get_singleton, Catalogue, Singleton};
