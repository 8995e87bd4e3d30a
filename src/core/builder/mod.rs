pub mod director;
pub mod meal_builder;

// Re-export commonly used types
pub use director::{direct, MealDirector};
pub use meal_builder::{
    new_builder, BuilderState, HasDrinkMealBuilder, MealAssembly, MealBuilder, MealVariant,
    NoDrinkMealBuilder,
};
