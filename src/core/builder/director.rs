use super::meal_builder::{new_builder, MealBuilder, MealVariant};
use crate::core::errors::CreationError;
use crate::core::products::Meal;
use log::debug;

/// Assembly policy: the fixed order in which build steps run
///
/// The director owns no meal and keeps no state. It borrows a builder for one
/// sequence, `build_food`, `build_drink`, `get_result`, whatever the builder is.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealDirector;

impl MealDirector {
    pub fn new() -> Self {
        Self
    }

    /// Run the assembly sequence against `builder` and return its meal
    pub fn direct(&self, builder: &mut dyn MealBuilder) -> Result<Meal, CreationError> {
        builder.build_food()?;
        builder.build_drink()?;
        let meal = builder.get_result()?;

        debug!(
            "[MealDirector] assembled meal of {} items costing {}",
            meal.len(),
            meal.cost()
        );
        Ok(meal)
    }

    /// Assemble a meal with a fresh builder for `variant`
    pub fn assemble(&self, variant: MealVariant) -> Result<Meal, CreationError> {
        let mut builder = new_builder(variant);
        self.direct(builder.as_mut())
    }
}

/// Free-function form of `MealDirector::direct`
pub fn direct(director: &MealDirector, builder: &mut dyn MealBuilder) -> Result<Meal, CreationError> {
    director.direct(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::meal_builder::{BuilderState, HasDrinkMealBuilder, NoDrinkMealBuilder};

    #[test]
    fn test_meal_costs_by_builder() {
        let director = MealDirector::new();

        let no_drink = director.direct(&mut NoDrinkMealBuilder::new()).unwrap();
        let has_drink = director.direct(&mut HasDrinkMealBuilder::new()).unwrap();

        assert_eq!(no_drink.cost(), 110);
        assert!(!no_drink.has_drink());
        assert_eq!(has_drink.cost(), 111);
        assert!(has_drink.has_drink());
    }

    #[test]
    fn test_directing_a_spent_builder_fails() {
        let director = MealDirector::new();
        let mut builder = HasDrinkMealBuilder::new();
        direct(&director, &mut builder).unwrap();

        assert_eq!(builder.state(), BuilderState::Finalized);
        assert!(direct(&director, &mut builder).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_assemble_by_variant() {
        let director = MealDirector::new();
        assert_eq!(director.assemble(MealVariant::NoDrink).unwrap().cost(), 110);
        assert_eq!(director.assemble(MealVariant::HasDrink).unwrap().cost(), 111);
    }
}
