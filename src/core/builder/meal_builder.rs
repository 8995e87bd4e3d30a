use crate::core::errors::CreationError;
use crate::core::products::{FoodItem, Meal};
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle of a builder: `Empty -> Assembling -> Finalized`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderState {
    /// Holds a fresh meal, no step has run yet
    Empty,
    /// At least one build step has run
    Assembling,
    /// The meal has been handed out; the builder is spent
    Finalized,
}

impl std::fmt::Display for BuilderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuilderState::Empty => "Empty",
            BuilderState::Assembling => "Assembling",
            BuilderState::Finalized => "Finalized",
        };
        write!(f, "{}", name)
    }
}

/// Incremental assembly of one meal
///
/// Each step decides what goes into the meal; the order of the steps belongs
/// to the director. Not safe for concurrent mutation of one builder.
pub trait MealBuilder: Send {
    /// Add the food part of the meal
    fn build_food(&mut self) -> Result<(), CreationError>;

    /// Add the drink part of the meal, if this builder serves one
    fn build_drink(&mut self) -> Result<(), CreationError>;

    /// Hand the assembled meal out and finalize the builder
    ///
    /// Fails with `InvalidState` once the builder is finalized.
    fn get_result(&mut self) -> Result<Meal, CreationError>;

    fn state(&self) -> BuilderState;
}

/// The in-progress meal owned by a builder, with its lifecycle state
#[derive(Debug)]
pub struct MealAssembly {
    meal: Option<Meal>,
    state: BuilderState,
}

impl MealAssembly {
    pub fn new() -> Self {
        Self {
            meal: Some(Meal::new()),
            state: BuilderState::Empty,
        }
    }

    /// Append items as part of `operation`
    pub fn add_items<I>(&mut self, operation: &'static str, items: I) -> Result<(), CreationError>
    where
        I: IntoIterator<Item = FoodItem>,
    {
        let state = self.state;
        let meal = self
            .meal
            .as_mut()
            .ok_or_else(|| CreationError::invalid_state(operation, state))?;

        meal.extend(items);
        self.state = BuilderState::Assembling;
        Ok(())
    }

    /// Move the meal out, leaving the assembly finalized
    pub fn finish(&mut self) -> Result<Meal, CreationError> {
        let meal = self
            .meal
            .take()
            .ok_or_else(|| CreationError::invalid_state("get_result", self.state))?;

        self.state = BuilderState::Finalized;
        debug!("[MealAssembly] finalized meal of {} items", meal.len());
        Ok(meal)
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// The meal as assembled so far, if not yet handed out
    pub fn peek(&self) -> Option<&Meal> {
        self.meal.as_ref()
    }
}

impl Default for MealAssembly {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds pizza and chips, without a drink
#[derive(Debug, Default)]
pub struct NoDrinkMealBuilder {
    assembly: MealAssembly,
}

impl NoDrinkMealBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for NoDrinkMealBuilder {
    fn build_food(&mut self) -> Result<(), CreationError> {
        self.assembly
            .add_items("build_food", [FoodItem::pizza(), FoodItem::chips()])
    }

    fn build_drink(&mut self) -> Result<(), CreationError> {
        self.assembly
            .add_items("build_drink", std::iter::empty::<FoodItem>())
    }

    fn get_result(&mut self) -> Result<Meal, CreationError> {
        self.assembly.finish()
    }

    fn state(&self) -> BuilderState {
        self.assembly.state()
    }
}

/// Builds pizza and chips, then a cola
#[derive(Debug, Default)]
pub struct HasDrinkMealBuilder {
    assembly: MealAssembly,
}

impl HasDrinkMealBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for HasDrinkMealBuilder {
    fn build_food(&mut self) -> Result<(), CreationError> {
        self.assembly
            .add_items("build_food", [FoodItem::pizza(), FoodItem::chips()])
    }

    fn build_drink(&mut self) -> Result<(), CreationError> {
        self.assembly.add_items("build_drink", [FoodItem::cola()])
    }

    fn get_result(&mut self) -> Result<Meal, CreationError> {
        self.assembly.finish()
    }

    fn state(&self) -> BuilderState {
        self.assembly.state()
    }
}

/// Which meal builder to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealVariant {
    NoDrink,
    HasDrink,
}

impl MealVariant {
    pub fn key(&self) -> &'static str {
        match self {
            MealVariant::NoDrink => "no-drink",
            MealVariant::HasDrink => "has-drink",
        }
    }
}

impl FromStr for MealVariant {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-drink" => Ok(MealVariant::NoDrink),
            "has-drink" => Ok(MealVariant::HasDrink),
            other => Err(CreationError::unknown_variant("MealVariant", other)),
        }
    }
}

/// Construct an empty builder for the given meal variant
pub fn new_builder(variant: MealVariant) -> Box<dyn MealBuilder> {
    match variant {
        MealVariant::NoDrink => Box::new(NoDrinkMealBuilder::new()),
        MealVariant::HasDrink => Box::new(HasDrinkMealBuilder::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::products::FoodKind;

    #[test]
    fn test_state_transitions() {
        let mut builder = HasDrinkMealBuilder::new();
        assert_eq!(builder.state(), BuilderState::Empty);

        builder.build_food().unwrap();
        assert_eq!(builder.state(), BuilderState::Assembling);
        builder.build_drink().unwrap();
        assert_eq!(builder.state(), BuilderState::Assembling);

        let meal = builder.get_result().unwrap();
        assert_eq!(builder.state(), BuilderState::Finalized);
        assert_eq!(
            meal.kinds(),
            vec![FoodKind::Pizza, FoodKind::Chips, FoodKind::Cola]
        );
    }

    #[test]
    fn test_finalized_builder_rejects_everything() {
        let mut builder = NoDrinkMealBuilder::new();
        builder.build_food().unwrap();
        builder.get_result().unwrap();

        assert_eq!(
            builder.get_result().unwrap_err(),
            CreationError::invalid_state("get_result", "Finalized")
        );
        assert!(builder.build_food().unwrap_err().is_invalid_state());
        assert!(builder.build_drink().unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_result_of_untouched_builder_is_empty() {
        let mut builder = new_builder(MealVariant::HasDrink);
        let meal = builder.get_result().unwrap();
        assert!(meal.is_empty());
        assert_eq!(meal.cost(), 0);
    }

    #[test]
    fn test_repeated_steps_append_again() {
        let mut assembly = MealAssembly::new();
        assembly.add_items("build_food", [FoodItem::pizza()]).unwrap();
        assembly.add_items("build_food", [FoodItem::pizza()]).unwrap();
        assert_eq!(assembly.peek().map(Meal::cost), Some(20));
    }

    #[test]
    fn test_variant_keys() {
        assert_eq!("no-drink".parse::<MealVariant>(), Ok(MealVariant::NoDrink));
        assert_eq!(MealVariant::HasDrink.key(), "has-drink");
        assert!("large".parse::<MealVariant>().unwrap_err().is_unknown_variant());
    }
}
