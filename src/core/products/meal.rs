use super::food::{FoodItem, FoodKind};
use serde::{Deserialize, Serialize};

/// Composite product: an ordered list of food items
///
/// Items keep the order they were added in. The cost is folded over the
/// current items on every call, so it can never go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    items: Vec<FoodItem>,
}

impl Meal {
    /// Create an empty meal
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item. Duplicates and repeated kinds are allowed.
    pub fn add_item(&mut self, item: FoodItem) {
        self.items.push(item);
    }

    /// Total price of every item currently in the meal, 0 when empty
    ///
    /// Unit prices are widened to `u64` before summing, so the total cannot
    /// overflow for any meal that fits in memory.
    pub fn cost(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price())).sum()
    }

    /// Items in assembly order
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Item kinds in assembly order
    pub fn kinds(&self) -> Vec<FoodKind> {
        self.items.iter().map(FoodItem::kind).collect()
    }

    /// Number of items of the given kind
    pub fn count_of(&self, kind: FoodKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    pub fn has_drink(&self) -> bool {
        self.items.iter().any(|item| item.kind().is_drink())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<FoodItem> for Meal {
    fn extend<I: IntoIterator<Item = FoodItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
