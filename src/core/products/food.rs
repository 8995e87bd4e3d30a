use serde::{Deserialize, Serialize};

/// Kind tag for the items a meal is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Pizza,
    Chips,
    Cola,
}

impl FoodKind {
    /// Fixed unit price of this kind of item
    pub fn unit_price(&self) -> u32 {
        match self {
            FoodKind::Pizza => 10,
            FoodKind::Chips => 100,
            FoodKind::Cola => 1,
        }
    }

    /// Whether this item is served as the meal's drink
    pub fn is_drink(&self) -> bool {
        matches!(self, FoodKind::Cola)
    }
}

impl std::fmt::Display for FoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FoodKind::Pizza => "pizza",
            FoodKind::Chips => "chips",
            FoodKind::Cola => "cola",
        };
        write!(f, "{}", name)
    }
}

/// A single food item. The price is fixed when the item is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    kind: FoodKind,
    price: u32,
}

impl FoodItem {
    pub fn new(kind: FoodKind) -> Self {
        Self {
            kind,
            price: kind.unit_price(),
        }
    }

    pub fn pizza() -> Self {
        Self::new(FoodKind::Pizza)
    }

    pub fn chips() -> Self {
        Self::new(FoodKind::Chips)
    }

    pub fn cola() -> Self {
        Self::new(FoodKind::Cola)
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}
