use crate::core::types::{ProductVariant, Region};
use serde::{Deserialize, Serialize};

/// Product of a factory-method creator, tagged with the region that made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionalProduct {
    region: Region,
    variant: ProductVariant,
}

impl RegionalProduct {
    pub(crate) fn new(region: Region, variant: ProductVariant) -> Self {
        Self { region, variant }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn variant(&self) -> ProductVariant {
        self.variant
    }

    /// Product code such as `NS_A`
    pub fn code(&self) -> String {
        format!("{}_{}", self.region.key(), self.variant.key())
    }

    /// Run the product's production step and describe it
    pub fn produce(&self) -> String {
        format!("produce {}", self.code())
    }
}

impl std::fmt::Display for RegionalProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
