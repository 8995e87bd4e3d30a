use crate::core::types::ProductVariant;
use serde::{Deserialize, Serialize};

/// Product handed out by the simple factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleProduct {
    A,
    B,
}

impl SimpleProduct {
    pub fn a() -> Self {
        SimpleProduct::A
    }

    pub fn b() -> Self {
        SimpleProduct::B
    }

    pub fn variant(&self) -> ProductVariant {
        match self {
            SimpleProduct::A => ProductVariant::A,
            SimpleProduct::B => ProductVariant::B,
        }
    }
}

impl From<ProductVariant> for SimpleProduct {
    fn from(variant: ProductVariant) -> Self {
        match variant {
            ProductVariant::A => SimpleProduct::A,
            ProductVariant::B => SimpleProduct::B,
        }
    }
}
