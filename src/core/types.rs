use super::errors::CreationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Variant discriminator shared by the simple and factory-method creators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductVariant {
    A,
    B,
}

impl ProductVariant {
    /// All variants, in key order
    pub const ALL: [ProductVariant; 2] = [ProductVariant::A, ProductVariant::B];

    /// The string key callers use to request this variant
    pub fn key(&self) -> &'static str {
        match self {
            ProductVariant::A => "A",
            ProductVariant::B => "B",
        }
    }
}

impl FromStr for ProductVariant {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(ProductVariant::A),
            "B" => Ok(ProductVariant::B),
            other => Err(CreationError::unknown_variant("ProductVariant", other)),
        }
    }
}

impl std::fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Product family region for the factory-method creators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Ns,
    Ch,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Ns, Region::Ch];

    pub fn key(&self) -> &'static str {
        match self {
            Region::Ns => "NS",
            Region::Ch => "CH",
        }
    }
}

impl FromStr for Region {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NS" => Ok(Region::Ns),
            "CH" => Ok(Region::Ch),
            other => Err(CreationError::unknown_variant("Region", other)),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Family of co-varying peripherals produced by one abstract factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeripheralFamily {
    Office,
    Game,
}

impl PeripheralFamily {
    pub fn key(&self) -> &'static str {
        match self {
            PeripheralFamily::Office => "office",
            PeripheralFamily::Game => "game",
        }
    }
}

impl FromStr for PeripheralFamily {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(PeripheralFamily::Office),
            "game" => Ok(PeripheralFamily::Game),
            other => Err(CreationError::unknown_variant("PeripheralFamily", other)),
        }
    }
}

impl std::fmt::Display for PeripheralFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
