use super::traits::Creator;
use crate::core::errors::CreationError;
use crate::core::products::RegionalProduct;
use crate::core::types::{ProductVariant, Region};
use log::debug;

/// Factory-method creator for the NS product family
#[derive(Debug, Clone, Copy, Default)]
pub struct NsFactory;

/// Factory-method creator for the CH product family
#[derive(Debug, Clone, Copy, Default)]
pub struct ChFactory;

impl Creator for NsFactory {
    type Product = RegionalProduct;

    fn name(&self) -> &str {
        "NsFactory"
    }

    fn create(&self, discriminator: &str) -> Result<RegionalProduct, CreationError> {
        let product = match discriminator.parse() {
            Ok(ProductVariant::A) => RegionalProduct::new(Region::Ns, ProductVariant::A),
            Ok(ProductVariant::B) => RegionalProduct::new(Region::Ns, ProductVariant::B),
            Err(_) => return Err(CreationError::unknown_variant(self.name(), discriminator)),
        };
        debug!("[{}] created {}", self.name(), product);
        Ok(product)
    }
}

impl Creator for ChFactory {
    type Product = RegionalProduct;

    fn name(&self) -> &str {
        "ChFactory"
    }

    fn create(&self, discriminator: &str) -> Result<RegionalProduct, CreationError> {
        let product = match discriminator.parse() {
            Ok(ProductVariant::A) => RegionalProduct::new(Region::Ch, ProductVariant::A),
            Ok(ProductVariant::B) => RegionalProduct::new(Region::Ch, ProductVariant::B),
            Err(_) => return Err(CreationError::unknown_variant(self.name(), discriminator)),
        };
        debug!("[{}] created {}", self.name(), product);
        Ok(product)
    }
}

/// Pick the concrete creator for a region key (`"NS"` or `"CH"`)
pub fn creator_for_region(
    region: &str,
) -> Result<Box<dyn Creator<Product = RegionalProduct>>, CreationError> {
    match region.parse::<Region>()? {
        Region::Ns => Ok(Box::new(NsFactory)),
        Region::Ch => Ok(Box::new(ChFactory)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_creator_stays_in_its_family() {
        let ns = NsFactory.create("A").unwrap();
        let ch = ChFactory.create("B").unwrap();

        assert_eq!(ns.region(), Region::Ns);
        assert_eq!(ns.code(), "NS_A");
        assert_eq!(ch.region(), Region::Ch);
        assert_eq!(ch.produce(), "produce CH_B");
    }

    #[test]
    fn test_region_selection() {
        let creator = creator_for_region("CH").unwrap();
        assert_eq!(creator.name(), "ChFactory");
        assert_eq!(creator.create("A").unwrap().code(), "CH_A");

        let err = creator_for_region("EU").err().unwrap();
        assert!(err.is_unknown_variant());
    }

    #[test]
    fn test_unknown_variant_names_the_creator() {
        let err = NsFactory.create("C").unwrap_err();
        assert_eq!(err, CreationError::unknown_variant("NsFactory", "C"));
    }
}
