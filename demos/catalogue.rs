use creational::core::builder::{direct, new_builder, MealBuilder, MealDirector, MealVariant};
use creational::core::errors::CreationError;
use creational::core::factories::{
    create_product, creator_for_region, peripheral_factory, Creator, PeripheralSet,
};
use creational::core::prototype::{AttributeBag, Prototype, TemplatePrototype};
use creational::core::singleton::get_singleton;
use log::{info, warn};
use std::sync::Arc;

fn main() -> Result<(), CreationError> {
    env_logger::init();

    info!("=== Simple factory ===");
    for key in ["A", "B", "C"] {
        match create_product(key) {
            Ok(product) => info!("'{}' -> {:?}", key, product),
            Err(e) => warn!("'{}' rejected: {}", key, e),
        }
    }

    info!("=== Factory method ===");
    let creator = creator_for_region("CH")?;
    let product = creator.create("A")?;
    info!("{} made {}: {}", creator.name(), product, product.produce());

    info!("=== Abstract factory ===");
    for family in ["office", "game"] {
        let factory = peripheral_factory(family)?;
        let set = PeripheralSet::from_factory(factory.as_ref());
        info!("{} | {}", set.keyboard.input("hello"), set.mouse.click());
    }

    info!("=== Builder ===");
    let director = MealDirector::new();
    for variant in [MealVariant::NoDrink, MealVariant::HasDrink] {
        let mut builder = new_builder(variant);
        let meal = direct(&director, builder.as_mut())?;
        info!("{} meal: {:?} costs {}", variant.key(), meal.kinds(), meal.cost());
        if let Err(e) = builder.get_result() {
            warn!("second get_result on {} builder: {}", variant.key(), e);
        }
    }

    info!("=== Prototype ===");
    let prototype = TemplatePrototype::from_loader("orders", || {
        Ok(AttributeBag::new().with("date", "loaded from data source"))
    })?;
    let first = prototype.clone_product();
    let second = prototype.clone_product();
    info!(
        "clone {} ({} attributes: {:?})",
        first.id().as_uuid(),
        first.attributes().len(),
        first.attributes().names().collect::<Vec<_>>()
    );
    info!("clone {} = {:?}", second.id(), second.attributes());

    info!("=== Singleton ===");
    let a = get_singleton()?;
    let b = get_singleton()?;
    info!(
        "same catalogue: {} ({:?} mode)",
        Arc::ptr_eq(&a, &b),
        a.config().concurrency_mode
    );

    Ok(())
}
