//! Registry construction macros
//!
//! These macros build a `CreatorRegistry` from `key => constructor` pairs.

/// Macro for building a creator registry in one expression
///
/// Evaluates to `Result<CreatorRegistry<P>, CreationError>`, failing with
/// `DuplicateDiscriminator` if a key is listed twice.
///
/// # Example
/// ```rust
/// use creational::core::products::FoodItem;
///
/// let registry = creational::creator_registry!("food", {
///     "pizza" => FoodItem::pizza,
///     "cola" => FoodItem::cola,
/// })
/// .unwrap();
///
/// assert_eq!(registry.create("cola").unwrap().price(), 1);
/// ```
#[macro_export]
macro_rules! creator_registry {
    ($name:expr, { $($key:expr => $constructor:expr),* $(,)? }) => {
        (|| -> ::std::result::Result<
            $crate::core::factories::CreatorRegistry<_>,
            $crate::core::errors::CreationError,
        > {
            #[allow(unused_mut)]
            let mut registry = $crate::core::factories::CreatorRegistry::new($name);
            $(
                registry.register($key, $constructor)?;
            )*
            Ok(registry)
        })()
    };
}
