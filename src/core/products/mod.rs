pub mod food;
pub mod meal;
pub mod peripherals;
pub mod regional;
pub mod simple;

// Re-export commonly used types
pub use food::{FoodItem, FoodKind};
pub use meal::Meal;
pub use peripherals::{GameKeyboard, GameMouse, Keyboard, Mouse, OfficeKeyboard, OfficeMouse};
pub use regional::RegionalProduct;
pub use simple::SimpleProduct;
