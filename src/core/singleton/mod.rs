pub mod catalogue;
pub mod cell;

// Re-export commonly used types
pub use catalogue::{get_singleton, Catalogue};
pub use cell::Singleton;
