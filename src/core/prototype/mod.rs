pub mod record;
pub mod template;

// Re-export commonly used types
pub use record::{AttributeBag, AttributeValue, Record, RecordId};
pub use template::TemplatePrototype;

/// Creation by copying a prepared instance
///
/// A clone carries the source's attributes as they are at the moment of
/// cloning and shares nothing with it afterwards.
pub trait Prototype {
    fn clone_product(&self) -> Record;
}
