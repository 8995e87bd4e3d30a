use super::Prototype;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Identity of one record instance. Every clone gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    List(Vec<AttributeValue>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(values: Vec<T>) -> Self {
        AttributeValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered name -> value map owned by one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBag {
    values: BTreeMap<String, AttributeValue>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert
    pub fn with(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace an attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) -> Option<AttributeValue> {
        self.values.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttributeValue> {
        self.values.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.values.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Product of the prototype creators: an identity plus an attribute bag
#[derive(Debug, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    attributes: AttributeBag,
}

impl Record {
    pub fn new(attributes: AttributeBag) -> Self {
        Self {
            id: RecordId::new(),
            attributes,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// Structural copy: the attribute bag is copied field by field into a new record
impl Prototype for Record {
    fn clone_product(&self) -> Record {
        Record::new(self.attributes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_has_equal_attributes_and_new_identity() {
        let source = Record::new(AttributeBag::new().with("date", "loaded").with("rows", 3i64));
        let copy = source.clone_product();

        assert_eq!(copy.attributes(), source.attributes());
        assert_ne!(copy.id(), source.id());
    }

    #[test]
    fn test_clone_is_not_aliased() {
        let mut source = Record::new(AttributeBag::new().with("tags", vec!["hot", "fresh"]));
        let mut copy = source.clone_product();

        if let Some(AttributeValue::List(tags)) = source.attributes_mut().get_mut("tags") {
            tags.push(AttributeValue::from("spicy"));
        }
        source.attributes_mut().set("rows", 7i64);

        assert_eq!(
            copy.get("tags"),
            Some(&AttributeValue::from(vec!["hot", "fresh"]))
        );
        assert_eq!(copy.get("rows"), None);
        assert_eq!(copy.attributes().names().collect::<Vec<_>>(), vec!["tags"]);

        copy.attributes_mut().remove("tags");
        assert_eq!(
            source.get("tags"),
            Some(&AttributeValue::from(vec!["hot", "fresh", "spicy"]))
        );
        assert_eq!(source.attributes().names().collect::<Vec<_>>(), vec!["rows", "tags"]);
    }

    #[test]
    fn test_record_id_is_a_v4_uuid() {
        let record = Record::new(AttributeBag::new());
        assert_eq!(record.id().as_uuid().get_version_num(), 4);
        assert_eq!(record.id().to_string(), record.id().as_uuid().to_string());
    }
}
