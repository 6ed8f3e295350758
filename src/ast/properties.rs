//! Property bags attached to DDL statements.

use smol_str::SmolStr;
use std::collections::BTreeMap;

/// The value of one property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Simple(SmolStr),
    Map(BTreeMap<SmolStr, SmolStr>),
}

/// Properties keyed by lower-cased name.
///
/// Setting a name twice keeps the last value without complaint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropertyDefinitions {
    properties: BTreeMap<SmolStr, PropertyValue>,
}

impl PropertyDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a property, replacing any previous value under the same name.
    pub fn insert(&mut self, name: &str, value: PropertyValue) {
        self.properties
            .insert(SmolStr::new(name.to_lowercase()), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name.to_lowercase().as_str())
    }

    pub fn get_simple(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::Simple(value) => Some(value),
            PropertyValue::Map(_) => None,
        }
    }

    pub fn get_map(&self, name: &str) -> Option<&BTreeMap<SmolStr, SmolStr>> {
        match self.get(name)? {
            PropertyValue::Map(map) => Some(map),
            PropertyValue::Simple(_) => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
