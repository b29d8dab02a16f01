/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::error::{FragmentError, FragmentResult, require_non_empty};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A single `name="value"` pair.
///
/// Attributes compare structurally: two attributes with the same name and
/// value are equal regardless of where they were created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AttributeRepr")]
pub struct Attribute {
    name: String,
    value: String,
}

#[derive(Deserialize)]
struct AttributeRepr {
    name: String,
    value: String,
}

impl TryFrom<AttributeRepr> for Attribute {
    type Error = FragmentError;

    fn try_from(repr: AttributeRepr) -> FragmentResult<Self> {
        Attribute::new(repr.name, repr.value)
    }
}

impl Attribute {
    /// Create an attribute, rejecting an empty name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> FragmentResult<Self> {
        Ok(Attribute {
            name: require_non_empty(name.into(), "Attribute", "name")?,
            value: value.into(),
        })
    }

    /// Create an attribute whose name is known at compile time.
    ///
    /// Used by factories with fixed attribute names; the name is never empty.
    pub fn known(name: &'static str, value: impl Into<String>) -> Self {
        debug_assert!(!name.is_empty());
        Attribute {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into `(name, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

/// The attribute map of an element.
///
/// Keys are unique and a repeated key keeps its first position while taking
/// the last value written. Iteration follows first-insertion order.
/// Equality ignores order. Names are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Insert or overwrite a value, returning the previous one.
    ///
    /// An empty name is not a valid attribute; the write is dropped with a
    /// warning and `None` is returned.
    pub fn insert(&mut self, name: String, value: String) -> Option<String> {
        if name.is_empty() {
            tracing::warn!(value = %value, "Ignoring attribute with an empty name");
            return None;
        }
        self.0.insert(name, value)
    }

    /// Remove a value, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = IndexMap::<String, String>::deserialize(deserializer)?;
        if map.contains_key("") {
            return Err(serde::de::Error::custom(FragmentError::MalformedEntity {
                entity: "Attribute",
                field: "name",
            }));
        }
        Ok(Attributes(map))
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for attribute in iter {
            let (name, value) = attribute.into_parts();
            attributes.insert(name, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_rejects_empty_name() {
        assert!(Attribute::new("", "x").is_err());
        assert!(Attribute::new("id", "").is_ok());
    }

    #[test]
    fn test_attribute_structural_equality() {
        let a = Attribute::new("id", "main").unwrap();
        let b = Attribute::known("id", "main");
        assert_eq!(a, b);
        assert_ne!(a, Attribute::known("id", "other"));
    }

    #[test]
    fn test_attributes_last_write_wins() {
        let mut attrs = Attributes::new();
        attrs.insert("class".into(), "a".into());
        attrs.insert("id".into(), "x".into());
        let previous = attrs.insert("class".into(), "b".into());

        assert_eq!(previous.as_deref(), Some("a"));
        assert_eq!(attrs.get("class"), Some("b"));
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_attributes_equality_ignores_order() {
        let first: Attributes = [Attribute::known("a", "1"), Attribute::known("b", "2")]
            .into_iter()
            .collect();
        let second: Attributes = [Attribute::known("b", "2"), Attribute::known("a", "1")]
            .into_iter()
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_attributes_remove_keeps_order() {
        let mut attrs: Attributes = ["a", "b", "c"]
            .into_iter()
            .map(|n| Attribute::known(n, n))
            .collect();
        assert_eq!(attrs.remove("b").as_deref(), Some("b"));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(attrs.remove("missing").is_none());
    }

    #[test]
    fn test_attributes_insert_ignores_empty_name() {
        let mut attrs = Attributes::new();
        attrs.insert("id".into(), "x".into());

        assert!(attrs.insert(String::new(), "y".into()).is_none());
        assert!(!attrs.contains(""));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let err = serde_json::from_str::<Attribute>(r#"{"name":"","value":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("Malformed Attribute: name must not be empty"));

        assert!(serde_json::from_str::<Attributes>(r#"{"id":"a","":"b"}"#).is_err());

        let attribute: Attribute = serde_json::from_str(r#"{"name":"id","value":"x"}"#).unwrap();
        assert_eq!(attribute, Attribute::known("id", "x"));
    }
}
