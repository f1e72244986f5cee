use crate::error::{LaminaError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flat table of string-valued configuration properties.
///
/// This struct wraps an `IndexMap<String, String>` to provide specialized
/// methods for property handling. We use `IndexMap` to ensure iteration order
/// is deterministic (insertion order), which is important both for predictable
/// text-based outputs and because the order in which sources are folded IS the
/// override precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PropertyMap {
    #[serde(flatten)]
    inner: IndexMap<String, String>,
}

impl PropertyMap {
    /// Creates a new empty property map.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Creates a PropertyMap from an existing IndexMap.
    pub fn from_inner(inner: IndexMap<String, String>) -> Self {
        Self { inner }
    }

    /// Returns a reference to the internal map.
    pub fn as_inner(&self) -> &IndexMap<String, String> {
        &self.inner
    }

    /// Returns true if the map contains no properties.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of properties in the map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Inserts a property, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Retrieves a property value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Returns true if the map contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses a JSON object of string values into a PropertyMap.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LaminaError::parse_error("json_source", e.to_string()))
    }

    /// Serializes the map to a JSON string (pretty printed).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LaminaError::parse_error("json_target", e.to_string()))
    }
}

impl From<IndexMap<String, String>> for PropertyMap {
    fn from(map: IndexMap<String, String>) -> Self {
        PropertyMap { inner: map }
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        PropertyMap {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
