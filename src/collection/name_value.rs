//! Ordered name/value collection with multi-value keys

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use super::config::CollectionConfig;
use crate::utils::join_values;

/// An ordered collection where one key may be associated with several values.
///
/// Keys keep the position of their first insertion. A key may also be present
/// with no values at all, which reads back as the null value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct NameValueCollection {
    entries: Vec<(String, Vec<String>)>,
    config: CollectionConfig,
}

impl NameValueCollection {
    /// Create an empty collection with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with the given configuration
    pub fn with_config(config: CollectionConfig) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Get the collection configuration
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if any key is present
    pub fn has_keys(&self) -> bool {
        !self.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        let comparison = self.config.key_comparison;
        self.entries
            .iter()
            .position(|(existing, _)| comparison.matches(existing, key))
    }

    /// Append a value under `key`, keeping any values already there.
    ///
    /// A null value registers the key without adding a value.
    pub fn add<'v>(&mut self, key: &str, value: impl Into<Option<&'v str>>) {
        let value = value.into().map(str::to_string);
        match self.position(key) {
            Some(index) => self.entries[index].1.extend(value),
            None => self.entries.push((key.to_string(), value.into_iter().collect())),
        }
    }

    /// Replace every value under `key` with `value`
    pub fn set<'v>(&mut self, key: &str, value: impl Into<Option<&'v str>>) {
        let values: Vec<String> = value.into().map(str::to_string).into_iter().collect();
        match self.position(key) {
            Some(index) => self.entries[index].1 = values,
            None => self.entries.push((key.to_string(), values)),
        }
    }

    /// Get the values under `key` joined by `,`
    ///
    /// Returns `None` both for missing keys and for keys without values.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_values(key).and_then(join_values)
    }

    /// Get the raw values under `key`
    pub fn get_values(&self, key: &str) -> Option<&[String]> {
        self.position(key).map(|index| self.entries[index].1.as_slice())
    }

    /// Get the joined value of the key at `index`
    pub fn get_at(&self, index: usize) -> Option<String> {
        self.entries
            .get(index)
            .and_then(|(_, values)| join_values(values))
    }

    /// Check if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Remove `key` and all its values, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the key at `index` in insertion order
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(key, _)| key.as_str())
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over `(key, joined value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<String>)> + '_ {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), join_values(values)))
    }
}

impl<'a, 'v> FromIterator<(&'a str, Option<&'v str>)> for NameValueCollection {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<&'v str>)>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<'a, 'v> Extend<(&'a str, Option<&'v str>)> for NameValueCollection {
    fn extend<I: IntoIterator<Item = (&'a str, Option<&'v str>)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}
