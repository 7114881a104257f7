//! Ordered attribute maps

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;
use std::ops::Index;

/// An insertion-ordered map of attribute names to values
///
/// An empty value means the attribute is unset. It is kept in the map but
/// never written out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(pub(crate) IndexMap<String, String>);

impl Attributes {
    /// Creates a new empty attribute map
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Creates a new attribute map with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Inserts an attribute, returning the previous value if the name was
    /// already present. An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Removes an attribute, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn keys(&self) -> Keys<'_, String, String> {
        self.0.keys()
    }

    pub fn values(&self) -> Values<'_, String, String> {
        self.0.values()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    /// Iterates over attributes whose value is non-empty
    pub fn iter_set(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns a copy ordered lexicographically by name
    pub fn sorted(&self) -> Self {
        let mut map = self.0.clone();
        map.sort_keys();
        Self(map)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Merges the two attribute groups of an element into emission order.
///
/// Fixed attributes come first, then optional ones, each group sorted by
/// name and stripped of empty values. When both groups set the same name
/// the optional value wins and the attribute keeps its fixed position.
pub fn merge(optional: &Attributes, fixed: &Attributes) -> Attributes {
    let mut merged = Attributes::with_capacity(fixed.len() + optional.len());
    for (name, value) in fixed.sorted().iter_set() {
        merged.insert(name, value);
    }
    for (name, value) in optional.sorted().iter_set() {
        merged.insert(name, value);
    }
    merged
}

impl Index<&str> for Attributes {
    type Output = str;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, name: &str) -> &Self::Output {
        &self.0[name]
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, String>> for Attributes {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
