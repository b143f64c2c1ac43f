//! The resolution map: slot name to resolved value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolved slot values in the order they were resolved.
///
/// An absent slot means it was not resolved. Values are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resolution {
    values: IndexMap<String, String>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `slot`. Empty values are ignored.
    ///
    /// Returns whether anything was recorded.
    pub fn insert(&mut self, slot: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            return false;
        }
        self.values.insert(slot.into(), value);
        true
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values.get(slot).map(String::as_str)
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.values.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(slot, value)| (slot.as_str(), value.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.values
    }
}

impl<K, V> FromIterator<(K, V)> for Resolution
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut resolution = Self::new();
        for (slot, value) in iter {
            resolution.insert(slot, value);
        }
        resolution
    }
}
