//! Entries stored inside a declarations block.

use indexmap::IndexMap;
use serde::Serialize;

use crate::token::TokenValue;

/// A single declarations-block entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry<V> {
    /// Property value.
    Value(V),
    /// Declarations scoped to a modifier such as `hover`.
    Modifier(ModifierBlock<V>),
}

impl<V> Entry<V> {
    /// Returns the value when this entry is not a modifier block.
    #[must_use]
    pub const fn as_value(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Modifier(_) => None,
        }
    }

    /// Returns the modifier block when this entry is one.
    #[must_use]
    pub const fn as_modifier(&self) -> Option<&ModifierBlock<V>> {
        match self {
            Self::Value(_) => None,
            Self::Modifier(block) => Some(block),
        }
    }
}

/// Property values scoped to a modifier. Cannot nest further modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModifierBlock<V> {
    properties: IndexMap<String, V>,
}

impl<V> Default for ModifierBlock<V> {
    fn default() -> Self {
        Self {
            properties: IndexMap::new(),
        }
    }
}

impl ModifierBlock<TokenValue> {
    /// Create an empty author-time modifier block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> ModifierBlock<V> {
    /// Builder-style insert.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite `key`, keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Look up a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.properties.get(key)
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the block has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Convert every value with `f`, preserving order.
    #[must_use]
    pub fn map_values<U>(&self, mut f: impl FnMut(&V) -> U) -> ModifierBlock<U> {
        ModifierBlock {
            properties: self
                .properties
                .iter()
                .map(|(key, value)| (key.clone(), f(value)))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ModifierBlock<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}
