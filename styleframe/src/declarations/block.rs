//! The declarations block container.

use indexmap::IndexMap;
use serde::Serialize;

use super::{Entry, ModifierBlock};
use crate::token::TokenValue;

/// Insertion-ordered map of property keys to [`Entry`] values.
///
/// ```rust
/// use styleframe::declarations::{Declarations, ModifierBlock};
///
/// let block = Declarations::new()
///     .set("background", "blue")
///     .modifier("hover", ModifierBlock::new().set("background", "darkblue"));
///
/// let flattened: Vec<_> = block
///     .flatten()
///     .map(|(modifier, property, value)| (modifier, property, value.to_css()))
///     .collect();
/// assert_eq!(
///     flattened,
///     vec![
///         (None, "background", String::from("blue")),
///         (Some("hover"), "background", String::from("darkblue")),
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Declarations<V = TokenValue> {
    entries: IndexMap<String, Entry<V>>,
}

impl<V> Default for Declarations<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl Declarations<TokenValue> {
    /// Create an empty author-time block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> Declarations<V> {
    /// Builder-style property insert.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style modifier insert.
    #[must_use]
    pub fn modifier(mut self, name: impl Into<String>, block: ModifierBlock<V>) -> Self {
        self.insert_modifier(name, block);
        self
    }

    /// Insert or overwrite a property, keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) {
        self.entries.insert(key.into(), Entry::Value(value.into()));
    }

    /// Insert or overwrite a modifier block, keeping its original position.
    pub fn insert_modifier(&mut self, name: impl Into<String>, block: ModifierBlock<V>) {
        self.entries.insert(name.into(), Entry::Modifier(block));
    }

    /// Insert a raw entry.
    pub fn insert_entry(&mut self, key: impl Into<String>, entry: Entry<V>) {
        self.entries.insert(key.into(), entry);
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry<V>> {
        self.entries.get(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<V>)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of top-level entries, counting each modifier block once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into `(modifier, property, value)` triples in insertion order.
    ///
    /// Top-level properties carry `None`. Each modifier block expands in
    /// place, so the relative order of entries is preserved.
    pub fn flatten(&self) -> impl Iterator<Item = (Option<&str>, &str, &V)> {
        self.entries.iter().flat_map(|(key, entry)| {
            let (top, nested) = match entry {
                Entry::Value(value) => (Some((None, key.as_str(), value)), None),
                Entry::Modifier(block) => (
                    None,
                    Some(
                        block
                            .iter()
                            .map(move |(property, value)| (Some(key.as_str()), property, value)),
                    ),
                ),
            };
            top.into_iter().chain(nested.into_iter().flatten())
        })
    }

    /// Convert every value with `f`, preserving order and structure.
    #[must_use]
    pub fn map_values<U>(&self, mut f: impl FnMut(&V) -> U) -> Declarations<U> {
        let entries = self
            .entries
            .iter()
            .map(|(key, entry)| {
                let mapped = match entry {
                    Entry::Value(value) => Entry::Value(f(value)),
                    Entry::Modifier(block) => Entry::Modifier(block.map_values(&mut f)),
                };
                (key.clone(), mapped)
            })
            .collect();
        Declarations { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for Declarations<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Entry::Value(value)))
                .collect(),
        }
    }
}
