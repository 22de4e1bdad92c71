//! The flattened output of a recipe merge.

use std::fmt;

use indexmap::IndexMap;

use super::MergeProvenance;
use crate::case::kebab_case;
use crate::declarations::{Declarations, Entry, ModifierBlock};

/// A `(modifier, property)` pair identifying one resolved declaration.
///
/// Top-level declarations have no modifier. The same property under
/// different modifiers yields distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclarationKey {
    modifier: Option<String>,
    property: String,
}

impl DeclarationKey {
    /// Key for a top-level property.
    #[must_use]
    pub fn top_level(property: impl Into<String>) -> Self {
        Self {
            modifier: None,
            property: property.into(),
        }
    }

    /// Key for a property scoped to `modifier`.
    #[must_use]
    pub fn scoped(modifier: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            modifier: Some(modifier.into()),
            property: property.into(),
        }
    }

    /// Modifier path, or `None` at top level.
    #[must_use]
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// Modifier path, with the empty string standing for top level.
    #[must_use]
    pub fn modifier_path(&self) -> &str {
        self.modifier.as_deref().unwrap_or_default()
    }

    /// Property key as authored.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Property key in kebab-case.
    #[must_use]
    pub fn css_property(&self) -> String {
        kebab_case(&self.property)
    }
}

impl fmt::Display for DeclarationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modifier {
            Some(modifier) => write!(f, "{modifier}:{}", self.css_property()),
            None => f.write_str(&self.css_property()),
        }
    }
}

/// A resolved value and the provenance of the write that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDeclaration<V> {
    value: V,
    provenance: MergeProvenance,
}

impl<V> ResolvedDeclaration<V> {
    /// The winning value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Which layer wrote the winning value.
    #[must_use]
    pub const fn provenance(&self) -> MergeProvenance {
        self.provenance
    }
}

/// Ordered map of resolved declarations.
///
/// Entries keep the position of their first insertion; later overrides only
/// replace the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDeclarations<V> {
    entries: IndexMap<DeclarationKey, ResolvedDeclaration<V>>,
}

impl<V> Default for ResolvedDeclarations<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> ResolvedDeclarations<V> {
    pub(crate) fn write(&mut self, key: DeclarationKey, value: V, provenance: MergeProvenance) {
        self.entries
            .insert(key, ResolvedDeclaration { value, provenance });
    }

    /// Value of a top-level `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&V> {
        self.entry(&DeclarationKey::top_level(property))
            .map(ResolvedDeclaration::value)
    }

    /// Value of `property` scoped to `modifier`.
    #[must_use]
    pub fn get_scoped(&self, modifier: &str, property: &str) -> Option<&V> {
        self.entry(&DeclarationKey::scoped(modifier, property))
            .map(ResolvedDeclaration::value)
    }

    /// Full entry for `key`.
    #[must_use]
    pub fn entry(&self, key: &DeclarationKey) -> Option<&ResolvedDeclaration<V>> {
        self.entries.get(key)
    }

    /// Iterate `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeclarationKey, &V)> {
        self.entries.iter().map(|(key, entry)| (key, &entry.value))
    }

    /// Iterate full entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&DeclarationKey, &ResolvedDeclaration<V>)> {
        self.entries.iter()
    }

    /// Number of resolved declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold back into a [`Declarations`] block.
    ///
    /// Top-level properties keep their order. Each modifier becomes one block
    /// placed where its first declaration resolved.
    #[must_use]
    pub fn to_declarations(&self) -> Declarations<V>
    where
        V: Clone,
    {
        let mut modifiers: IndexMap<&str, ModifierBlock<V>> = IndexMap::new();
        let mut order: Vec<(&str, bool)> = Vec::new();
        let mut top: IndexMap<&str, V> = IndexMap::new();
        for (key, value) in self.iter() {
            match key.modifier() {
                None => {
                    top.insert(key.property(), value.clone());
                    order.push((key.property(), false));
                }
                Some(modifier) => {
                    if !modifiers.contains_key(modifier) {
                        order.push((modifier, true));
                    }
                    modifiers
                        .entry(modifier)
                        .or_default()
                        .insert(key.property(), value.clone());
                }
            }
        }
        let mut block = Declarations::default();
        for (name, is_modifier) in order {
            let entry = if is_modifier {
                modifiers.shift_remove(name).map(Entry::Modifier)
            } else {
                top.shift_remove(name).map(Entry::Value)
            };
            if let Some(entry) = entry {
                block.insert_entry(name, entry);
            }
        }
        block
    }
}
