//! Recipe definitions: base, variants, defaults, and compound variants.

use indexmap::IndexMap;
use serde::Serialize;

use super::{MergeComposer, ResolvedDeclarations, ResolvedMerge, VariantSelection, merge_layers};
use crate::declarations::Declarations;
use crate::token::TokenValue;

/// The options of one variant axis, in declaration order.
///
/// An option mapped to `None` is intentionally empty: selecting it
/// contributes no declarations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Variant<V = TokenValue> {
    options: IndexMap<String, Option<Declarations<V>>>,
}

impl<V> Default for Variant<V> {
    fn default() -> Self {
        Self {
            options: IndexMap::new(),
        }
    }
}

impl Variant<TokenValue> {
    /// Create an author-time variant with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> Variant<V> {
    /// Add an option contributing `declarations`.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, declarations: Declarations<V>) -> Self {
        self.options.insert(key.into(), Some(declarations));
        self
    }

    /// Add an option that contributes nothing when selected.
    #[must_use]
    pub fn undefined(mut self, key: impl Into<String>) -> Self {
        self.options.insert(key.into(), None);
        self
    }

    /// Insert an option, `None` meaning "contributes nothing".
    pub fn insert(&mut self, key: impl Into<String>, declarations: Option<Declarations<V>>) {
        self.options.insert(key.into(), declarations);
    }

    /// Whether `key` names a declared option (including empty ones).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Declarations of option `key`. Returns `None` for unknown and empty
    /// options alike.
    #[must_use]
    pub fn declarations(&self, key: &str) -> Option<&Declarations<V>> {
        self.options.get(key).and_then(Option::as_ref)
    }

    /// Iterate options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&str, Option<&Declarations<V>>)> {
        self.options
            .iter()
            .map(|(key, declarations)| (key.as_str(), declarations.as_ref()))
    }

    /// Convert every value with `f`, preserving order and empty options.
    #[must_use]
    pub fn map_values<U>(&self, mut f: impl FnMut(&V) -> U) -> Variant<U> {
        Variant {
            options: self
                .options
                .iter()
                .map(|(key, declarations)| {
                    (
                        key.clone(),
                        declarations.as_ref().map(|block| block.map_values(&mut f)),
                    )
                })
                .collect(),
        }
    }
}

/// Override block applied only when every condition matches the resolved
/// selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompoundVariant<V = TokenValue> {
    #[serde(rename = "match")]
    conditions: IndexMap<String, String>,
    css: Declarations<V>,
}

impl<V> CompoundVariant<V> {
    /// Create a compound variant contributing `css`, with no conditions yet.
    #[must_use]
    pub fn new(css: Declarations<V>) -> Self {
        Self {
            conditions: IndexMap::new(),
            css,
        }
    }

    /// Require `variant` to resolve to `option`.
    #[must_use]
    pub fn when(mut self, variant: impl Into<String>, option: impl Into<String>) -> Self {
        self.conditions.insert(variant.into(), option.into());
        self
    }

    /// Conditions in declaration order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.conditions
            .iter()
            .map(|(variant, option)| (variant.as_str(), option.as_str()))
    }

    /// Declarations contributed when matched.
    #[must_use]
    pub const fn css(&self) -> &Declarations<V> {
        &self.css
    }

    /// Check every condition against `selected`, which yields the resolved
    /// option for a variant key. A missing selection fails the match.
    pub fn matches<'a, F>(&'a self, mut selected: F) -> bool
    where
        F: FnMut(&'a str) -> Option<&'a str>,
    {
        self.conditions
            .iter()
            .all(|(variant, required)| selected(variant.as_str()) == Some(required.as_str()))
    }

    /// Convert every value with `f`.
    #[must_use]
    pub fn map_values<U>(&self, f: impl FnMut(&V) -> U) -> CompoundVariant<U> {
        CompoundVariant {
            conditions: self.conditions.clone(),
            css: self.css.map_values(f),
        }
    }
}

/// The shape shared by author-time recipes and runtime descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDefinition<V = TokenValue> {
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<Declarations<V>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    variants: IndexMap<String, Variant<V>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    default_variants: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    compound_variants: Vec<CompoundVariant<V>>,
}

impl<V> Default for RecipeDefinition<V> {
    fn default() -> Self {
        Self {
            base: None,
            variants: IndexMap::new(),
            default_variants: IndexMap::new(),
            compound_variants: Vec::new(),
        }
    }
}

impl RecipeDefinition<TokenValue> {
    /// Create an empty author-time definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> RecipeDefinition<V> {
    /// Set the base declarations.
    #[must_use]
    pub fn base(mut self, declarations: Declarations<V>) -> Self {
        self.base = Some(declarations);
        self
    }

    /// Declare a variant axis. Redeclaring a key replaces its options but
    /// keeps its position.
    #[must_use]
    pub fn variant(mut self, key: impl Into<String>, variant: Variant<V>) -> Self {
        self.variants.insert(key.into(), variant);
        self
    }

    /// Select `option` for `variant` when no explicit prop is supplied.
    #[must_use]
    pub fn default_variant(
        mut self,
        variant: impl Into<String>,
        option: impl Into<String>,
    ) -> Self {
        self.default_variants.insert(variant.into(), option.into());
        self
    }

    /// Append a compound variant. Compound variants apply in append order.
    #[must_use]
    pub fn compound_variant(mut self, compound: CompoundVariant<V>) -> Self {
        self.compound_variants.push(compound);
        self
    }

    /// Base declarations, if any.
    #[must_use]
    pub const fn base_block(&self) -> Option<&Declarations<V>> {
        self.base.as_ref()
    }

    /// Variant axes in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &Variant<V>)> {
        self.variants
            .iter()
            .map(|(key, variant)| (key.as_str(), variant))
    }

    /// Look up a variant axis.
    #[must_use]
    pub fn get_variant(&self, key: &str) -> Option<&Variant<V>> {
        self.variants.get(key)
    }

    /// Default selections in declaration order.
    pub fn default_variants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.default_variants
            .iter()
            .map(|(variant, option)| (variant.as_str(), option.as_str()))
    }

    /// Compound variants in application order.
    #[must_use]
    pub fn compound_variants(&self) -> &[CompoundVariant<V>] {
        &self.compound_variants
    }

    /// Resolve the option chosen for `variant`: the explicit prop, else the
    /// default, else nothing.
    #[must_use]
    pub fn selected_option<'a>(
        &'a self,
        selection: &'a VariantSelection,
        variant: &str,
    ) -> Option<&'a str> {
        selection
            .get(variant)
            .or_else(|| self.default_variants.get(variant).map(String::as_str))
    }

    /// Merge this definition against `selection`.
    #[must_use]
    pub fn resolve(&self, selection: &VariantSelection) -> ResolvedDeclarations<V>
    where
        V: Clone,
    {
        merge_layers(
            MergeComposer::compose(self, selection),
            ResolvedMerge::default(),
        )
    }

    /// Convert every value with `f`, preserving the whole structure.
    #[must_use]
    pub fn map_values<U>(&self, mut f: impl FnMut(&V) -> U) -> RecipeDefinition<U> {
        RecipeDefinition {
            base: self.base.as_ref().map(|block| block.map_values(&mut f)),
            variants: self
                .variants
                .iter()
                .map(|(key, variant)| (key.clone(), variant.map_values(&mut f)))
                .collect(),
            default_variants: self.default_variants.clone(),
            compound_variants: self
                .compound_variants
                .iter()
                .map(|compound| compound.map_values(&mut f))
                .collect(),
        }
    }
}

/// A named author-time recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    #[serde(flatten)]
    definition: RecipeDefinition<TokenValue>,
}

impl Recipe {
    /// Create a recipe called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, definition: RecipeDefinition<TokenValue>) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }

    /// Recipe name, used as the leading class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying definition.
    #[must_use]
    pub const fn definition(&self) -> &RecipeDefinition<TokenValue> {
        &self.definition
    }

    /// Resolve the recipe against `selection`.
    #[must_use]
    pub fn resolve(&self, selection: &VariantSelection) -> ResolvedDeclarations<TokenValue> {
        self.definition.resolve(selection)
    }
}
