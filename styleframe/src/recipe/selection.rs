//! Caller-supplied variant selections ("props").

use indexmap::IndexMap;

/// Maps variant keys to the chosen option keys.
///
/// A key that is absent falls back to the recipe's default; an absent key
/// is distinct from every explicit option, including the text `"undefined"`.
///
/// ```rust
/// use styleframe::recipe::VariantSelection;
///
/// let props = VariantSelection::new()
///     .with("color", "secondary")
///     .with_flag("disabled", true);
/// assert_eq!(props.get("color"), Some("secondary"));
/// assert_eq!(props.get("disabled"), Some("true"));
/// assert_eq!(props.get("size"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantSelection {
    selected: IndexMap<String, String>,
}

impl VariantSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style select.
    #[must_use]
    pub fn with(mut self, variant: impl Into<String>, option: impl Into<String>) -> Self {
        self.select(variant, option);
        self
    }

    /// Builder-style boolean select, stored as `"true"` or `"false"`.
    #[must_use]
    pub fn with_flag(self, variant: impl Into<String>, flag: bool) -> Self {
        self.with(variant, if flag { "true" } else { "false" })
    }

    /// Select `option` for `variant`, replacing any earlier choice.
    pub fn select(&mut self, variant: impl Into<String>, option: impl Into<String>) {
        self.selected.insert(variant.into(), option.into());
    }

    /// Drop the explicit choice for `variant`, reverting to its default.
    pub fn clear(&mut self, variant: &str) -> Option<String> {
        self.selected.shift_remove(variant)
    }

    /// Explicit choice for `variant`.
    #[must_use]
    pub fn get(&self, variant: &str) -> Option<&str> {
        self.selected.get(variant).map(String::as_str)
    }

    /// Iterate explicit choices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected
            .iter()
            .map(|(variant, option)| (variant.as_str(), option.as_str()))
    }

    /// Whether nothing was selected explicitly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariantSelection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            selected: iter
                .into_iter()
                .map(|(variant, option)| (variant.into(), option.into()))
                .collect(),
        }
    }
}
