//! Key normalisation for CSS property names and generated utility keys.
//!
//! Property keys are authored in camelCase (`borderRadius`) but surface in
//! CSS and in generated class names as kebab-case (`border-radius`). Utility
//! keys derived from arbitrary input values (`"1.5"`, `"@spacing.sm"`) are
//! mapped onto canonical lookup keys by [`UtilityKeyTransform`].

use crate::token::{Reference, TokenValue};

/// Convert a property key to kebab-case.
///
/// A `-` is inserted before every ASCII uppercase letter and the result is
/// lower-cased. Already-kebab input is returned unchanged. Custom property
/// keys starting with `--` are only lower-cased.
///
/// ```rust
/// use styleframe::case::kebab_case;
///
/// assert_eq!(kebab_case("borderRadius"), "border-radius");
/// assert_eq!(kebab_case("border-radius"), "border-radius");
/// assert_eq!(kebab_case("--Brand"), "--brand");
/// ```
#[must_use]
pub fn kebab_case(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_ascii_lowercase();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Maps raw autogenerate input onto a utility key and value.
///
/// - `[value]` is kept as the key and its inner text becomes a literal.
/// - `@path` becomes a [`Reference`]; the key is the path with the
///   namespace prefix removed.
/// - Anything else is treated as an arbitrary value and wrapped in brackets.
///
/// ```rust
/// use styleframe::case::UtilityKeyTransform;
///
/// let transform = UtilityKeyTransform::namespaced("spacing");
/// let (key, value) = transform.transform("@spacing.sm");
/// assert_eq!(key, "sm");
/// assert_eq!(value.to_css(), "var(--spacing--sm)");
///
/// let (key, value) = transform.transform("1.5");
/// assert_eq!(key, "[1.5]");
/// assert_eq!(value.to_css(), "1.5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UtilityKeyTransform {
    namespace: Option<String>,
}

impl UtilityKeyTransform {
    /// Transform without a namespace.
    #[must_use]
    pub const fn new() -> Self {
        Self { namespace: None }
    }

    /// Transform that qualifies references with `namespace`.
    #[must_use]
    pub fn namespaced(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }

    /// Namespace applied to reference keys, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Produce the `(key, value)` pair for `raw`.
    #[must_use]
    pub fn transform(&self, raw: &str) -> (String, TokenValue) {
        let input = raw.trim();
        if let Some(inner) = input
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return (input.to_owned(), TokenValue::from(inner));
        }
        if let Some(path) = input.strip_prefix('@') {
            return self.reference_key(path.trim());
        }
        (format!("[{input}]"), TokenValue::from(input))
    }

    fn reference_key(&self, path: &str) -> (String, TokenValue) {
        let Some(namespace) = self.namespace.as_deref() else {
            return (path.to_owned(), Reference::new(path).into());
        };
        if path == namespace {
            return (String::from("default"), Reference::new(path).into());
        }
        match path
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('.'))
        {
            Some(key) => (key.to_owned(), Reference::new(path).into()),
            None => (
                path.to_owned(),
                Reference::new(format!("{namespace}.{path}")).into(),
            ),
        }
    }
}
