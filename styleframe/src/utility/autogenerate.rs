//! Hooks deriving utility entries from raw input strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::case::UtilityKeyTransform;
use crate::token::{RawCss, Reference, TokenValue};

/// Optional minus, then digits with an optional fraction, or a bare fraction.
static MULTIPLIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^-?(?:\d+(?:\.\d+)?|\.\d+)$").ok());

/// Maps one raw autogenerate input onto a utility `(key, value)` pair.
///
/// Closures of the shape `Fn(&str) -> (String, TokenValue)` implement the
/// trait directly.
pub trait Autogenerate: Send + Sync {
    /// Derive the utility key and value for `input`.
    fn generate(&self, input: &str) -> (String, TokenValue);
}

impl<F> Autogenerate for F
where
    F: Fn(&str) -> (String, TokenValue) + Send + Sync,
{
    fn generate(&self, input: &str) -> (String, TokenValue) {
        self(input)
    }
}

impl Autogenerate for UtilityKeyTransform {
    fn generate(&self, input: &str) -> (String, TokenValue) {
        self.transform(input)
    }
}

/// Rewrites `@N` inputs into `calc()` multiples of a base variable.
///
/// ```rust
/// use styleframe::token::reference;
/// use styleframe::utility::{Autogenerate, MultiplierAutogenerate};
///
/// let spacing = MultiplierAutogenerate::new(reference("spacing"));
///
/// let (key, value) = spacing.generate("@1.5");
/// assert_eq!(key, "1.5");
/// assert_eq!(value.to_css(), "calc(var(--spacing) * 1.5)");
///
/// let (key, value) = spacing.generate("@spacing.sm");
/// assert_eq!(key, "sm");
/// assert_eq!(value.to_css(), "var(--spacing--sm)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplierAutogenerate {
    base: Reference,
    fallback: UtilityKeyTransform,
}

impl MultiplierAutogenerate {
    /// Multiply against `base`. Non-multiplier input is handled by a key
    /// transform namespaced to the base variable.
    #[must_use]
    pub fn new(base: Reference) -> Self {
        let fallback = UtilityKeyTransform::namespaced(base.name());
        Self { base, fallback }
    }

    /// Replace the transform used for non-multiplier input.
    #[must_use]
    pub fn with_fallback(mut self, fallback: UtilityKeyTransform) -> Self {
        self.fallback = fallback;
        self
    }

    /// The base variable reference.
    #[must_use]
    pub const fn base(&self) -> &Reference {
        &self.base
    }

    /// The numeric multiplier carried by `input`, if it is one.
    ///
    /// ```rust
    /// use styleframe::utility::MultiplierAutogenerate;
    ///
    /// assert_eq!(MultiplierAutogenerate::multiplier(" @-0.5 "), Some("-0.5"));
    /// assert_eq!(MultiplierAutogenerate::multiplier("@1rem"), None);
    /// assert_eq!(MultiplierAutogenerate::multiplier("2"), None);
    /// ```
    #[must_use]
    pub fn multiplier(input: &str) -> Option<&str> {
        let numeric = input.trim().strip_prefix('@')?.trim();
        MULTIPLIER
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(numeric))
            .then_some(numeric)
    }
}

impl Autogenerate for MultiplierAutogenerate {
    fn generate(&self, input: &str) -> (String, TokenValue) {
        let Some(numeric) = Self::multiplier(input) else {
            return self.fallback.transform(input);
        };
        let value = RawCss::new()
            .text("calc(")
            .value(self.base.clone())
            .text(" * ")
            .text(numeric)
            .text(")");
        (numeric.to_owned(), value.into())
    }
}
