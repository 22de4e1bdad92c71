//! References to declared variables.

use serde::Serialize;

use super::TokenValue;

/// Points at a declared variable by its dotted or kebab name.
///
/// Renders to `var(--name)` or `var(--name, fallback)` in CSS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reference {
    #[serde(rename = "ref")]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<Box<TokenValue>>,
}

impl Reference {
    /// Create a reference without a fallback.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: None,
        }
    }

    /// Attach a fallback used when the variable is not defined.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<TokenValue>) -> Self {
        self.fallback = Some(Box::new(fallback.into()));
        self
    }

    /// Name of the referenced variable as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fallback value, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&TokenValue> {
        self.fallback.as_deref()
    }

    /// Custom property name of the referenced variable.
    #[must_use]
    pub fn css_variable(&self, prefix: &str) -> String {
        css_variable_name(&self.name, prefix)
    }

    pub(crate) fn write_css(&self, out: &mut String, prefix: &str) {
        out.push_str("var(");
        out.push_str(&self.css_variable(prefix));
        if let Some(fallback) = &self.fallback {
            out.push_str(", ");
            fallback.write_css(out, prefix);
        }
        out.push(')');
    }
}

/// Construct a [`Reference`] to the variable `name`.
///
/// ```rust
/// use styleframe::token::{reference, TokenValue};
///
/// let value = TokenValue::from(reference("color.primary").with_fallback("blue"));
/// assert_eq!(value.to_css(), "var(--color--primary, blue)");
/// ```
#[must_use]
pub fn reference(name: impl Into<String>) -> Reference {
    Reference::new(name)
}

/// Map a variable name onto its custom property name.
///
/// Dots become `--` and `prefix` is inserted after the leading `--`. Names
/// already starting with `--` are returned verbatim.
///
/// ```rust
/// use styleframe::token::css_variable_name;
///
/// assert_eq!(css_variable_name("spacing.sm", ""), "--spacing--sm");
/// assert_eq!(css_variable_name("spacing", "sf-"), "--sf-spacing");
/// assert_eq!(css_variable_name("--raw", "sf-"), "--raw");
/// ```
#[must_use]
pub fn css_variable_name(name: &str, prefix: &str) -> String {
    if name.starts_with("--") {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len() + prefix.len() + 2);
    out.push_str("--");
    out.push_str(prefix);
    out.push_str(&name.replace('.', "--"));
    out
}
