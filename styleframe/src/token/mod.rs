//! Token values: the CSS-bindable value model shared by every other module.
//!
//! A [`TokenValue`] is one of three things:
//!
//! - a [`Literal`] scalar (text, number, or the bare flag `true`);
//! - a [`Reference`] to a declared variable, optionally carrying a fallback;
//! - a [`RawCss`] composition of text fragments and embedded token values.
//!
//! Values render to CSS text through [`TokenValue::to_css`]. Variable names
//! use dotted paths (`color.primary`) which map onto custom property names
//! (`--color--primary`).
//!
//! # Example
//!
//! ```rust
//! use styleframe::css;
//! use styleframe::token::{reference, TokenValue};
//!
//! let gap = css!["calc(", reference("spacing"), " * ", "2", ")"];
//! assert_eq!(TokenValue::from(gap).to_css(), "calc(var(--spacing) * 2)");
//! ```

mod literal;
mod raw;
mod reference;

use std::fmt;

use serde::Serialize;

pub use literal::Literal;
pub use raw::{RawCss, RawPart};
pub use reference::{Reference, css_variable_name, reference};

/// Tagged union of every value that can be bound to a CSS property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Plain scalar value.
    Literal(Literal),
    /// Reference to a declared variable.
    Reference(Reference),
    /// Composed CSS fragment.
    Raw(RawCss),
}

impl TokenValue {
    /// Shorthand for the flag literal (`true`).
    #[must_use]
    pub const fn flag() -> Self {
        Self::Literal(Literal::Flag)
    }

    /// Returns `true` when this value is the flag literal.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Literal(Literal::Flag))
    }

    /// Render the value as CSS text using unprefixed variable names.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_css_with("")
    }

    /// Render the value as CSS text, inserting `prefix` after the leading
    /// `--` of every referenced variable name.
    #[must_use]
    pub fn to_css_with(&self, prefix: &str) -> String {
        let mut out = String::new();
        self.write_css(&mut out, prefix);
        out
    }

    pub(crate) fn write_css(&self, out: &mut String, prefix: &str) {
        match self {
            Self::Literal(literal) => out.push_str(&literal.as_text()),
            Self::Reference(reference) => reference.write_css(out, prefix),
            Self::Raw(raw) => raw.write_css(out, prefix),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<Literal> for TokenValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Reference> for TokenValue {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl From<RawCss> for TokenValue {
    fn from(raw: RawCss) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        Self::Literal(Literal::from(text))
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        Self::Literal(Literal::from(text))
    }
}

impl From<bool> for TokenValue {
    fn from(flag: bool) -> Self {
        Self::Literal(Literal::from(flag))
    }
}

impl From<i32> for TokenValue {
    fn from(number: i32) -> Self {
        Self::Literal(Literal::from(number))
    }
}

impl From<i64> for TokenValue {
    fn from(number: i64) -> Self {
        Self::Literal(Literal::from(number))
    }
}

impl From<u32> for TokenValue {
    fn from(number: u32) -> Self {
        Self::Literal(Literal::from(number))
    }
}

impl From<f64> for TokenValue {
    fn from(number: f64) -> Self {
        Self::Literal(Literal::from(number))
    }
}
