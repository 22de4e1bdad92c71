//! Composed CSS fragments.

use serde::Serialize;

use super::{Reference, TokenValue};

/// One piece of a [`RawCss`] composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawPart {
    /// Text copied verbatim.
    Text(String),
    /// Embedded token value rendered in place.
    Value(TokenValue),
}

impl From<&str> for RawPart {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawPart {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<TokenValue> for RawPart {
    fn from(value: TokenValue) -> Self {
        Self::Value(value)
    }
}

impl From<Reference> for RawPart {
    fn from(reference: Reference) -> Self {
        Self::Value(TokenValue::Reference(reference))
    }
}

impl From<RawCss> for RawPart {
    fn from(raw: RawCss) -> Self {
        Self::Value(TokenValue::Raw(raw))
    }
}

/// Ordered sequence of text fragments and token values, concatenated when
/// rendered. Used for `calc()` expressions, gradients, and shorthands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RawCss {
    #[serde(rename = "css")]
    parts: Vec<RawPart>,
}

impl RawCss {
    /// Create an empty composition.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Build a composition from an iterator of parts.
    #[must_use]
    pub fn from_parts<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RawPart>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a verbatim text fragment.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(RawPart::Text(text.into()));
        self
    }

    /// Append an embedded token value.
    #[must_use]
    pub fn value(mut self, value: impl Into<TokenValue>) -> Self {
        self.parts.push(RawPart::Value(value.into()));
        self
    }

    /// Parts in composition order.
    #[must_use]
    pub fn parts(&self) -> &[RawPart] {
        &self.parts
    }

    pub(crate) fn write_css(&self, out: &mut String, prefix: &str) {
        for part in &self.parts {
            match part {
                RawPart::Text(text) => out.push_str(text),
                RawPart::Value(value) => value.write_css(out, prefix),
            }
        }
    }
}

/// Compose a [`RawCss`] value from heterogeneous parts.
///
/// Each argument may be anything convertible into a
/// [`RawPart`](crate::token::RawPart): string slices, owned strings,
/// references, or token values.
///
/// ```rust
/// use styleframe::css;
/// use styleframe::token::{reference, TokenValue};
///
/// let shadow = css!["0 0 ", reference("shadow.blur").with_fallback("4px"), " black"];
/// assert_eq!(
///     TokenValue::from(shadow).to_css(),
///     "0 0 var(--shadow--blur, 4px) black"
/// );
/// ```
#[macro_export]
macro_rules! css {
    ($($part:expr),* $(,)?) => {{
        let parts: ::std::vec::Vec<$crate::token::RawPart> =
            ::std::vec![$($crate::token::RawPart::from($part)),*];
        $crate::token::RawCss::from_parts(parts)
    }};
}
