//! Scalar literal values.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Number;

/// A plain scalar: text, a number, or the flag `true`.
///
/// `Flag` is the only boolean meaning a literal carries. It marks a property
/// as present without a value. A `false` converts to the text `"false"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    /// Verbatim text such as `thin` or `1px solid`.
    Text(String),
    /// A JSON-compatible number.
    Number(Number),
    /// Flag-only value.
    Flag,
}

impl Literal {
    /// Returns `true` for [`Literal::Flag`].
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }

    /// Textual form of the literal. Flags render as `true`.
    ///
    /// Integral floats print without a fraction, so `2.0` and `1e2` render
    /// as `2` and `100`.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number_text(number)),
            Self::Flag => Cow::Borrowed("true"),
        }
    }
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.is_finite() => float.to_string(),
        _ => number.to_string(),
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => number.serialize(serializer),
            Self::Flag => serializer.serialize_bool(true),
        }
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Literal {
    fn from(flag: bool) -> Self {
        if flag {
            Self::Flag
        } else {
            Self::Text(String::from("false"))
        }
    }
}

impl From<i32> for Literal {
    fn from(number: i32) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<i64> for Literal {
    fn from(number: i64) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<u32> for Literal {
    fn from(number: u32) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<f64> for Literal {
    /// Non-finite floats have no JSON form and fall back to their text.
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or_else(|| Self::Text(number.to_string()), Self::Number)
    }
}
