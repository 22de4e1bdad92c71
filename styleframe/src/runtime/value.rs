//! Utility-key values carried by runtime descriptors.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::token::{Literal, TokenValue};

/// A key into the generated utility class catalogue, or a bare flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UtilityValue {
    /// Utility key such as `primary` or `[1.5]`.
    Key(String),
    /// Flag-only entry rendered without a `:value` suffix.
    Flag,
}

impl UtilityValue {
    /// Returns `true` for [`UtilityValue::Flag`].
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }

    /// The key, or `None` for a flag.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Flag => None,
        }
    }
}

impl fmt::Display for UtilityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Flag => f.write_str("true"),
        }
    }
}

impl Serialize for UtilityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Key(key) => serializer.serialize_str(key),
            Self::Flag => serializer.serialize_bool(true),
        }
    }
}

impl From<&str> for UtilityValue {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for UtilityValue {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<bool> for UtilityValue {
    fn from(flag: bool) -> Self {
        if flag {
            Self::Flag
        } else {
            Self::Key(String::from("false"))
        }
    }
}

/// Derive the utility key a token value is published under.
///
/// Literals keep their text, references use the variable name, and raw CSS
/// becomes an arbitrary-value key `[css]`.
impl From<&TokenValue> for UtilityValue {
    fn from(value: &TokenValue) -> Self {
        match value {
            TokenValue::Literal(Literal::Flag) => Self::Flag,
            TokenValue::Literal(literal) => Self::Key(literal.as_text().into_owned()),
            TokenValue::Reference(reference) => Self::Key(reference.name().to_owned()),
            TokenValue::Raw(raw) => {
                let mut key = String::from("[");
                raw.write_css(&mut key, "");
                key.push(']');
                Self::Key(key)
            }
        }
    }
}
