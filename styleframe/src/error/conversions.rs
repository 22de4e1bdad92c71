//! Trait-based conversions between external error types and `StyleframeError`.

use figment::Error as FigmentError;

use super::StyleframeError;
use crate::document::DocumentFormat;

impl From<FigmentError> for StyleframeError {
    fn from(e: FigmentError) -> Self {
        Self::Config(e.into())
    }
}

impl From<serde_json::Error> for StyleframeError {
    fn from(e: serde_json::Error) -> Self {
        Self::document(DocumentFormat::Json, e)
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for StyleframeError {
    fn from(e: toml::de::Error) -> Self {
        Self::document(DocumentFormat::Toml, e)
    }
}

impl From<StyleframeError> for FigmentError {
    /// Allow using `?` in tests that return `figment::Error`.
    fn from(e: StyleframeError) -> Self {
        match e {
            // Preserve the original Figment error (keeps kind, metadata, and sources).
            StyleframeError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
