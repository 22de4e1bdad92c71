//! Extensions for mapping errors to `StyleframeResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| StyleframeError::…(e).into())`
//! patterns when converting external error types into the crate's
//! `StyleframeResult<T>` alias (`Result<T, Arc<StyleframeError>>`).
//!
//! - Use [`StyleframeResultExt::into_styleframe`] for error types that
//!   implement `Into<StyleframeError>` (e.g., `serde_json::Error`).
//! - Use [`IntoFigmentError`] and [`ResultIntoFigment`] in tests and
//!   integrations that speak `figment::Error`.
//!
//! # Examples
//!
//! ```
//! use styleframe::{StyleframeResult, StyleframeResultExt};
//!
//! fn parse() -> StyleframeResult<serde_json::Value> {
//!     // serde_json::Error implements Into<StyleframeError>
//!     serde_json::from_str("{\"recipes\": []}").into_styleframe()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{StyleframeError, StyleframeResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<StyleframeError>` into a `StyleframeResult<T>`.
pub trait StyleframeResultExt<T, E> {
    /// Convert `Result<T, E>` into `StyleframeResult<T>` using
    /// `Into<StyleframeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<StyleframeError>`.
    fn into_styleframe(self) -> StyleframeResult<T>;
}

impl<T, E> StyleframeResultExt<T, E> for Result<T, E>
where
    E: Into<StyleframeError>,
{
    fn into_styleframe(self) -> StyleframeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Convert shared errors into `figment::Error` for interop in tests and
/// integrations that expect Figment's error type.
pub trait IntoFigmentError {
    /// Convert into a `figment::Error`, preserving message text.
    fn into_figment(self) -> figment::Error;
}

impl IntoFigmentError for Arc<StyleframeError> {
    fn into_figment(self) -> figment::Error {
        figment::Error::from(self.to_string())
    }
}

impl IntoFigmentError for &Arc<StyleframeError> {
    fn into_figment(self) -> figment::Error {
        figment::Error::from(self.to_string())
    }
}

/// Extension to convert `Result<T, Arc<StyleframeError>>` into
/// `Result<T, figment::Error>`.
#[expect(
    clippy::result_large_err,
    reason = "figment::Error is large; this helper is test-facing only"
)]
pub trait ResultIntoFigment<T> {
    /// Map the `Arc<StyleframeError>` error into a `figment::Error` using
    /// [`IntoFigmentError`].
    ///
    /// # Errors
    ///
    /// Returns a `figment::Error` containing the original message.
    fn to_figment(self) -> Result<T, figment::Error>;
}

impl<T> ResultIntoFigment<T> for Result<T, Arc<StyleframeError>> {
    fn to_figment(self) -> Result<T, figment::Error> {
        self.map_err(IntoFigmentError::into_figment)
    }
}
