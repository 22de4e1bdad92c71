//! Constructors and aggregation helpers for `StyleframeError`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use figment::Error as FigmentError;

use super::{AggregatedErrors, StyleframeError};
use crate::document::DocumentFormat;

impl StyleframeError {
    /// Tries to build a [`StyleframeError`] from an iterator of errors.
    ///
    /// The iterator is consumed eagerly. It returns:
    /// * `None` when no errors are supplied;
    /// * the inner error when a single [`Arc`] is uniquely owned;
    /// * [`Self::Aggregate`] containing that single [`Arc`] when the error is already shared; and
    /// * [`Self::Aggregate`] combining every error for two or more inputs.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::new(arcs)))
        })
    }

    /// Build a [`StyleframeError`] from at least one error, each of which can
    /// be a `StyleframeError` or an `Arc<StyleframeError>`.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`StyleframeError::try_aggregate`]
    /// when the error list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use styleframe::StyleframeError;
    /// let e = StyleframeError::config(figment::Error::from("boom"));
    /// assert!(matches!(e, StyleframeError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Construct a validation error for the entry at `key`.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Construct a syntax error for a document in `format`.
    #[must_use]
    pub fn document<E>(format: DocumentFormat, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Document {
            format,
            source: Box::new(source),
        }
    }

    /// Construct a read failure for `path`.
    #[must_use]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
