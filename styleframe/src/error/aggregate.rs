//! Aggregation container and iteration support for multiple `StyleframeError` values.

use std::{error::Error, fmt, sync::Arc};

use super::StyleframeError;

/// Collection of [`StyleframeError`]s produced during a single load attempt.
///
/// # Examples
///
/// ```
/// use styleframe::StyleframeError;
/// let e = StyleframeError::aggregate(vec![
///     StyleframeError::validation("recipes[0].name", "expected a string"),
///     StyleframeError::validation("recipes[1]", "expected an object"),
/// ]);
/// if let StyleframeError::Aggregate(agg) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<StyleframeError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<StyleframeError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &StyleframeError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a StyleframeError;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<StyleframeError>>,
        fn(&'a Arc<StyleframeError>) -> &'a StyleframeError,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(Arc::as_ref)
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<StyleframeError>;
    type IntoIter = std::vec::IntoIter<Arc<StyleframeError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
