//! Error types produced while loading configuration and documents.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::StyleframeError;

/// Result alias used at the crate's loading boundary.
pub type StyleframeResult<T> = Result<T, std::sync::Arc<StyleframeError>>;

#[cfg(test)]
mod tests;
