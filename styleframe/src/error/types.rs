//! Primary error enum for configuration and document loading.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::document::DocumentFormat;

/// Errors surfaced at the crate's I/O boundary.
///
/// Merging, resolution, key normalisation, and autogeneration are total and
/// never produce these; only configuration and document loading do.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyleframeError {
    /// Error while extracting layered configuration.
    #[error("Failed to load styleframe configuration: {0}")]
    Config(#[from] Box<FigmentError>),

    /// A document could not be read from disk.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A document is not well-formed in its declared format.
    #[error("Invalid {format} document: {source}")]
    Document {
        /// Format the document was parsed as.
        format: DocumentFormat,
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A structurally invalid recipe document entry.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Path of the offending entry, for example `recipes[0].variants.size`.
        key: String,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// Multiple errors occurred while loading.
    #[error("multiple styleframe errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
