//! Primary error enum for document handling flows.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::codec::DocumentFormat;

/// Errors that can occur around a merge: loading inputs, resolving the
/// environment, rendering and writing output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OverlayError {
    /// Reading or writing a document file failed.
    #[error("document file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document text could not be decoded.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        /// Path (or pseudo-path) the text came from.
        path: Utf8PathBuf,
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file extension does not name a supported document format.
    #[error("unsupported document format for '{path}': expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Path carrying the unrecognised extension.
        path: Utf8PathBuf,
    },

    /// A merged document could not be serialised.
    #[error("failed to render {format} document: {source}")]
    Render {
        /// Target output format.
        format: DocumentFormat,
        /// Underlying emitter error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required document has not been loaded into the session.
    #[error("document '{name}' is not loaded; load it before generating output")]
    MissingDocument {
        /// File name of the missing document.
        name: String,
    },

    /// No override document exists for the requested environment.
    #[error("unknown environment '{environment}' (available: {available})")]
    UnknownEnvironment {
        /// Environment the caller asked for.
        environment: String,
        /// Comma-separated list of environments that are loaded.
        available: String,
    },

    /// Tool settings could not be gathered from their layers.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<FigmentError>),

    /// Several independent operations failed.
    #[error("multiple document errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
