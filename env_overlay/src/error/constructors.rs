//! Constructors and aggregation helpers for `OverlayError`.

use std::sync::Arc;

use camino::Utf8Path;

use super::{AggregatedErrors, OverlayError};
use crate::codec::DocumentFormat;

impl OverlayError {
    /// Tries to build an [`OverlayError`] from an iterator of errors.
    ///
    /// Returns `None` for an empty iterator, the error itself when exactly one
    /// uniquely owned error is supplied, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() == 1 {
            let last = arcs.pop()?;
            return Some(match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            });
        }
        if arcs.is_empty() {
            return None;
        }
        Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))))
    }

    /// Construct a file error for `path`.
    #[must_use]
    pub fn file(path: &Utf8Path, source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Construct a parse error for text that originated at `path`.
    #[must_use]
    pub fn parse(
        path: &Utf8Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::Parse {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    /// Construct an unsupported format error for `path`.
    #[must_use]
    pub fn unsupported_format(path: &Utf8Path) -> Arc<Self> {
        Arc::new(Self::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    /// Construct a render error for `format`.
    #[must_use]
    pub fn render(
        format: DocumentFormat,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::Render {
            format,
            source: source.into(),
        })
    }

    /// Construct a settings error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use env_overlay::OverlayError;
    /// let e = OverlayError::settings(figment::Error::from("boom"));
    /// assert!(matches!(&*e, OverlayError::Settings(_)));
    /// ```
    #[must_use]
    pub fn settings(source: figment::Error) -> Arc<Self> {
        Arc::new(Self::Settings(Box::new(source)))
    }
}

impl From<figment::Error> for OverlayError {
    fn from(value: figment::Error) -> Self {
        Self::Settings(Box::new(value))
    }
}
