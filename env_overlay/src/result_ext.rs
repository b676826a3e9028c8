//! Extension for mapping foreign errors into `OverlayResult` concisely.
//!
//! Replaces `.map_err(|e| Arc::new(OverlayError::from(e)))` at call sites
//! that convert library errors (for example `figment::Error`) into the
//! crate's `OverlayResult<T>` alias.
//!
//! # Examples
//!
//! ```
//! use env_overlay::{OverlayResult, OverlayResultExt};
//!
//! fn extract() -> OverlayResult<String> {
//!     figment::Figment::new().extract_inner::<String>("missing").into_overlay()
//! }
//!
//! assert!(extract().is_err());
//! ```

use std::sync::Arc;

use crate::{OverlayError, OverlayResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<OverlayError>`
/// into an `OverlayResult<T>`.
pub trait OverlayResultExt<T, E> {
    /// Convert `Result<T, E>` into `OverlayResult<T>` using `Into<OverlayError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<OverlayError>`.
    fn into_overlay(self) -> OverlayResult<T>;
}

impl<T, E> OverlayResultExt<T, E> for Result<T, E>
where
    E: Into<OverlayError>,
{
    fn into_overlay(self) -> OverlayResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
