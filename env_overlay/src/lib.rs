//! Core crate for `env-overlay`: reconcile a base configuration document with
//! environment-specific overrides.
//!
//! The heart of the crate is [`merge::merge`], a pure deep merge over
//! [`serde_json::Value`] trees with record-aware sequence reconciliation.
//! The remaining modules are the collaborators around it:
//!
//! - [`codec`] converts YAML and JSON text to and from document values;
//! - [`session`] holds loaded documents and resolves environments;
//! - [`comparison`] lays out top-level entries side by side;
//! - [`output`] writes merged documents;
//! - [`settings`] gathers tool settings with Figment.
//!
//! # Examples
//!
//! ```rust
//! use env_overlay::merge::merge;
//! use serde_json::json;
//!
//! let base = json!({"services": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]});
//! let overlay = json!({"services": [{"id": 2, "name": "B"}, {"id": 3, "name": "c"}]});
//! assert_eq!(
//!     merge(base, overlay),
//!     json!({"services": [
//!         {"id": 1, "name": "a"},
//!         {"id": 2, "name": "B"},
//!         {"id": 3, "name": "c"},
//!     ]})
//! );
//! ```

use std::sync::Arc;

pub mod codec;
pub mod comparison;
mod error;
mod fs;
pub mod merge;
pub mod output;
mod result_ext;
pub mod session;
pub mod settings;

pub use error::{AggregatedErrors, OverlayError};
pub use merge::{merge, merge_all};
pub use result_ext::OverlayResultExt;
pub use session::{DocumentSession, LoadedDocument, NamingConvention};
pub use settings::{OverlaySettings, SettingsOverrides};

/// Result alias for fallible document operations.
pub type OverlayResult<T> = Result<T, Arc<OverlayError>>;
