//! Error types produced while loading, rendering and writing documents.
//!
//! The merge engine itself is total and never fails; everything here belongs
//! to the collaborators that feed it and consume its output.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::OverlayError;
