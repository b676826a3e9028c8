//! Error types for the `env-overlay` command.

use std::sync::Arc;

use env_overlay::OverlayError;
use thiserror::Error;

/// Errors surfaced by the `env-overlay` command pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, merging or writing documents failed.
    #[error(transparent)]
    Overlay(#[from] Arc<OverlayError>),

    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Result alias used throughout the command pipeline.
pub type Result<T> = std::result::Result<T, CliError>;
