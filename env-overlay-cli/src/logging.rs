//! Tracing subscriber set-up for the command-line tool.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Maps the `-v` count onto a default filter directive.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a formatting subscriber that logs to standard error.
///
/// `RUST_LOG` takes precedence over the verbosity count when it is set.
///
/// # Errors
///
/// Returns [`CliError::Logging`] when a global subscriber is already set.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
