//! Library interface for the `env-overlay` command-line tool.
//!
//! The binary is a thin wrapper: argument parsing lives in [`cli`], command
//! execution in [`commands`], and failures are described by [`error`].

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
