//! Test helpers shared across crates.
//!
//! Provides temporary document directories and small text utilities for
//! asserting on command output.

pub mod fixtures;
pub mod text;
