//! Library exports for cfgtree-cli.
//!
//! This module exports the CLI structure so the command tree can be
//! inspected by tests and documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
