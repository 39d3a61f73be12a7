//! Library exports for tool-cli.
//!
//! This module exports the CLI structure and commands so they can be
//! exercised directly from tests and documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
