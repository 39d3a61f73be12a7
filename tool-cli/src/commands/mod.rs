//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `start`: Start the application on the configured port
//! - `build`: Write the build output files
//! - `config`: Show or validate the resolved configuration

pub mod build;
pub mod config;
pub mod start;

pub use build::BuildCommand;
pub use config::ConfigCommand;
pub use start::StartCommand;
