//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across CLI commands: the global
//! options and configuration resolution.

use crate::error::CliError;
use std::env;
use std::path::{Path, PathBuf};
use tool::config::Resolved;
use tool::path::absolutize;
use tool::{ConfigResolver, Schema};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Log flags are consumed in main.rs before dispatch
pub struct GlobalOptions {
    /// Enable debug logging.
    pub debug: bool,

    /// Suppress log output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Schema file replacing the built-in schema.
    pub schema: Option<PathBuf>,
}

/// Current working directory as a `CliError`.
pub fn current_dir() -> Result<PathBuf, CliError> {
    env::current_dir().map_err(|source| CliError::Io {
        path: PathBuf::from("."),
        source,
    })
}

/// Resolve a user-supplied path against the working directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf, CliError> {
    Ok(absolutize(path, &current_dir()?)?)
}

/// Build the resolver described by the global options.
pub fn configuration_resolver(global: &GlobalOptions) -> Result<ConfigResolver, CliError> {
    let mut resolver = ConfigResolver::new().with_working_dir(current_dir()?);

    if let Some(ref schema_path) = global.schema {
        let schema = Schema::from_file(&resolve_path(schema_path)?)?;
        resolver = resolver.with_schema(schema);
    }

    Ok(resolver)
}

/// Resolve the configuration for this invocation.
///
/// Uses `--config` when given and discovery otherwise.
pub fn resolve_configuration(global: &GlobalOptions) -> Result<Resolved, CliError> {
    let resolver = configuration_resolver(global)?;
    Ok(resolver.resolve_source(global.config.as_deref())?)
}
