//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{BuildCommand, ConfigCommand, StartCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A command-line tool for development workflows.
#[derive(Parser)]
#[command(name = "tool")]
#[command(version, about = "A command-line tool for development workflows", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress log output
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Load the configuration from this file instead of searching for one
    #[arg(short, long, value_name = "PATH", global = true, env = "TOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Validate the configuration against this schema file
    #[arg(long, value_name = "PATH", global = true, env = "TOOL_SCHEMA")]
    pub schema: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Start the application
    Start(StartCommand),

    /// Build the application
    Build(BuildCommand),

    /// Show or validate the configuration
    Config(ConfigCommand),
}
