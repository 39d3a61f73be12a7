//! Main entry point for the tool CLI.
//!
//! This is the command-line interface for development workflows.
//! It provides these commands:
//! - `start`: Start the application
//! - `build`: Build the application
//! - `config`: Show or validate the configuration

mod cli;
mod commands;
mod error;
mod utils;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use cli::Cli;
use std::io::Write;
use tool::select_log_level;
use utils::GlobalOptions;

/// Install the stderr logger at the level chosen by the flags or `TOOL_LOG_MODE`.
///
/// `RUST_LOG` is not consulted.
fn init_logging(debug: bool, quiet: bool) {
    let level = select_log_level(debug, quiet);
    let _ = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

fn main() {
    // Parse CLI arguments; help and version are the only successful early exits
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    init_logging(cli.debug, cli.quiet);
    if cli.debug {
        log::debug!(target: "bin", "Debug mode enabled");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        debug: cli.debug,
        quiet: cli.quiet,
        config: cli.config,
        schema: cli.schema,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Start(cmd) => cmd.execute(&global),
        cli::Command::Build(cmd) => cmd.execute(&global),
        cli::Command::Config(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
