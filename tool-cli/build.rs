//! Build script for tool-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("tool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command-line tool for development workflows")
        .long_about(
            "Command-line tool for development workflows. The configuration is read from \
             --config, or from a .toolrc file or the \"tool\" key of package.json found in the \
             current directory or one of its parents",
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress log output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Load the configuration from this file instead of searching for one")
                .value_name("PATH")
                .global(true)
                .env("TOOL_CONFIG"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .help("Validate the configuration against this schema file")
                .value_name("PATH")
                .global(true)
                .env("TOOL_SCHEMA"),
        )
        .subcommands(vec![
            Command::new("start")
                .about("Start the application")
                .long_about("Start the application on the configured port")
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .help("Port to run on (overrides the configured port)")
                        .value_name("PORT"),
                ),
            Command::new("build")
                .about("Build the application")
                .long_about("Write index.html, app.js and styles.css into the output directory")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output directory")
                        .value_name("DIR")
                        .default_value("dist"),
                )
                .arg(
                    Arg::new("minify")
                        .long("minify")
                        .help("Minify output")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("config")
                .about("Show or validate the configuration")
                .long_about("Print the resolved configuration or check it against the schema")
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("validate")
                        .long("validate")
                        .help("Validate the configuration")
                        .action(ArgAction::SetTrue),
                ),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tool.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
