//! Start command implementation.
//!
//! The start command resolves the configuration, applies the `--port`
//! override, and reports the port the application runs on.

use crate::error::CliError;
use crate::utils::{resolve_configuration, GlobalOptions};
use clap::Args;
use tool::{Configuration, Logger};

/// Start the application.
#[derive(Args)]
pub struct StartCommand {
    /// Port to run on (overrides the configured port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

impl StartCommand {
    /// Execute the start command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = Logger::new("commands:start");

        let mut config = resolve_configuration(global)?.config;
        if let Some(port) = self.port {
            config.set_port(port);
        }

        println!("Application started successfully!");
        logger.info("Starting the app");
        logger.debug(&format!("Received configuration {config}"));

        println!("Server running on port {}", display_port(&config));
        Ok(())
    }
}

// An injected schema may allow configurations without an integer port
fn display_port(config: &Configuration) -> String {
    match (config.port(), config.get("port")) {
        (Some(port), _) => port.to_string(),
        (None, Some(other)) => other.to_string(),
        (None, None) => "(unset)".to_string(),
    }
}
