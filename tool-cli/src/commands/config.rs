//! Config command implementation.

use crate::error::CliError;
use crate::utils::{resolve_configuration, GlobalOptions};
use clap::Args;
use tool::Logger;

/// Show or validate the configuration.
#[derive(Args)]
pub struct ConfigCommand {
    /// Show the current configuration
    #[arg(long)]
    pub show: bool,

    /// Validate the configuration
    #[arg(long)]
    pub validate: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.show && !self.validate {
            println!("Use --show to display config or --validate to check config");
            return Ok(());
        }

        let logger = Logger::new("commands:config");
        let resolved = resolve_configuration(global)?;
        match &resolved.source {
            Some(source) => logger.debug(&format!(
                "Using {} configuration {}",
                source.format,
                source.path.display()
            )),
            None => logger.debug("Using the default configuration"),
        }

        if self.show {
            let pretty =
                serde_json::to_string_pretty(resolved.config.as_map()).map_err(CliError::Render)?;
            println!("Current configuration:");
            println!("{pretty}");
        } else {
            println!("Configuration is valid");
        }

        Ok(())
    }
}
