//! The default command: write the MCP configuration to the target.

use crate::cli::CliConfig;
use crate::config::Settings;
use crate::mcp::{ConfigWriter, confirmation_message, resolve_token_from_env};
use anyhow::Result;
use clap::Args;
use tracing::debug;

/// Write the fixed MCP configuration, replacing the target file.
#[derive(Args, Debug, Default)]
pub struct WriteCommand {}

impl WriteCommand {
    /// Resolve the token, write the document, and print the confirmation line.
    ///
    /// The token is resolved before the target is touched, so a missing
    /// credential leaves any existing file unchanged.
    pub fn execute(self, settings: &Settings, config: &CliConfig) -> Result<()> {
        let token = resolve_token_from_env(&settings.token_env)?;
        let writer = ConfigWriter::with_default_servers(&token);

        debug!("Writing MCP configuration to {}", settings.target.display());
        writer.write_config(&settings.target)?;

        if !config.quiet {
            println!("{}", confirmation_message(&settings.target));
        }

        Ok(())
    }
}
