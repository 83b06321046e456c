//! Print the MCP configuration without writing it.

use crate::config::Settings;
use crate::core::McpcfgError;
use crate::mcp::{ConfigWriter, mask_token, resolve_token_from_env};
use anyhow::Result;
use clap::Args;
use tracing::warn;

/// Placeholder shown for the token when it is not set.
const UNSET_TOKEN: &str = "<unset>";

/// Print the document that `write` would produce.
#[derive(Args, Debug, Default)]
pub struct ShowCommand {
    /// Print credentials in clear text instead of masking them
    #[arg(long)]
    reveal: bool,
}

impl ShowCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let token = match resolve_token_from_env(&settings.token_env) {
            Ok(token) => token,
            Err(err @ McpcfgError::MissingCredential { .. }) if self.reveal => return Err(err.into()),
            Err(McpcfgError::MissingCredential {
                var,
            }) => {
                warn!("{var} is not set; `write` will fail until it is");
                UNSET_TOKEN.to_string()
            }
            Err(err) => return Err(err.into()),
        };

        let writer = ConfigWriter::with_default_servers(&token);
        let document = if self.reveal || token == UNSET_TOKEN {
            writer.document().clone()
        } else {
            writer.document().map_env_values(mask_token)
        };

        println!("{}", ConfigWriter::new(document).render()?);
        Ok(())
    }
}
