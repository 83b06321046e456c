//! Command-line interface for mcpcfg.
//!
//! Running `mcpcfg` with no arguments writes the MCP configuration to the
//! configured target and prints a single confirmation line.
//!
//! # Commands
//!
//! - `write` - Write the MCP configuration (the default when no command is given)
//! - `show` - Print the document that would be written, with credentials masked
//! - `path` - Print the resolved target path
//!
//! # Global Options
//!
//! - `--target <PATH>` - Target file (env: `MCPCFG_TARGET`)
//! - `--token-env <VAR>` - Environment variable holding the GitHub token
//! - `--config <PATH>` - Global settings file (env: `MCPCFG_CONFIG_PATH`)
//! - `--verbose` - Enable debug logging on stderr
//! - `--quiet` - Suppress all output except errors
//!
//! # Examples
//!
//! ```bash
//! # Write to ~/.gemini/antigravity/mcp_config.json
//! mcpcfg
//!
//! # Write elsewhere, reading the token from $GH_TOKEN
//! mcpcfg --target /tmp/mcp_config.json --token-env GH_TOKEN
//!
//! # Preview the document
//! mcpcfg show
//! ```

mod show;
mod write;


use crate::config::{GlobalConfig, Settings, SettingsOverrides};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so logging and settings lookup can be driven
/// programmatically in tests without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the subscriber installed by [`init_logging`](Self::init_logging).
    ///
    /// `None` disables logging entirely.
    pub log_level: Option<String>,

    /// Suppress the confirmation line and other non-error output.
    pub quiet: bool,

    /// Custom path to the global settings file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with no logging and default paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over the configured level when set. Calling
    /// this more than once is harmless.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("mcpcfg_cli={level}"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Main CLI structure for mcpcfg.
#[derive(Parser, Debug)]
#[command(
    name = "mcpcfg",
    about = "Write the MCP server configuration for agent hosts",
    version,
    long_about = "mcpcfg replaces an MCP configuration file with a fixed set of server entries \
                  (shadcn, next-devtools, github). The GitHub token is read from the environment \
                  at write time and the file is replaced atomically."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target file to write (default: ~/.gemini/antigravity/mcp_config.json)
    #[arg(long, global = true, env = "MCPCFG_TARGET", value_name = "PATH")]
    target: Option<PathBuf>,

    /// Environment variable holding the GitHub personal access token
    #[arg(long, global = true, value_name = "VAR")]
    token_env: Option<String>,

    /// Path to the global settings file (default: ~/.mcpcfg/config.toml)
    #[arg(short, long, global = true, env = "MCPCFG_CONFIG_PATH", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the MCP configuration to the target (default)
    Write(write::WriteCommand),

    /// Print the MCP configuration without writing it
    Show(show::ShowCommand),

    /// Print the resolved target path
    Path,
}

impl Cli {
    /// Run the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` maps to `debug`, `--quiet` disables logging, and the default
    /// is `warn` so stdout and stderr stay clean on success.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Run the parsed command with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let global = GlobalConfig::load_with_optional(config.config_path.clone())?;
        let overrides = SettingsOverrides {
            target: self.target,
            token_env: self.token_env,
        };
        let settings = Settings::resolve(&overrides, &global)?;

        match self.command {
            None => write::WriteCommand::default().execute(&settings, &config),
            Some(Commands::Write(cmd)) => cmd.execute(&settings, &config),
            Some(Commands::Show(cmd)) => cmd.execute(&settings),
            Some(Commands::Path) => {
                println!("{}", settings.target.display());
                Ok(())
            }
        }
    }
}
