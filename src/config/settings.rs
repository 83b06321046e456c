use crate::config::global::GlobalConfig;
use crate::mcp::DEFAULT_TOKEN_ENV;
use crate::utils::platform::resolve_path;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Target used when neither a flag, `MCPCFG_TARGET`, nor the global config sets one.
pub const DEFAULT_TARGET: &str = "~/.gemini/antigravity/mcp_config.json";

/// Values supplied on the command line (or via their environment fallbacks).
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// `--target` / `MCPCFG_TARGET`, used as given
    pub target: Option<PathBuf>,
    /// `--token-env`
    pub token_env: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File the MCP configuration is written to
    pub target: PathBuf,
    /// Environment variable the GitHub token is read from
    pub token_env: String,
}

impl Settings {
    /// Merge overrides over the global config over built-in defaults.
    ///
    /// An override target is taken literally, since the shell has already
    /// expanded it. Targets from the global config or [`DEFAULT_TARGET`] get
    /// `~` and `$VAR` expansion.
    ///
    /// # Errors
    ///
    /// Fails if a configured or default target path cannot be expanded.
    pub fn resolve(overrides: &SettingsOverrides, global: &GlobalConfig) -> Result<Self> {
        let target = match &overrides.target {
            Some(target) => target.clone(),
            None => {
                let raw_target = global.target_path.as_deref().unwrap_or(DEFAULT_TARGET);
                resolve_path(raw_target)
                    .with_context(|| format!("Invalid target path: {raw_target}"))?
            }
        };

        let token_env = overrides
            .token_env
            .as_deref()
            .or(global.token_env.as_deref())
            .unwrap_or(DEFAULT_TOKEN_ENV)
            .to_string();

        debug!("Resolved target {} (token from {token_env})", target.display());

        Ok(Self {
            target,
            token_env,
        })
    }
}
