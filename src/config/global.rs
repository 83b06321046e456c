//! Global configuration for mcpcfg.
//!
//! The optional user-wide settings file (`~/.mcpcfg/config.toml`) changes
//! where the MCP configuration is written and which environment variable
//! supplies the GitHub token. It never stores the token itself.
//!
//! # Configuration File Location
//!
//! - **Unix/macOS**: `~/.mcpcfg/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\mcpcfg\config.toml`
//!
//! The location can be overridden with `--config` or the `MCPCFG_CONFIG_PATH`
//! environment variable.
//!
//! # File Format
//!
//! ```toml
//! # Where to write the MCP configuration (~ and $VAR are expanded)
//! target_path = "~/.gemini/antigravity/mcp_config.json"
//!
//! # Environment variable holding the GitHub personal access token
//! token_env = "GH_TOKEN"
//! ```

use crate::core::McpcfgError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of the global settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Target file for the MCP configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,

    /// Environment variable read for the GitHub token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
}

impl GlobalConfig {
    /// Load from `path`, or from [`default_path`](Self::default_path) when `None`.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed, or if no path was
    /// given and the home directory cannot be determined.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("No global config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`McpcfgError::ConfigParseError`] for malformed TOML, or an I/O
    /// error if the file cannot be read.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| McpcfgError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("Loaded global config from {}", path.display());
        Ok(config)
    }

    /// Default settings file location for this platform.
    ///
    /// # Errors
    ///
    /// Returns [`McpcfgError::HomeDirNotFound`] when no home (or local data)
    /// directory exists.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir().ok_or(McpcfgError::HomeDirNotFound)?.join("mcpcfg")
        } else {
            dirs::home_dir().ok_or(McpcfgError::HomeDirNotFound)?.join(".mcpcfg")
        };

        Ok(config_dir.join("config.toml"))
    }
}
