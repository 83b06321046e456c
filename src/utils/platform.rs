//! Platform helpers for home directory lookup and path expansion.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcpcfg_cli::utils::platform::{get_home_dir, resolve_path};
//!
//! # fn example() -> anyhow::Result<()> {
//! let home = get_home_dir()?;
//! println!("Home directory: {}", home.display());
//!
//! // Tilde and $VAR expansion
//! let target = resolve_path("~/.gemini/antigravity/mcp_config.json")?;
//! # Ok(())
//! # }
//! ```

use crate::core::McpcfgError;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Checks if the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Returns the current user's home directory.
///
/// # Errors
///
/// Returns [`McpcfgError::HomeDirNotFound`] when neither `HOME` (Unix) nor
/// `USERPROFILE` (Windows) yields a directory.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::Error::from(McpcfgError::HomeDirNotFound).context(platform_help)
    })
}

/// Resolves a user-supplied path, expanding a leading `~/` and `$VAR` references.
///
/// Only `~/` is supported for tilde expansion; `~user` forms are rejected.
///
/// # Examples
///
/// ```rust,no_run
/// use mcpcfg_cli::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let path = resolve_path("$HOME/.mcpcfg/config.toml")?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = if let Some(stripped) = path.strip_prefix("~/") {
        get_home_dir()?.join(stripped)
    } else if path == "~" {
        get_home_dir()?
    } else if path.starts_with('~') {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/.gemini/mcp_config.json'"
        ));
    } else {
        PathBuf::from(path)
    };

    let path_str = expanded.to_string_lossy();
    let expanded_str = shellexpand::env(&path_str)
        .with_context(|| {
            format!(
                "Failed to expand environment variables in path: {path_str}\n\n\
                Common issues:\n\
                - Undefined environment variable (e.g., $UNDEFINED_VAR)\n\
                - Invalid variable syntax (use $VAR or ${{VAR}})"
            )
        })?
        .into_owned();

    Ok(PathBuf::from(expanded_str))
}
