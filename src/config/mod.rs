//! Configuration management for mcpcfg
//!
//! Settings are layered, highest priority first:
//!
//! 1. Command-line flags (`--target`, `--token-env`)
//! 2. Environment fallbacks for flags (`MCPCFG_TARGET`)
//! 3. The global settings file (`~/.mcpcfg/config.toml`, see [`global`])
//! 4. Built-in defaults ([`DEFAULT_TARGET`], `GITHUB_PERSONAL_ACCESS_TOKEN`)
//!
//! # Modules
//!
//! - `global` - Loading of the optional TOML settings file
//! - `settings` - Merging of the layers into a [`Settings`] value

pub mod global;
mod settings;

pub use global::GlobalConfig;
pub use settings::{DEFAULT_TARGET, Settings, SettingsOverrides};
