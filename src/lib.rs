//! mcpcfg - MCP server configuration writer
//!
//! Writes a fixed MCP (Model Context Protocol) configuration document
//! describing three servers (`shadcn`, `next-devtools`, `github`) to a JSON
//! file read by an agent host. Each run fully replaces the target file.
//!
//! # Guarantees
//!
//! - **Deterministic output**: 2-space indented JSON, servers in a fixed order,
//!   entry fields ordered `command`, `args`, `env`
//! - **Atomic replace**: the target either keeps its old content or holds the
//!   complete new document
//! - **No embedded secrets**: the GitHub token is read from the environment
//!   at write time
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Layered settings (flags, environment, `~/.mcpcfg/config.toml`)
//! - [`core`] - Error taxonomy and user-friendly error rendering
//! - [`mcp`] - Document model, fixed payload, token lookup, and the writer
//! - [`utils`] - Atomic file writes and path expansion
//!
//! # Example
//!
//! ```rust,no_run
//! use mcpcfg_cli::mcp::{ConfigWriter, resolve_token_from_env};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let token = resolve_token_from_env("GITHUB_PERSONAL_ACCESS_TOKEN")?;
//! ConfigWriter::with_default_servers(&token).write_config(Path::new("/tmp/mcp_config.json"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
