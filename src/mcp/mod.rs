//! MCP (Model Context Protocol) server configuration.
//!
//! This module builds the MCP configuration document and persists it:
//! - [`models`] - `McpConfig` / `McpServerConfig`, serialized as `mcpServers`
//! - [`servers`] - The fixed `shadcn`, `next-devtools` and `github` entries
//! - [`credentials`] - Token lookup for the `github` entry
//! - [`writer`] - Serialization and atomic replacement of the target file
//!
//! # File Format
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "github": {
//!       "command": "npx",
//!       "args": [
//!         "-y",
//!         "@modelcontextprotocol/server-github"
//!       ],
//!       "env": {
//!         "GITHUB_PERSONAL_ACCESS_TOKEN": "<token>"
//!       }
//!     }
//!   }
//! }
//! ```

pub mod credentials;
pub mod models;
pub mod servers;
pub mod writer;

pub use credentials::{DEFAULT_TOKEN_ENV, mask_token, resolve_token, resolve_token_from_env};
pub use models::{McpConfig, McpServerConfig};
pub use servers::{GITHUB_TOKEN_KEY, default_servers};
pub use writer::{ConfigWriter, confirmation_message};
