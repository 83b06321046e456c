//! The fixed set of MCP servers written by mcpcfg.

use crate::mcp::models::{McpConfig, McpServerConfig};

/// Server name of the shadcn/ui component registry server.
pub const SHADCN: &str = "shadcn";

/// Server name of the Next.js devtools server.
pub const NEXT_DEVTOOLS: &str = "next-devtools";

/// Server name of the GitHub server.
pub const GITHUB: &str = "github";

/// Environment key the GitHub server reads its token from.
pub const GITHUB_TOKEN_KEY: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Build the document with the three managed servers, in order:
/// `shadcn`, `next-devtools`, `github`.
///
/// `github_token` is injected into the `github` entry's environment.
#[must_use]
pub fn default_servers(github_token: &str) -> McpConfig {
    let mut config = McpConfig::default();

    config.insert_server(SHADCN, McpServerConfig::new("npx", ["shadcn@latest", "mcp"]));
    config.insert_server(
        NEXT_DEVTOOLS,
        McpServerConfig::new("npx", ["-y", "next-devtools-mcp@latest"]),
    );
    config.insert_server(
        GITHUB,
        McpServerConfig::new("npx", ["-y", "@modelcontextprotocol/server-github"])
            .with_env(GITHUB_TOKEN_KEY, github_token),
    );

    config
}
