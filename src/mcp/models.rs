use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The MCP configuration document written to `mcp_config.json`.
///
/// Servers keep insertion order so the serialized file is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpConfig {
    /// Map of server names to their configurations
    #[serde(rename = "mcpServers")]
    pub mcp_servers: IndexMap<String, McpServerConfig>,
}

/// A single command-based MCP server entry.
///
/// Field order here is the field order in the written file: `command`, `args`,
/// then `env` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerConfig {
    /// The executable the host spawns to start the server
    pub command: String,

    /// Arguments passed to the command, in command-line order
    #[serde(default)]
    pub args: Vec<String>,

    /// Extra environment variables for the spawned process
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
}

impl McpServerConfig {
    /// Create an entry with no environment variables.
    pub fn new<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: None,
        }
    }

    /// Add an environment variable, creating the `env` map on first use.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.get_or_insert_with(IndexMap::new).insert(key.into(), value.into());
        self
    }
}

impl McpConfig {
    /// Add or replace a server. Returns the previous entry under that name.
    pub fn insert_server(
        &mut self,
        name: impl Into<String>,
        server: McpServerConfig,
    ) -> Option<McpServerConfig> {
        self.mcp_servers.insert(name.into(), server)
    }

    /// Server names in document order.
    pub fn server_names(&self) -> impl Iterator<Item = &str> {
        self.mcp_servers.keys().map(String::as_str)
    }

    /// A copy of this document with every environment value passed through `mask`.
    ///
    /// Used when printing a document that carries credentials.
    #[must_use]
    pub fn map_env_values(&self, mask: impl Fn(&str) -> String) -> Self {
        let mut masked = self.clone();
        for server in masked.mcp_servers.values_mut() {
            if let Some(env) = server.env.as_mut() {
                for value in env.values_mut() {
                    *value = mask(value.as_str());
                }
            }
        }
        masked
    }
}
