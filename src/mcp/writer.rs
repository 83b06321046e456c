use crate::mcp::models::McpConfig;
use crate::mcp::servers::default_servers;
use crate::utils;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Serializes an [`McpConfig`] and writes it over a target file.
///
/// Every write is a full replacement: prior content at the target is never
/// read or merged. The replacement is atomic, so a failed write leaves the
/// target exactly as it was.
#[derive(Debug, Clone)]
pub struct ConfigWriter {
    document: McpConfig,
}

impl ConfigWriter {
    /// Create a writer for an arbitrary document.
    #[must_use]
    pub const fn new(document: McpConfig) -> Self {
        Self {
            document,
        }
    }

    /// Create a writer for the fixed three-server document.
    #[must_use]
    pub fn with_default_servers(github_token: &str) -> Self {
        Self::new(default_servers(github_token))
    }

    /// The document this writer persists.
    #[must_use]
    pub const fn document(&self) -> &McpConfig {
        &self.document
    }

    /// The exact text [`write_config`](Self::write_config) would write.
    ///
    /// # Errors
    ///
    /// Returns [`McpcfgError::SerializationError`](crate::core::McpcfgError::SerializationError)
    /// if the document cannot be serialized.
    pub fn render(&self) -> Result<String> {
        utils::to_pretty_json(&self.document).context("Failed to serialize MCP configuration")
    }

    /// Serialize the document and atomically replace `target` with it.
    ///
    /// The document is serialized before the file system is touched, so a
    /// serialization failure never affects the target. A symlinked target is
    /// written through: the file it points to receives the document.
    ///
    /// # Errors
    ///
    /// Returns an I/O-class [`McpcfgError`](crate::core::McpcfgError) when the
    /// parent directory is missing or the write is rejected, and
    /// [`McpcfgError::SerializationError`](crate::core::McpcfgError::SerializationError)
    /// when serialization fails.
    pub fn write_config(&self, target: &Path) -> Result<()> {
        debug!(
            "Writing {} MCP server(s) to {}",
            self.document.mcp_servers.len(),
            target.display()
        );

        utils::write_json_file(target, &self.document).with_context(|| {
            format!("Failed to write MCP configuration to: {}", target.display())
        })?;

        info!("Updated {}", target.display());
        Ok(())
    }
}

/// The line printed after a successful write, e.g.
/// `Successfully updated mcp_config.json`.
#[must_use]
pub fn confirmation_message(target: &Path) -> String {
    let name = target.file_name().map_or_else(
        || target.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    format!("Successfully updated {name}")
}
