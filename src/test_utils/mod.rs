//! Test utilities for mcpcfg
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suite.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A scratch directory holding a target path for the MCP configuration.
///
/// The directory (and anything written into it) is removed on drop.
pub struct ScratchTarget {
    dir: TempDir,
    target: PathBuf,
}

impl ScratchTarget {
    /// Create a scratch directory with the target `mcp_config.json` inside it.
    /// The target file itself is not created.
    pub fn new() -> std::io::Result<Self> {
        Self::with_file_name("mcp_config.json")
    }

    /// Like [`new`](Self::new) with a custom file name.
    pub fn with_file_name(name: &str) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let target = dir.path().join(name);
        Ok(Self {
            dir,
            target,
        })
    }

    /// The scratch directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// The target file path.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// A path inside the scratch directory that does not exist.
    pub fn missing_dir_target(&self) -> PathBuf {
        self.dir.path().join("missing").join("mcp_config.json")
    }

    /// Read the target file as a string.
    pub fn read(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.target)
    }
}
