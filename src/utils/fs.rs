//! File system utilities for writing configuration files safely.
//!
//! # Key Features
//!
//! - **Atomic replace**: content goes to a temporary file in the target's own
//!   directory, is synced, and is then renamed over the target
//! - **No implicit directories**: a missing parent directory is an error, and
//!   nothing is created on disk in that case
//! - **Private by default**: on Unix the temporary file (and therefore the
//!   final file) is created with mode `0600`
//! - **Symlinks are written through**: when the target is a symbolic link, the
//!   file it points to is replaced and the link itself is left in place
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcpcfg_cli::utils::fs::{atomic_write, write_json_file};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! atomic_write(Path::new("/tmp/notes.txt"), b"hello")?;
//! write_json_file(Path::new("/tmp/mcp_config.json"), &serde_json::json!({"mcpServers": {}}))?;
//! # Ok(())
//! # }
//! ```

use crate::core::McpcfgError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upper bound on symlink hops, matching the common `SYMLOOP_MAX`.
const MAX_SYMLINK_HOPS: usize = 40;

/// Returns the directory a file at `path` lives in.
///
/// A bare file name resolves to the current directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Follows symbolic links starting at `path` to the file that should be replaced.
///
/// Relative link destinations are resolved against the directory holding the
/// link. A dangling link resolves to its missing destination.
fn resolve_symlinks(path: &Path) -> Result<PathBuf, McpcfgError> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let dest = fs::read_link(&current)
                    .map_err(|e| McpcfgError::from_io("read symlink", &current, &e))?;
                current = parent_dir(&current).join(dest);
            }
            _ => return Ok(current),
        }
    }

    Err(McpcfgError::FileSystemError {
        operation: "resolve symlink".to_string(),
        path: path.display().to_string(),
        reason: "too many levels of symbolic links".to_string(),
    })
}

/// Atomically replaces the file at `path` with `content`.
///
/// 0. Follows `path` through any symbolic links
/// 1. Verifies the parent directory exists (it is never created)
/// 2. Writes the content to a uniquely named temporary file in that directory
/// 3. Syncs the temporary file to disk
/// 4. Renames it over `path`
///
/// If any step fails, the temporary file is removed and `path` keeps its
/// previous content (or stays absent).
///
/// # Errors
///
/// - [`McpcfgError::ParentDirectoryMissing`] when the parent directory does not exist
/// - [`McpcfgError::PermissionDenied`] when the OS rejects a step
/// - [`McpcfgError::FileSystemError`] for any other I/O failure
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let resolved = resolve_symlinks(path)?;
    if resolved != path {
        debug!("{} is a symlink to {}", path.display(), resolved.display());
    }
    let path = resolved.as_path();
    let parent = parent_dir(path);

    if !parent.is_dir() {
        return Err(McpcfgError::ParentDirectoryMissing {
            path: parent.display().to_string(),
        }
        .into());
    }

    let mut temp = tempfile::Builder::new()
        .prefix(".mcpcfg-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| McpcfgError::from_io("create temp file", parent, &e))?;

    debug!("Writing {} bytes to {}", content.len(), temp.path().display());

    temp.write_all(content)
        .map_err(|e| McpcfgError::from_io("write temp file", temp.path(), &e))?;

    temp.as_file()
        .sync_all()
        .map_err(|e| McpcfgError::from_io("sync temp file", temp.path(), &e))?;

    temp.persist(path).map_err(|e| McpcfgError::from_io("replace target file", path, &e.error))?;

    Ok(())
}

/// Serializes `data` as JSON with 2-space indentation and no trailing newline.
///
/// # Errors
///
/// Returns [`McpcfgError::SerializationError`] if `data` cannot be represented as JSON.
pub fn to_pretty_json<T>(data: &T) -> Result<String, McpcfgError>
where
    T: serde::Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(data)?)
}

/// Writes data as pretty JSON to a file atomically.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: serde::Serialize + ?Sized,
{
    let json = to_pretty_json(data)?;
    atomic_write(path, json.as_bytes())
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
