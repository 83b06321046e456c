//! Cross-platform utilities
//!
//! - [`fs`] - Atomic file replacement and JSON helpers
//! - [`platform`] - Home directory lookup and path expansion

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, to_pretty_json, write_json_file};
pub use platform::{get_home_dir, is_windows, resolve_path};
