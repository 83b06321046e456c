//! Core types for mcpcfg
//!
//! This module holds the error taxonomy shared by every other module:
//! - [`McpcfgError`] - Enumerated failure cases
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any [`anyhow::Error`] to an [`ErrorContext`]

pub mod error;

pub use error::{ErrorContext, McpcfgError, user_friendly_error};
