//! Error handling for mcpcfg
//!
//! This module provides the typed error taxonomy and user-friendly error reporting
//! for the `mcpcfg` binary. The error system follows two rules:
//! 1. **Strongly-typed errors** ([`McpcfgError`]) for failures callers may want to match on
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions for the CLI
//!
//! Library functions return [`anyhow::Result`] and attach context with
//! `.with_context(..)`. Typed failures are raised as [`McpcfgError`] values and
//! survive context wrapping, so [`user_friendly_error`] can downcast them back.
//!
//! # Error Categories
//!
//! - **File system**: [`McpcfgError::ParentDirectoryMissing`], [`McpcfgError::PermissionDenied`],
//!   [`McpcfgError::FileSystemError`]
//! - **Serialization**: [`McpcfgError::SerializationError`]
//! - **Settings**: [`McpcfgError::MissingCredential`], [`McpcfgError::ConfigParseError`],
//!   [`McpcfgError::HomeDirNotFound`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcpcfg_cli::core::{McpcfgError, user_friendly_error};
//!
//! let error = anyhow::Error::from(McpcfgError::MissingCredential {
//!     var: "GITHUB_PERSONAL_ACCESS_TOKEN".to_string(),
//! });
//! let ctx = user_friendly_error(error);
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Failure cases of mcpcfg.
///
/// Variants carry owned strings rather than borrowed paths so the error can be
/// moved through `anyhow` and cloned into an [`ErrorContext`].
#[derive(Error, Debug, Clone)]
pub enum McpcfgError {
    /// The directory that should contain the target file does not exist.
    ///
    /// The directory is never created on the caller's behalf.
    #[error("Parent directory does not exist: {path}")]
    ParentDirectoryMissing {
        /// The missing directory
        path: String,
    },

    /// An I/O step was rejected by the operating system.
    #[error("Permission denied: {operation} ({path})")]
    PermissionDenied {
        /// The operation that was denied (e.g., "create temp file")
        operation: String,
        /// The path involved
        path: String,
    },

    /// An I/O step failed for a reason other than permissions.
    #[error("File system error: {operation} ({path}): {reason}")]
    FileSystemError {
        /// The operation that failed
        operation: String,
        /// The path involved
        path: String,
        /// The underlying error message
        reason: String,
    },

    /// The document could not be serialized to JSON.
    #[error("Failed to serialize MCP configuration: {reason}")]
    SerializationError {
        /// The serializer's error message
        reason: String,
    },

    /// The credential injected into the `github` entry is unset or empty.
    #[error("Environment variable {var} is not set or is empty")]
    MissingCredential {
        /// The environment variable that was consulted
        var: String,
    },

    /// The global settings file exists but is not valid TOML.
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// The settings file path
        file: String,
        /// The parser's error message
        reason: String,
    },

    /// No home directory could be determined for a default path.
    #[error("Unable to determine home directory")]
    HomeDirNotFound,

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl From<serde_json::Error> for McpcfgError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: error.to_string(),
        }
    }
}

impl McpcfgError {
    /// Classify an [`std::io::Error`] raised while performing `operation` on `path`.
    ///
    /// Permission failures become [`McpcfgError::PermissionDenied`]; everything
    /// else becomes [`McpcfgError::FileSystemError`].
    #[must_use]
    pub fn from_io(operation: &str, path: &Path, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                operation: operation.to_string(),
                path: path.display().to_string(),
            },
            _ => Self::FileSystemError {
                operation: operation.to_string(),
                path: path.display().to_string(),
                reason: error.to_string(),
            },
        }
    }

    /// Whether this error belongs to the I/O class (as opposed to
    /// serialization or settings failures).
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::ParentDirectoryMissing { .. }
                | Self::PermissionDenied { .. }
                | Self::FileSystemError { .. }
        )
    }
}

/// Error wrapper with user-facing details and a suggested fix.
///
/// # Examples
///
/// ```rust,no_run
/// use mcpcfg_cli::core::{ErrorContext, McpcfgError};
///
/// let context = ErrorContext::new(McpcfgError::HomeDirNotFound)
///     .with_suggestion("Pass --target with an absolute path")
///     .with_details("The default target lives under the home directory");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: McpcfgError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: McpcfgError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    ///
    /// Details are displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Typed [`McpcfgError`]s anywhere in the chain get tailored suggestions.
/// Bare [`std::io::Error`]s are classified by kind. Anything else is reported
/// with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(mcpcfg_error) = error.downcast_ref::<McpcfgError>() {
        let ctx = create_error_context(mcpcfg_error.clone());
        // Keep the outermost context message so the user sees what was being done
        let outer = error.to_string();
        if ctx.details.is_none() && outer != mcpcfg_error.to_string() {
            return ctx.with_details(outer);
        }
        return ctx;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(McpcfgError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check the ownership and permissions of the target directory")
                .with_details(error.to_string());
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(McpcfgError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(McpcfgError::Other {
        message,
    })
}

/// Map each [`McpcfgError`] variant to tailored suggestions and details.
fn create_error_context(error: McpcfgError) -> ErrorContext {
    match &error {
        McpcfgError::ParentDirectoryMissing {
            path,
        } => {
            let suggestion = format!("Create the directory first: mkdir -p {path}");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("mcpcfg does not create missing directories; nothing was written")
        }

        McpcfgError::PermissionDenied {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the ownership and permissions of the target directory")
            .with_details("The existing file, if any, was left unchanged"),

        McpcfgError::FileSystemError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the target path is valid and the disk is writable")
            .with_details("The existing file, if any, was left unchanged"),

        McpcfgError::SerializationError {
            ..
        } => ErrorContext::new(error)
            .with_details("The MCP configuration could not be converted to JSON; nothing was written"),

        McpcfgError::MissingCredential {
            var,
        } => {
            let suggestion =
                format!("Export {var} with your GitHub personal access token, or pick another variable with --token-env");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("The github MCP server needs a token; it is never stored in the source")
        }

        McpcfgError::ConfigParseError {
            file,
            reason,
        } => {
            let suggestion = format!(
                "Check the TOML syntax in {file}. Supported keys are target_path and token_env"
            );
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        McpcfgError::HomeDirNotFound => ErrorContext::new(error)
            .with_suggestion("Pass --target (or set MCPCFG_TARGET) to an absolute path")
            .with_details("The default target and config locations live under the home directory"),

        McpcfgError::Other { .. } => ErrorContext::new(error),
    }
}
