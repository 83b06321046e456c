//! Credential lookup for servers that need a token at write time.
//!
//! Tokens are never compiled in. They are read from an environment variable
//! when the document is built; the lookup function is injectable so callers
//! (and tests) do not have to mutate the process environment.

use crate::core::McpcfgError;
use tracing::debug;

/// Variable consulted for the GitHub token unless configured otherwise.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Resolve a token from `var` using `lookup`.
///
/// Surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns [`McpcfgError::MissingCredential`] if the variable is unset or blank.
pub fn resolve_token<F>(var: &str, lookup: F) -> Result<String, McpcfgError>
where
    F: FnOnce(&str) -> Option<String>,
{
    let token = lookup(var).map(|value| value.trim().to_string()).unwrap_or_default();

    if token.is_empty() {
        return Err(McpcfgError::MissingCredential {
            var: var.to_string(),
        });
    }

    debug!("Resolved token from {var} ({})", mask_token(&token));
    Ok(token)
}

/// Resolve a token from the process environment.
///
/// # Errors
///
/// Returns [`McpcfgError::MissingCredential`] if the variable is unset, blank,
/// or not valid Unicode.
pub fn resolve_token_from_env(var: &str) -> Result<String, McpcfgError> {
    resolve_token(var, |name| std::env::var(name).ok())
}

/// Render a token for display: the first four characters followed by `****`.
///
/// Tokens of eight characters or fewer are fully hidden.
#[must_use]
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}****")
}
