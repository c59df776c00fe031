//! Credential resolution.
//!
//! The bearer token is resolved exactly once at process start: an explicit
//! `--token` value wins, otherwise the `GITHUB_TOKEN` environment variable
//! is consulted. Downstream components receive the resolved token and never
//! read ambient state themselves. The token is held for the run's lifetime
//! and is never logged or persisted.

use thiserror::Error;

/// Environment variable consulted when no explicit token is given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Errors produced while resolving the credential.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Neither the flag nor the environment variable yielded a token.
    #[error(
        "a GitHub token is required: pass --token or set the GITHUB_TOKEN environment variable"
    )]
    MissingToken,
}

/// Resolves the bearer token from the explicit flag value or the
/// environment.
///
/// Empty values are treated as absent so that `--token ""` or an empty
/// exported variable cannot slip an unusable credential through.
///
/// # Errors
///
/// Returns [`AuthError::MissingToken`] when both sources are absent.
pub fn resolve_token(flag: Option<String>) -> Result<String, AuthError> {
    flag.filter(|token| !token.is_empty())
        .or_else(|| {
            std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.is_empty())
        })
        .ok_or(AuthError::MissingToken)
}
