//! Error types for repository reference parsing.

use thiserror::Error;

/// Errors produced while parsing a repository reference.
#[derive(Debug, Clone, Error)]
pub enum LocatorError {
    /// The input is not a usable repository URL.
    #[error("invalid repository reference '{url}': {reason}")]
    InvalidReference {
        /// The offending input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl LocatorError {
    /// Creates an `InvalidReference` error for a URL that failed to parse.
    #[must_use]
    pub fn malformed(url: &str, parse_error: &str) -> Self {
        Self::InvalidReference {
            url: url.to_string(),
            reason: parse_error.to_string(),
        }
    }

    /// Creates an `InvalidReference` error for a URL without both an owner
    /// and a repository-name segment.
    #[must_use]
    pub fn too_few_segments(url: &str) -> Self {
        Self::InvalidReference {
            url: url.to_string(),
            reason: "expected at least two path segments (owner and repository name)".to_string(),
        }
    }
}
