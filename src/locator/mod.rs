//! Repository reference parsing.
//!
//! Turns a user-supplied repository URL into a stable `(owner, name)` pair.
//! The pair is derived once at the start of a run and addresses every
//! subsequent contents-API request.

mod error;

pub use error::LocatorError;

use std::fmt;

use url::Url;

/// A parsed repository reference: the `(owner, name)` pair addressing one
/// repository on the hosting service.
///
/// Derived once from the command-line URL and read-only for the rest of the
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name, without any `.git` suffix.
    pub name: String,
}

impl RepoRef {
    /// Parses a repository URL into a [`RepoRef`].
    ///
    /// The URL's path must contain at least two non-empty segments: the
    /// owner and the repository name. The name segment may carry a trailing
    /// `.git`, which is stripped. Anything after the first two segments is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghfetch_core::locator::RepoRef;
    ///
    /// let repo = RepoRef::parse("https://github.com/rust-lang/rust.git").unwrap();
    /// assert_eq!(repo.owner, "rust-lang");
    /// assert_eq!(repo.name, "rust");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::InvalidReference`] when the URL cannot be
    /// parsed at all or carries fewer than two path segments.
    pub fn parse(url: &str) -> Result<Self, LocatorError> {
        let parsed = Url::parse(url).map_err(|e| LocatorError::malformed(url, &e.to_string()))?;

        let mut segments = parsed
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty());

        let owner = segments
            .next()
            .ok_or_else(|| LocatorError::too_few_segments(url))?;
        let name = segments
            .next()
            .ok_or_else(|| LocatorError::too_few_segments(url))?;
        let name = name.strip_suffix(".git").unwrap_or(name);

        // A path like /owner/.git strips down to nothing usable.
        if name.is_empty() {
            return Err(LocatorError::too_few_segments(url));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_repo_url() {
        let repo = RepoRef::parse("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_strips_git_suffix() {
        let repo = RepoRef::parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_ignores_extra_path_segments() {
        let repo = RepoRef::parse("https://github.com/user/repo/tree/main/docs").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        let repo = RepoRef::parse("https://github.com/user/repo/").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_any_host_is_accepted() {
        // The reference format is host-agnostic; only the path matters.
        let repo = RepoRef::parse("https://github.example.corp/team/tool").unwrap();
        assert_eq!(repo.owner, "team");
        assert_eq!(repo.name, "tool");
    }

    #[test]
    fn test_parse_rejects_single_segment() {
        let result = RepoRef::parse("https://github.com/owner");
        assert!(matches!(
            result,
            Err(LocatorError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_path() {
        let result = RepoRef::parse("https://github.com/");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_url() {
        let result = RepoRef::parse("not a url at all");
        assert!(matches!(
            result,
            Err(LocatorError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bare_git_suffix_name() {
        let result = RepoRef::parse("https://github.com/owner/.git");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_is_owner_slash_name() {
        let repo = RepoRef::parse("https://github.com/user/repo").unwrap();
        assert_eq!(repo.to_string(), "user/repo");
    }
}
