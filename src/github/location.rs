//! Traversal coordinates addressing one remote directory.

use std::fmt;

use crate::locator::RepoRef;

/// Identifies one remote directory to list: repository, branch, and a
/// forward-slash path relative to the repository root.
///
/// The empty path denotes the repository root. The walker derives a fresh
/// location per directory via [`descend`](Self::descend); owner, name, and
/// branch stay fixed across a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLocation {
    /// The repository being walked.
    pub repo: RepoRef,
    /// Branch (ref) selector.
    pub branch: String,
    /// Slash-separated path below the repository root; empty for the root.
    pub path: String,
}

impl TreeLocation {
    /// Creates a location, normalizing the path: surrounding slashes are
    /// trimmed and `.` becomes the repository root.
    pub fn new(repo: RepoRef, branch: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = path.trim_matches('/');
        let path = if path == "." { "" } else { path };
        Self {
            repo,
            branch: branch.into(),
            path: path.to_string(),
        }
    }

    /// Returns the location of a subdirectory reported under this tree.
    ///
    /// The contents API reports entry paths relative to the repository root,
    /// so `path` replaces rather than extends the current one.
    #[must_use]
    pub fn descend(&self, path: impl Into<String>) -> Self {
        Self {
            repo: self.repo.clone(),
            branch: self.branch.clone(),
            path: path.into(),
        }
    }
}

impl fmt::Display for TreeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}@{}", self.repo, self.branch)
        } else {
            write!(f, "{}@{}:{}", self.repo, self.branch, self.path)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn repo() -> RepoRef {
        RepoRef::parse("https://github.com/user/repo").unwrap()
    }

    #[test]
    fn test_new_normalizes_dot_to_root() {
        let location = TreeLocation::new(repo(), "main", ".");
        assert_eq!(location.path, "");
    }

    #[test]
    fn test_new_trims_surrounding_slashes() {
        let location = TreeLocation::new(repo(), "main", "/docs/guide/");
        assert_eq!(location.path, "docs/guide");
    }

    #[test]
    fn test_descend_keeps_repo_and_branch() {
        let root = TreeLocation::new(repo(), "main", "");
        let child = root.descend("docs/api");
        assert_eq!(child.repo, root.repo);
        assert_eq!(child.branch, "main");
        assert_eq!(child.path, "docs/api");
    }

    #[test]
    fn test_display_includes_path_when_present() {
        let location = TreeLocation::new(repo(), "main", "docs");
        assert_eq!(location.to_string(), "user/repo@main:docs");
        let root = TreeLocation::new(repo(), "main", "");
        assert_eq!(root.to_string(), "user/repo@main");
    }
}
