//! ghfetch Core Library
//!
//! This library recursively mirrors files matching a filename suffix from a
//! GitHub repository subtree to a local directory, authenticating every
//! request with a bearer token.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`locator`] - Repository URL parsing into an (owner, name) reference
//! - [`github`] - Authenticated contents-API client: directory listings and
//!   raw file downloads
//! - [`walker`] - Work-stack traversal that mirrors matching files locally
//! - [`auth`] - One-shot credential resolution (flag or environment)

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod github;
pub mod locator;
pub mod walker;

// Re-export commonly used types
pub use auth::{AuthError, TOKEN_ENV_VAR, resolve_token};
pub use github::{EntryKind, FetchError, GithubClient, RemoteEntry, TreeLocation};
pub use locator::{LocatorError, RepoRef};
pub use walker::{WalkSummary, walk_tree};
