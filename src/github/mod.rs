//! Authenticated GitHub contents-API client.
//!
//! This module provides the two network operations of the tool: listing the
//! immediate children of one remote directory, and downloading one file's
//! raw bytes to a local destination. Every request carries an
//! `Authorization: Bearer <token>` header.
//!
//! # Example
//!
//! ```no_run
//! use ghfetch_core::github::{GithubClient, TreeLocation};
//! use ghfetch_core::locator::RepoRef;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = RepoRef::parse("https://github.com/owner/repo")?;
//! let client = GithubClient::new("ghp_token");
//! let entries = client
//!     .list_directory(&TreeLocation::new(repo, "main", "docs"))
//!     .await?;
//! println!("{} entries", entries.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod entry;
mod error;
mod location;

pub use client::GithubClient;
pub use entry::{EntryKind, RemoteEntry};
pub use error::FetchError;
pub use location::TreeLocation;
