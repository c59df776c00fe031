//! Work-stack traversal of a remote directory tree.
//!
//! The walker visits every directory reachable from a root location and
//! mirrors each file whose name satisfies the selection predicate to a path
//! under the local root that matches the remote path exactly. Traversal uses
//! an explicit stack of pending locations rather than native recursion, so
//! stack usage stays bounded on deep trees and there is a single loop head
//! between listings.
//!
//! Execution is strictly sequential: one listing or download is in flight at
//! a time, and the first error from either aborts the whole walk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::github::{EntryKind, FetchError, GithubClient, TreeLocation};

/// Counters accumulated over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Files materialized under the local root.
    pub files_downloaded: u64,
    /// Directory listings issued, including the root.
    pub directories_listed: u64,
}

/// Walks the remote tree rooted at `root`, mirroring matching files.
///
/// For each directory the client lists the immediate children; subdirectory
/// entries are pushed onto the pending stack for a later listing, file
/// entries whose name satisfies `select` are downloaded to `local_root`
/// joined with the entry's remote path, and every other entry (non-matching
/// files, symlinks, submodules) is skipped silently. A branch ends when a
/// directory has no children left to queue.
///
/// # Errors
///
/// Propagates the first [`FetchError`] from any listing or download
/// unchanged; no further entries are attempted after a failure. A file entry
/// selected for download but missing its content URL is a
/// [`FetchError::MissingDownloadUrl`].
pub async fn walk_tree<F>(
    client: &GithubClient,
    root: &TreeLocation,
    local_root: &Path,
    select: F,
) -> Result<WalkSummary, FetchError>
where
    F: Fn(&str) -> bool,
{
    let mut summary = WalkSummary::default();
    let mut pending = vec![root.clone()];

    while let Some(location) = pending.pop() {
        let entries = client.list_directory(&location).await?;
        summary.directories_listed += 1;
        debug!(location = %location, entries = entries.len(), "processing directory");

        for entry in entries {
            match entry.kind {
                EntryKind::Dir => pending.push(location.descend(entry.path)),
                EntryKind::File if select(&entry.name) => {
                    let url = entry
                        .download_url
                        .as_deref()
                        .ok_or_else(|| FetchError::missing_download_url(entry.path.as_str()))?;
                    let dest = destination(local_root, &entry.path);
                    client.download_to(url, &dest).await?;
                    summary.files_downloaded += 1;
                }
                EntryKind::File | EntryKind::Other => {}
            }
        }
    }

    Ok(summary)
}

/// Joins a slash-separated remote path onto the local root segment by
/// segment, so the mirrored layout matches the remote one on any platform.
fn destination(local_root: &Path, remote_path: &str) -> PathBuf {
    let mut dest = local_root.to_path_buf();
    for segment in remote_path.split('/').filter(|s| !s.is_empty()) {
        dest.push(segment);
    }
    dest
}
