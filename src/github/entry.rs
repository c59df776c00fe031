//! Serde model of one contents-API listing entry.

use serde::Deserialize;

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file with downloadable content.
    File,
    /// A subdirectory.
    Dir,
    /// Anything else the API reports (symlinks, submodules). The walker
    /// skips these silently.
    #[serde(other)]
    Other,
}

/// One child (file or directory) reported by a single directory-listing
/// call.
///
/// Entries are consumed immediately by the walker while it processes one
/// directory's children; they are never cached or persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    /// Entry kind, from the payload's `type` field.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Base name of the entry.
    pub name: String,
    /// Repository-relative path, forward-slash separated.
    pub path: String,
    /// Raw content URL; present iff `kind` is [`EntryKind::File`].
    pub download_url: Option<String>,
}
