//! Error types for the contents client.
//!
//! Every variant carries the context a diagnostic needs (location, URL, or
//! path); none of them are retried anywhere in this crate — the first error
//! aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing directories or materializing files.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The branch or remote path does not exist.
    #[error("not found: {location} (HTTP 404) - check the branch and directory path")]
    NotFound {
        /// The traversal coordinate that was requested.
        location: String,
    },

    /// The token is missing, expired, or lacks permission.
    #[error("authentication failed for {location} (HTTP {status}): check the token's permissions")]
    Unauthorized {
        /// The traversal coordinate that was requested.
        location: String,
        /// The HTTP status code (401 or 403).
        status: u16,
    },

    /// Any other non-success response from the listing endpoint.
    #[error("HTTP {status} listing {location}")]
    HttpStatus {
        /// The traversal coordinate that was requested.
        location: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Network-level failure (DNS resolution, connection refused, TLS,
    /// timeout).
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The listing payload could not be decoded as a directory listing.
    #[error("unexpected listing payload from {url}: {source}")]
    Payload {
        /// The URL that returned the payload.
        url: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// A file content fetch returned a non-success status.
    #[error("failed to download {url} (HTTP {status})")]
    DownloadFailed {
        /// The content URL that failed.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// A listing reported a file entry without a content URL.
    #[error("listing entry '{path}' is a file but carries no download URL")]
    MissingDownloadUrl {
        /// Repository-relative path of the offending entry.
        path: String,
    },

    /// Filesystem error creating directories or writing the payload.
    #[error("IO error writing {path}: {source}")]
    Io {
        /// The local path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a not-found error for a traversal coordinate.
    pub fn not_found(location: impl Into<String>) -> Self {
        Self::NotFound {
            location: location.into(),
        }
    }

    /// Creates an authentication-failure error.
    pub fn unauthorized(location: impl Into<String>, status: u16) -> Self {
        Self::Unauthorized {
            location: location.into(),
            status,
        }
    }

    /// Creates an HTTP status error for a listing request.
    pub fn http_status(location: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            location: location.into(),
            status,
        }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a payload-decode error.
    pub fn payload(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Payload {
            url: url.into(),
            source,
        }
    }

    /// Creates a failed-download error.
    pub fn download_failed(url: impl Into<String>, status: u16) -> Self {
        Self::DownloadFailed {
            url: url.into(),
            status,
        }
    }

    /// Creates an error for a file entry that has no content URL.
    pub fn missing_download_url(path: impl Into<String>) -> Self {
        Self::MissingDownloadUrl { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// Note on From trait implementations:
// There is deliberately no `From<reqwest::Error>` or `From<std::io::Error>`
// because the variants require context (location, url, path) the source
// errors don't carry. The helper constructors are the pattern used instead.
