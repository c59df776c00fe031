//! HTTP client for the hosting service's contents API.
//!
//! `GithubClient` wraps a single `reqwest::Client` together with the bearer
//! token and the API base URL. It is created once per run and reused for
//! every request, taking advantage of connection pooling. Each operation
//! issues exactly one request; there is no retry, pagination, or caching
//! layer here.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};

use super::entry::RemoteEntry;
use super::error::FetchError;
use super::location::TreeLocation;

/// Default API base for the hosting service.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// HTTP connect timeout (30 seconds).
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP read timeout (5 minutes).
const READ_TIMEOUT_SECS: u64 = 300;

/// Authenticated client for directory listings and raw file downloads.
pub struct GithubClient {
    client: Client,
    token: String,
    api_base: String,
}

// Hand-written so the token never appears in logs or panic output.
impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Creates a client for the public GitHub API.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Creates a client addressing a non-default API base.
    ///
    /// Used by tests to point the client at a local mock server.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("failed to build HTTP client with static configuration");
        let api_base: String = api_base.into();
        Self {
            client,
            token: token.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Lists the immediate children of one remote directory.
    ///
    /// Issues a single authenticated GET to the contents endpoint, with the
    /// branch passed as the `ref` query selector. The endpoint returns the
    /// full immediate-children listing in one response for this call shape;
    /// the service truncates listings of very large directories, and that
    /// boundary is known and not handled here.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] when the branch or path does not exist
    /// - [`FetchError::Unauthorized`] when the token is rejected (401/403)
    /// - [`FetchError::HttpStatus`] for any other non-success status
    /// - [`FetchError::Network`] for request-level failures
    /// - [`FetchError::Payload`] when the response is not a directory listing
    #[instrument(level = "debug", skip_all, fields(location = %location))]
    pub async fn list_directory(
        &self,
        location: &TreeLocation,
    ) -> Result<Vec<RemoteEntry>, FetchError> {
        let url = self.contents_url(location);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("ref", location.branch.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::network(url.as_str(), e))?;

        let status = response.status().as_u16();
        match status {
            404 => return Err(FetchError::not_found(location.to_string())),
            401 | 403 => return Err(FetchError::unauthorized(location.to_string(), status)),
            _ if !response.status().is_success() => {
                return Err(FetchError::http_status(location.to_string(), status));
            }
            _ => {}
        }

        let entries = response
            .json::<Vec<RemoteEntry>>()
            .await
            .map_err(|e| FetchError::payload(url.as_str(), e))?;
        debug!(entries = entries.len(), "listed directory");
        Ok(entries)
    }

    /// Fetches one file's raw bytes and writes them to `dest`.
    ///
    /// Every missing ancestor directory of `dest` is created first
    /// (idempotent); an existing file at `dest` is overwritten without
    /// warning (last write wins). The open file handle is scoped to the
    /// single write and released immediately after.
    ///
    /// # Errors
    ///
    /// - [`FetchError::DownloadFailed`] when the response status is not
    ///   success
    /// - [`FetchError::Network`] for request-level failures
    /// - [`FetchError::Io`] when directory creation or the write fails
    #[instrument(level = "debug", skip_all, fields(url = %download_url, dest = %dest.display()))]
    pub async fn download_to(&self, download_url: &str, dest: &Path) -> Result<(), FetchError> {
        let response = self
            .client
            .get(download_url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| FetchError::network(download_url, e))?;

        if !response.status().is_success() {
            return Err(FetchError::download_failed(
                download_url,
                response.status().as_u16(),
            ));
        }

        let payload = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(download_url, e))?;

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FetchError::io(parent.to_path_buf(), e))?;
        }
        tokio::fs::write(dest, &payload)
            .await
            .map_err(|e| FetchError::io(dest.to_path_buf(), e))?;

        info!(path = %dest.display(), bytes = payload.len(), "downloaded");
        Ok(())
    }

    fn contents_url(&self, location: &TreeLocation) -> String {
        let repo = &location.repo;
        if location.path.is_empty() {
            format!(
                "{}/repos/{}/{}/contents",
                self.api_base, repo.owner, repo.name
            )
        } else {
            format!(
                "{}/repos/{}/{}/contents/{}",
                self.api_base, repo.owner, repo.name, location.path
            )
        }
    }
}
