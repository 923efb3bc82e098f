//! GitHub release finder.

use async_trait::async_trait;
use log::debug;

use crate::error::FindError;
use crate::http::HttpClient;

use super::Finder;

/// Base URL of the public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    /// Only the asset list of a release is of interest, everything else in
    /// the payload is skipped.
    #[derive(Deserialize, Debug)]
    pub struct Release {
        #[serde(default)]
        pub assets: Option<Vec<Option<Asset>>>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        #[serde(default)]
        pub browser_download_url: Option<String>,
    }

    impl Release {
        /// Assets without a download URL, and `null` entries, still take a
        /// slot, as "".
        pub fn download_urls(self) -> Vec<String> {
            self.assets
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.and_then(|a| a.browser_download_url).unwrap_or_default())
                .collect()
        }
    }
}

/// Finds the assets of one release of a GitHub repository.
///
/// `tag` is the path segment after `/releases/`: either `latest` or
/// `tags/<tag>`. Both `repo` and `tag` are used verbatim.
#[derive(Debug, Clone)]
pub struct GitHubAssetFinder {
    http_client: HttpClient,
    api_url: String,
    repo: String,
    tag: String,
}

impl GitHubAssetFinder {
    pub fn new(http_client: HttpClient, repo: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: DEFAULT_API_URL.to_string(),
            repo: repo.into(),
            tag: tag.into(),
        }
    }

    /// Finder for the most recent release.
    pub fn latest(http_client: HttpClient, repo: impl Into<String>) -> Self {
        Self::new(http_client, repo, "latest")
    }

    /// Finder for the release with a bare tag such as `v1.2.3`.
    pub fn tagged(http_client: HttpClient, repo: impl Into<String>, tag: &str) -> Self {
        Self::new(http_client, repo, format!("tags/{}", tag))
    }

    /// Points the finder at another API root, e.g. a GitHub Enterprise host
    /// or a mock server.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn request_url(&self) -> String {
        format!("{}/repos/{}/releases/{}", self.api_url, self.repo, self.tag)
    }
}

#[async_trait]
impl Finder for GitHubAssetFinder {
    #[tracing::instrument(skip(self), fields(repo = %self.repo, tag = %self.tag))]
    async fn find(&self) -> Result<Vec<String>, FindError> {
        let url = self.request_url();
        debug!("Fetching release assets from {}...", url);

        // A `null` body is an empty release.
        let release: Option<api::Release> = self.http_client.get_json(&url).await?;
        let urls = release.map(api::Release::download_urls).unwrap_or_default();

        debug!("Found {} asset(s) for {}@{}", urls.len(), self.repo, self.tag);
        Ok(urls)
    }
}
