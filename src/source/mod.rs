//! Release source specifications.
//!
//! Turns what a user typed (`owner/repo`, `owner/repo@tag` or a plain
//! `https://` URL) into the matching [`AssetFinder`].

mod repo;

use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

use crate::finder::{AssetFinder, DirectAssetFinder, GitHubAssetFinder};
use crate::http::HttpClient;

pub use repo::RepoId;

/// Where the assets of a release come from.
#[derive(Debug, PartialEq, Clone)]
pub enum SourceSpec {
    /// A GitHub release, the latest one when no tag is given
    Release { repo: RepoId, tag: Option<String> },
    /// A single asset whose URL is already known
    Direct(String),
}

impl SourceSpec {
    /// Path segment after `/releases/` in the GitHub API.
    pub fn release_path(&self) -> Option<String> {
        match self {
            SourceSpec::Release { tag: None, .. } => Some("latest".to_string()),
            SourceSpec::Release { tag: Some(tag), .. } => Some(format!("tags/{}", tag)),
            SourceSpec::Direct(_) => None,
        }
    }

    /// Builds the finder for this source.
    pub fn into_finder(self, http_client: &HttpClient, api_url: &str) -> AssetFinder {
        match self {
            SourceSpec::Release { repo, tag } => {
                let finder = match tag {
                    Some(tag) => {
                        GitHubAssetFinder::tagged(http_client.clone(), repo.to_string(), &tag)
                    }
                    None => GitHubAssetFinder::latest(http_client.clone(), repo.to_string()),
                };
                finder.with_api_url(api_url).into()
            }
            SourceSpec::Direct(url) => DirectAssetFinder::new(url).into(),
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Release {
                repo,
                tag: Some(tag),
            } => write!(f, "{}@{}", repo, tag),
            SourceSpec::Release { repo, tag: None } => write!(f, "{}", repo),
            SourceSpec::Direct(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for SourceSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(SourceSpec::Direct(s.to_string()));
        }

        let (repo_part, tag) = match s.rsplit_once('@') {
            Some((_, "")) => {
                return Err(anyhow!(
                    "Invalid format: tag after @ cannot be empty. Expected 'owner/repo@tag'."
                ));
            }
            Some((repo, tag)) => (repo, Some(tag.to_string())),
            None => (s, None),
        };

        let repo = repo_part.parse::<RepoId>()?;
        Ok(SourceSpec::Release { repo, tag })
    }
}
