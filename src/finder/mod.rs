//! Finder abstraction for release assets.
//!
//! A finder produces the download URLs that make up a release. There are
//! exactly two kinds: one that asks the GitHub release API, and one that
//! already knows its single URL.

mod direct;
mod github;

use async_trait::async_trait;

use crate::error::FindError;

pub use direct::DirectAssetFinder;
pub use github::{DEFAULT_API_URL, GitHubAssetFinder};

/// Something that can list the asset URLs of a release.
///
/// On success the URLs are returned in the order the source lists them.
/// Every call is a single attempt with no caching between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Finder: Send + Sync {
    async fn find(&self) -> Result<Vec<String>, FindError>;
}

/// The closed set of finders.
#[derive(Debug, Clone)]
pub enum AssetFinder {
    GitHub(GitHubAssetFinder),
    Direct(DirectAssetFinder),
}

#[async_trait]
impl Finder for AssetFinder {
    async fn find(&self) -> Result<Vec<String>, FindError> {
        match self {
            AssetFinder::GitHub(finder) => finder.find().await,
            AssetFinder::Direct(finder) => finder.find().await,
        }
    }
}

impl From<GitHubAssetFinder> for AssetFinder {
    fn from(finder: GitHubAssetFinder) -> Self {
        AssetFinder::GitHub(finder)
    }
}

impl From<DirectAssetFinder> for AssetFinder {
    fn from(finder: DirectAssetFinder) -> Self {
        AssetFinder::Direct(finder)
    }
}
