use async_trait::async_trait;

use crate::error::FindError;

use super::Finder;

/// Returns its embedded URL as the only asset.
///
/// The URL is neither validated nor fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectAssetFinder {
    url: String,
}

impl DirectAssetFinder {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Finder for DirectAssetFinder {
    async fn find(&self) -> Result<Vec<String>, FindError> {
        Ok(vec![self.url.clone()])
    }
}
