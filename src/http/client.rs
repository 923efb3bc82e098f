//! HTTP client used by the release finders.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::FindError;

/// Thin wrapper around a shared reqwest Client.
///
/// Every call is a single attempt. Failures are reported through
/// [`FindError`] according to the stage that failed.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Only HTTP 200 counts as success. The response is dropped, and its
    /// connection released, on every return path.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FindError> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FindError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("GET {} returned {}", url, status);
            return Err(FindError::Api {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(FindError::Io)?;
        debug!("Read {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(FindError::Decode)
    }
}
