use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::finder::DEFAULT_API_URL;
use crate::http::HttpClient;

/// User agent sent with every request; the GitHub API rejects anonymous
/// clients without one.
pub const USER_AGENT: &str = "relfind-cli";

pub struct Config {
    pub http_client: HttpClient,
    pub api_url: String,
}

impl Config {
    pub fn new(api_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            debug!("Using request timeout of {:?}", timeout);
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        debug!("Using API at {}", api_url);

        Ok(Self {
            http_client: HttpClient::new(client),
            api_url,
        })
    }
}
