// src/fetch/mod.rs

use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

pub mod links;

/// Thin GET-bytes wrapper around a reqwest client. No retries: the first
/// failure is returned to the caller.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }

    /// Fetch `url`, failing on timeout or any non-success status.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
        debug!(%url, "fetching");
        let transport = |source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        };
        let bytes = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .bytes()
            .await
            .map_err(transport)?;
        debug!(%url, len = bytes.len(), "fetched");
        Ok(bytes.to_vec())
    }
}
