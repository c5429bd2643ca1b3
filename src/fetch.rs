use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("non-success response status {0}")]
    Status(StatusCode),
}

/// Fetches result pages with default headers, unlike the search client.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<PageFetcher> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build page HTTP client")?;
        Ok(PageFetcher { client })
    }

    /// GET a result URL and return the body as text. Non-success statuses
    /// are errors so the caller can skip the page.
    pub async fn fetch_html(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}
