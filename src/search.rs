use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// User-Agent sent on backend calls. Some instances refuse requests that
/// don't look like a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search request failed with status {0}")]
    Status(StatusCode),
    #[error("search response was not valid JSON: {0}")]
    Decode(reqwest::Error),
    #[error("invalid search results format")]
    InvalidResults,
}

/// One entry of the backend's `results` array. Only the URL is consumed;
/// everything else the backend sends is ignored.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub url: String,
}

/// Client for a SearXNG-style search backend.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<SearchClient> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid search backend URL: {base_url}"))?;
        // Root-relative join: a path prefix on the base URL is dropped,
        // the backend serves /search at its root.
        let endpoint = base
            .join("/search")
            .with_context(|| format!("cannot resolve /search against {base_url}"))?;
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build search HTTP client")?;
        Ok(SearchClient { client, endpoint })
    }

    /// Query the backend and return its ranked result URLs, in order.
    pub async fn search(&self, query: &str) -> std::result::Result<Vec<SearchHit>, SearchError> {
        tracing::info!("search URL: {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        tracing::info!("search response status: {status}");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!("search response error: {text}");
            return Err(SearchError::Status(status));
        }

        let body: Value = response.json().await.map_err(SearchError::Decode)?;
        let results = body
            .get("results")
            .and_then(Value::as_array)
            .ok_or(SearchError::InvalidResults)?;

        let hits = results
            .iter()
            .filter_map(|entry| match entry.get("url").and_then(Value::as_str) {
                Some(url) => Some(SearchHit {
                    url: url.to_string(),
                }),
                None => {
                    tracing::warn!("skipping search result without a url: {entry}");
                    None
                }
            })
            .collect();

        Ok(hits)
    }
}
