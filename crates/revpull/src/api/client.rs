//! HTTP client for the SerpApi reviews search API

use crate::api::types::ReviewPage;
use crate::config::RunConfig;
use crate::error::Result;
use crate::fetch::ReviewSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// ============================================================================
// API Client Constants
// ============================================================================

/// Default SerpApi endpoint. Overridable for tests via `with_base_url`
/// or the `SERPAPI_BASE_URL` environment variable in the CLI.
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// Search engine identifier for Google Maps reviews.
pub const ENGINE: &str = "google_maps_reviews";

/// Timeout for a single page request, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Client for the reviews search API
pub struct SerpApiClient {
    client: Client,
    base_url: String,
    data_id: String,
    hl: String,
    api_key: String,
}

impl SerpApiClient {
    /// Create a client for the location and credential in `config`
    pub fn new(config: &RunConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            data_id: config.data_id.clone(),
            hl: config.hl.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Override the endpoint base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a single page of reviews
    async fn get_page(&self, cursor: Option<&str>) -> Result<ReviewPage> {
        let url = format!("{}/search.json", self.base_url);

        let mut params = vec![
            ("engine", ENGINE),
            ("data_id", self.data_id.as_str()),
            ("hl", self.hl.as_str()),
            ("api_key", self.api_key.as_str()),
        ];
        if let Some(token) = cursor {
            params.push(("next_page_token", token));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<ReviewPage>().await?;
        Ok(page)
    }
}

#[async_trait]
impl ReviewSource for SerpApiClient {
    async fn fetch_page(&self, cursor: Option<&str>) -> anyhow::Result<ReviewPage> {
        Ok(self.get_page(cursor).await?)
    }
}
