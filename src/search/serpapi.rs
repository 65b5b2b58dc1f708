//! SerpApi search provider
//!
//! One GET to the search endpoint; only the `link` of each organic result is kept.

use crate::config::HarvestConfig;
use crate::error::{ConfigError, SearchError};
use crate::search::SearchProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Search provider backed by the SerpApi JSON endpoint
pub struct SerpApiProvider {
    api_key: String,
    endpoint: String,
    engine: String,
    client: Client,
}

impl SerpApiProvider {
    /// Create a provider for the given API key, using the endpoint and engine from `config`
    pub fn new(api_key: String, config: &HarvestConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().build().map_err(ConfigError::Client)?;

        Ok(Self {
            api_key,
            endpoint: config.search_endpoint.clone(),
            engine: config.search_engine.clone(),
            client,
        })
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn top_urls(&self, query: &str, num_results: usize) -> Result<Vec<String>, SearchError> {
        let num = num_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("engine", self.engine.as_str()),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let data: SerpResponse = response.json().await.map_err(SearchError::Decode)?;
        data.into_links()
    }

    fn name(&self) -> &'static str {
        "serpapi"
    }
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    link: String,
}

impl SerpResponse {
    fn into_links(self) -> Result<Vec<String>, SearchError> {
        if let Some(error) = self.error {
            return Err(SearchError::Provider(error));
        }
        Ok(self.organic_results.into_iter().map(|r| r.link).collect())
    }
}
