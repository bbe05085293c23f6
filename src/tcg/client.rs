//! HTTP client for the Pokemon TCG API.

use crate::config::Config;
use crate::tcg::models::CardSearchResponse;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

const TCG_API_BASE: &str = "https://api.pokemontcg.io";

/// Trait for card price lookups - enables mocking for tests.
#[async_trait]
pub trait CardPricing: Send + Sync {
    /// Searches cards by name, newest sets first.
    async fn search_cards(&self, name: &str) -> Result<CardSearchResponse>;
}

/// Pokemon TCG API client.
pub struct TcgClient {
    client: Client,
    api_key: String,
    page_size: u32,
    base_url: String,
}

impl std::fmt::Debug for TcgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcgClient")
            .field("page_size", &self.page_size)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TcgClient {
    /// Creates a new pricing client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, TCG_API_BASE.to_string())
    }

    /// Creates a new pricing client with a custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let api_key = config.require_tcg_api_key()?.to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, api_key, page_size: config.tcg_page_size, base_url })
    }
}

#[async_trait]
impl CardPricing for TcgClient {
    async fn search_cards(&self, name: &str) -> Result<CardSearchResponse> {
        let query = format!("name:\"{}\"", name);
        let url = format!(
            "{}/v2/cards?q={}&pageSize={}&orderBy={}",
            self.base_url,
            urlencoding::encode(&query),
            self.page_size,
            urlencoding::encode("-set.releaseDate"),
        );

        info!("Looking up card prices: {}", name);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send price request for '{}'", name))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Pricing API request for '{}' failed with status: {}", name, status);
        }

        let body = response.text().await.context("Failed to read pricing response body")?;
        serde_json::from_str(&body)
            .with_context(|| format!("Unexpected pricing response shape for '{}'", name))
    }
}
