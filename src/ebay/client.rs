//! HTTP client for the eBay Trading API (`GetMyeBaySelling`).

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

const EBAY_API_ENDPOINT: &str = "https://api.ebay.com/ws/api.dll";
const COMPATIBILITY_LEVEL: &str = "967";
const SITE_ID: &str = "0";

/// Trait for fetching a seller's active listings - enables mocking for tests.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetches the first page of active listings and returns the raw XML
    /// response body.
    async fn active_listings(&self) -> Result<String>;
}

/// eBay Trading API client.
pub struct EbayClient {
    client: Client,
    auth_token: String,
    entries_per_page: u32,
    base_url: String,
}

impl std::fmt::Debug for EbayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EbayClient")
            .field("entries_per_page", &self.entries_per_page)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl EbayClient {
    /// Creates a new eBay client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, EBAY_API_ENDPOINT.to_string())
    }

    /// Creates a new eBay client with a custom endpoint (for testing).
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let auth_token = config.require_ebay_token()?.to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, auth_token, entries_per_page: config.entries_per_page, base_url })
    }

    /// Builds the `GetMyeBaySellingRequest` body. Only page 1 is requested;
    /// the workflow never paginates.
    fn request_body(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<GetMyeBaySellingRequest xmlns="urn:ebay:apis:eBLBaseComponents">
    <RequesterCredentials>
        <eBayAuthToken>{token}</eBayAuthToken>
    </RequesterCredentials>
    <ActiveList>
        <Include>true</Include>
        <Pagination>
            <EntriesPerPage>{entries}</EntriesPerPage>
            <PageNumber>1</PageNumber>
        </Pagination>
    </ActiveList>
</GetMyeBaySellingRequest>"#,
            token = self.auth_token,
            entries = self.entries_per_page,
        )
    }
}

#[async_trait]
impl ListingSource for EbayClient {
    async fn active_listings(&self) -> Result<String> {
        info!("Fetching active eBay listings (page 1, {} entries)", self.entries_per_page);
        debug!("POST {}", self.base_url);

        let response = self
            .client
            .post(&self.base_url)
            .header("X-EBAY-API-SITEID", SITE_ID)
            .header("X-EBAY-API-COMPATIBILITY-LEVEL", COMPATIBILITY_LEVEL)
            .header("X-EBAY-API-CALL-NAME", "GetMyeBaySelling")
            .header("X-EBAY-API-IAF-TOKEN", &self.auth_token)
            .header("Content-Type", "text/xml")
            .body(self.request_body())
            .send()
            .await
            .context("Failed to send eBay API request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("eBay API request failed with status: {}", status);
        }

        response.text().await.context("Failed to read eBay response body")
    }
}
