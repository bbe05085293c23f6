//! Export command: fetch active eBay listings and persist them as JSON.

use crate::config::Config;
use crate::ebay::models::ListingBook;
use crate::ebay::parser;
use crate::ebay::{EbayClient, ListingSource};
use anyhow::Result;
use tracing::{info, warn};

/// Exports a seller's active listings to the listings JSON file.
pub struct ExportCommand {
    config: Config,
}

impl ExportCommand {
    /// Creates a new export command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the export and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let client = EbayClient::new(&self.config)?;
        self.execute_with_client(&client).await
    }

    /// Executes the export with a provided listing source (for testing).
    pub async fn execute_with_client(&self, client: &impl ListingSource) -> Result<String> {
        let book = fetch_listings(client).await;

        // An empty book means total failure, not "zero active listings":
        // nothing is persisted and the run ends with an error.
        if book.is_empty() {
            anyhow::bail!("No active listings retrieved (request failed or seller has none); nothing was written");
        }

        book.save(&self.config.listings_file)?;
        info!("Exported {} listings", book.len());

        Ok(self.render(&book))
    }

    fn render(&self, book: &ListingBook) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Retrieved {} active listing(s):", book.len()));
        for (title, price) in book.iter() {
            lines.push(format!("  {:<50} ${:>9.2}", title, price));
        }
        lines.push(String::new());
        lines.push(format!("Listings saved to {}", self.config.listings_file.display()));

        lines.join("\n")
    }
}

/// Fetches and parses the active listings. Any transport or whole-document
/// parse failure is logged and collapses to an empty book.
pub async fn fetch_listings(client: &impl ListingSource) -> ListingBook {
    let xml = match client.active_listings().await {
        Ok(xml) => xml,
        Err(e) => {
            warn!("eBay API request failed: {:#}", e);
            return ListingBook::new();
        }
    };

    match parser::parse_active_listings(&xml) {
        Ok(book) => book,
        Err(e) => {
            warn!("Failed to parse eBay response: {:#}", e);
            ListingBook::new()
        }
    }
}
