//! Pokemon TCG API modules: HTTP client, card models, and quote matching.

pub mod client;
pub mod matching;
pub mod models;

pub use client::{CardPricing, TcgClient};
pub use models::{Card, CardSearchResponse};

use tracing::warn;

/// Resolves the market price for a listing title.
///
/// Absent (`None`) on transport failure, an empty result set, no name match,
/// or a matched card without a market price - each decision point logs a
/// warning so the operator can see why a listing went unpriced.
pub async fn market_price_for(client: &impl CardPricing, title: &str) -> Option<f64> {
    let response = match client.search_cards(title).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Price lookup failed for '{}': {}", title, e);
            return None;
        }
    };

    if response.data.is_empty() {
        warn!("No price data found for '{}'", title);
        return None;
    }

    let Some(card) = matching::find_match(title, &response.data) else {
        warn!("No name match for '{}' among {} results", title, response.data.len());
        return None;
    };

    match card.market_price() {
        Some(price) => Some(price),
        None => {
            warn!("Matched '{}' but no market price available", card.name);
            None
        }
    }
}
