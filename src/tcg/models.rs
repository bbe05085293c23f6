//! Data models for Pokemon TCG API responses.

use serde::{Deserialize, Serialize};

/// Top-level response from `GET /v2/cards`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardSearchResponse {
    /// Card records in API-provided order (sorted by release date descending
    /// per the request's `orderBy`).
    #[serde(default)]
    pub data: Vec<Card>,
}

/// A single card record. Only the fields this workflow consumes are modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card name as printed
    pub name: String,
    /// TCGplayer pricing block, absent for cards without market data
    #[serde(default)]
    pub tcgplayer: Option<TcgplayerData>,
}

/// TCGplayer section of a card record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TcgplayerData {
    #[serde(default)]
    pub prices: Option<CardPrices>,
}

/// Price categories a card may carry. Any subset may be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPrices {
    #[serde(default)]
    pub holofoil: Option<PriceVariant>,
    #[serde(default, rename = "reverseHolofoil")]
    pub reverse_holofoil: Option<PriceVariant>,
    #[serde(default)]
    pub normal: Option<PriceVariant>,
}

/// One price category's values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceVariant {
    #[serde(default)]
    pub market: Option<f64>,
}

impl Card {
    /// Returns the first present `market` value, trying price categories
    /// strictly in the order holofoil, reverseHolofoil, normal.
    pub fn market_price(&self) -> Option<f64> {
        let prices = self.tcgplayer.as_ref()?.prices.as_ref()?;

        [&prices.holofoil, &prices.reverse_holofoil, &prices.normal]
            .into_iter()
            .flatten()
            .find_map(|variant| variant.market)
    }
}
