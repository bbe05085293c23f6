//! Report generation: quote every listing and render a flat-text report.

use crate::ebay::models::ListingBook;
use crate::pricing;
use crate::tcg::{self, CardPricing};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// One listing's comparison against the market, built for the report pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationRecord {
    pub title: String,
    pub listing_price: f64,
    /// Absent when the pricing API had no usable quote for the title
    pub market_price: Option<f64>,
    pub percent_difference: Option<f64>,
    pub suggested_price: Option<f64>,
}

impl ReconciliationRecord {
    /// Builds a record from a listing and an optional market quote.
    pub fn new(title: impl Into<String>, listing_price: f64, market_price: Option<f64>, margin: f64) -> Self {
        Self {
            title: title.into(),
            listing_price,
            market_price,
            percent_difference: market_price
                .map(|market| pricing::percent_difference(listing_price, market)),
            suggested_price: market_price.map(|market| pricing::suggested_price(market, margin)),
        }
    }

    /// Renders the record as one report line.
    pub fn render(&self) -> String {
        match (self.market_price, self.percent_difference, self.suggested_price) {
            (Some(market), Some(diff), Some(suggested)) => format!(
                "{} | eBay Price: ${:.2} | TCG Price: ${:.2} | Diff: {}{:.2}% | Suggested: ${:.2}",
                self.title,
                self.listing_price,
                market,
                if diff > 0.0 { "+" } else { "" },
                diff,
                suggested,
            ),
            _ => format!("{} - No TCG price found", self.title),
        }
    }
}

/// Quotes every listing in stored order and builds the report records.
/// A failed or absent quote produces a "no price" record instead of aborting.
pub async fn generate(
    client: &impl CardPricing,
    book: &ListingBook,
    margin: f64,
) -> Vec<ReconciliationRecord> {
    let mut records = Vec::with_capacity(book.len());

    for (title, listing_price) in book.iter() {
        let market_price = tcg::market_price_for(client, title).await;
        records.push(ReconciliationRecord::new(title, listing_price, market_price, margin));
    }

    records
}

/// Renders all records, one line each.
pub fn render(records: &[ReconciliationRecord]) -> String {
    records.iter().map(ReconciliationRecord::render).collect::<Vec<_>>().join("\n")
}

/// Writes the rendered report to `path`, replacing any prior content.
pub fn write(path: impl AsRef<Path>, records: &[ReconciliationRecord]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render(records))
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    info!("Report with {} entries saved to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tcg::models::{Card, CardPrices, CardSearchResponse, PriceVariant, TcgplayerData};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tempfile::tempdir;

    /// Pricing mock keyed by query name.
    struct MapPricing {
        cards: HashMap<String, f64>,
    }

    #[async_trait]
    impl CardPricing for MapPricing {
        async fn search_cards(&self, name: &str) -> Result<CardSearchResponse> {
            let data = self
                .cards
                .get(name)
                .map(|&market| {
                    vec![Card {
                        name: name.to_string(),
                        tcgplayer: Some(TcgplayerData {
                            prices: Some(CardPrices {
                                holofoil: Some(PriceVariant { market: Some(market) }),
                                reverse_holofoil: None,
                                normal: None,
                            }),
                        }),
                    }]
                })
                .unwrap_or_default();

            Ok(CardSearchResponse { data })
        }
    }

    #[test]
    fn test_record_with_quote() {
        let record = ReconciliationRecord::new("Lucario VSTAR", 15.50, Some(14.00), 12.0);

        assert_eq!(record.market_price, Some(14.00));
        assert!((record.percent_difference.unwrap() - 9.677419354838710).abs() < 1e-9);
        assert_eq!(record.suggested_price, Some(15.68));
    }

    #[test]
    fn test_record_without_quote() {
        let record = ReconciliationRecord::new("Unknown Card", 9.99, None, 12.0);

        assert!(record.market_price.is_none());
        assert!(record.percent_difference.is_none());
        assert!(record.suggested_price.is_none());
        assert_eq!(record.render(), "Unknown Card - No TCG price found");
    }

    #[test]
    fn test_render_priced_line() {
        let record = ReconciliationRecord::new("Lucario VSTAR", 15.50, Some(14.00), 12.0);
        assert_eq!(
            record.render(),
            "Lucario VSTAR | eBay Price: $15.50 | TCG Price: $14.00 | Diff: +9.68% | Suggested: $15.68"
        );
    }

    #[test]
    fn test_render_negative_diff_has_no_plus_sign() {
        let record = ReconciliationRecord::new("Cheap Card", 10.00, Some(12.50), 0.0);
        let line = record.render();
        assert!(line.contains("Diff: -25.00%"));
        assert!(!line.contains("+-"));
    }

    #[tokio::test]
    async fn test_generate_mixed_quotes() {
        let client = MapPricing {
            cards: HashMap::from([("Lucario VSTAR".to_string(), 14.0)]),
        };

        let mut book = ListingBook::new();
        book.insert("Lucario VSTAR", 15.50);
        book.insert("Unknown Card", 9.99);

        let records = generate(&client, &book, 12.0).await;
        assert_eq!(records.len(), 2);

        // Stored order: "Lucario VSTAR" before "Unknown Card"
        assert_eq!(records[0].title, "Lucario VSTAR");
        assert_eq!(records[0].market_price, Some(14.0));
        assert_eq!(records[1].title, "Unknown Card");
        assert!(records[1].market_price.is_none());
    }

    #[tokio::test]
    async fn test_generate_empty_book() {
        let client = MapPricing { cards: HashMap::new() };
        let records = generate(&client, &ListingBook::new(), 12.0).await;
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_replaces_prior_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale report from an earlier run").unwrap();

        let records =
            vec![ReconciliationRecord::new("Lucario VSTAR", 15.50, Some(14.00), 12.0)];
        write(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("Lucario VSTAR"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_write_failure_has_context() {
        let records = vec![];
        let result = write("/nonexistent/dir/report.txt", &records);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to write report file"));
    }
}
