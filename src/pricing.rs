//! Price arithmetic: margins, differentials, and suggested prices.
//!
//! One sign convention is canonical for listing-vs-market differentials:
//! `(listing - market) / listing * 100`. Positive means the listing is
//! priced above market. Both the report and the interactive pass use it.

use thiserror::Error;

/// Invalid margin input from the operator.
#[derive(Debug, Error, PartialEq)]
pub enum MarginError {
    #[error("Invalid input. Enter a number (e.g., 12 or 15.5)")]
    NotANumber,
    #[error("Please enter a percentage between 0 and 100")]
    OutOfRange(f64),
}

/// Parses a margin percentage. Blank input yields the default; values
/// outside [0, 100] are rejected, never clamped.
pub fn parse_margin(input: &str, default: f64) -> Result<f64, MarginError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    let margin: f64 = input.parse().map_err(|_| MarginError::NotANumber)?;
    if !(0.0..=100.0).contains(&margin) {
        return Err(MarginError::OutOfRange(margin));
    }

    Ok(margin)
}

/// Market price uplifted by the margin percentage, rounded to cents.
pub fn suggested_price(market_price: f64, margin_percent: f64) -> f64 {
    (market_price * (1.0 + margin_percent / 100.0) * 100.0).round() / 100.0
}

/// How far the listing sits above (+) or below (-) the market price.
pub fn percent_difference(listing_price: f64, market_price: f64) -> f64 {
    (listing_price - market_price) / listing_price * 100.0
}

/// Relative move from the current price to a candidate new price.
pub fn percent_change(old_price: f64, new_price: f64) -> f64 {
    (new_price - old_price) / old_price * 100.0
}
