//! Interactive and force update passes.
//!
//! Both passes re-fetch quotes independently of the report pass, so results
//! can differ between the two if the pricing API changes underneath. Updates
//! are decision records only; no marketplace write-back happens here.

use crate::console::Console;
use crate::ebay::models::ListingBook;
use crate::pricing;
use crate::reconcile::prompts;
use crate::tcg::{self, CardPricing};
use anyhow::Result;
use tracing::info;

/// The operator's decision for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub title: String,
    pub old_price: f64,
    pub new_price: f64,
    pub applied: bool,
}

/// Walks every listing, shows the suggested price, and asks the operator to
/// accept, override, or skip. Listings without a quote are skipped outright.
pub async fn run_interactive(
    client: &impl CardPricing,
    console: &mut impl Console,
    book: &ListingBook,
    margin: f64,
) -> Result<Vec<UpdateOutcome>> {
    let mut outcomes = Vec::new();

    for (title, old_price) in book.iter() {
        let Some(market_price) = tcg::market_price_for(client, title).await else {
            continue;
        };

        let diff = pricing::percent_difference(old_price, market_price);
        let suggested = pricing::suggested_price(market_price, margin);

        console.say(&format!("\nChecking {} (current price: ${:.2})", title, old_price));
        console.say(&format!(
            "Market: ${:.2} | Diff: {}{:.2}% | Suggested: ${:.2}",
            market_price,
            plus(diff),
            diff,
            suggested,
        ));

        let new_price = prompts::prompt_new_price(console, suggested)?;
        let change = pricing::percent_change(old_price, new_price);
        console.say(&format!(
            "New price: ${:.2} ({}{:.2}% vs current ${:.2})",
            new_price,
            plus(change),
            change,
            old_price,
        ));

        let confirmed = prompts::prompt_yes_no(
            console,
            &format!("Confirm update of [{}] from ${:.2} to ${:.2}? (y/n): ", title, old_price, new_price),
        )?;

        if confirmed {
            info!("Applied price update: '{}' {:.2} -> {:.2}", title, old_price, new_price);
            console.say(&format!("Updating {} to ${:.2}", title, new_price));
        } else {
            console.say(&format!("Skipping {}", title));
        }

        outcomes.push(UpdateOutcome {
            title: title.to_string(),
            old_price,
            new_price,
            applied: confirmed,
        });
    }

    Ok(outcomes)
}

/// Applies the suggested price to every quotable listing with no per-item
/// confirmation and no override. The caller is responsible for the explicit
/// "yes" gate before invoking this.
pub async fn run_force(
    client: &impl CardPricing,
    console: &mut impl Console,
    book: &ListingBook,
    margin: f64,
) -> Result<Vec<UpdateOutcome>> {
    let mut outcomes = Vec::new();

    for (title, old_price) in book.iter() {
        let Some(market_price) = tcg::market_price_for(client, title).await else {
            continue;
        };

        let new_price = pricing::suggested_price(market_price, margin);

        info!("Applied price update: '{}' {:.2} -> {:.2}", title, old_price, new_price);
        console.say(&format!("Force updating {} to ${:.2}", title, new_price));

        outcomes.push(UpdateOutcome {
            title: title.to_string(),
            old_price,
            new_price,
            applied: true,
        });
    }

    Ok(outcomes)
}

/// One-line summary of an update pass.
pub fn summarize(outcomes: &[UpdateOutcome]) -> String {
    let applied = outcomes.iter().filter(|o| o.applied).count();
    let skipped = outcomes.len() - applied;
    format!("{} update(s) applied, {} skipped", applied, skipped)
}

fn plus(value: f64) -> &'static str {
    if value > 0.0 {
        "+"
    } else {
        ""
    }
}
