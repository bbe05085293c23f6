//! Name matching between listing titles and card search results.

use crate::tcg::models::Card;

/// Picks the first card (in API-provided order) whose name contains the
/// query as a case-insensitive substring. Not an exact match and not a
/// best-distance match; API order decides ties.
pub fn find_match<'a>(query: &str, cards: &'a [Card]) -> Option<&'a Card> {
    let query = query.to_lowercase();
    cards.iter().find(|card| card.name.to_lowercase().contains(&query))
}
