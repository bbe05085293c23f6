//! Listing data model and the JSON file it is persisted to.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A seller's active listings, keyed by title.
///
/// Titles are the only key the workflow retains - no listing IDs - so a
/// duplicate title silently overwrites the earlier price (last wins).
/// Iteration order is the stored (sorted) key order, which keeps report
/// output stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingBook {
    listings: BTreeMap<String, f64>,
}

impl ListingBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a listing; an existing title is overwritten.
    pub fn insert(&mut self, title: impl Into<String>, price: f64) {
        self.listings.insert(title.into(), price);
    }

    /// Returns the price for a title, if present.
    pub fn price(&self, title: &str) -> Option<f64> {
        self.listings.get(title).copied()
    }

    /// Returns the number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Returns true if the book holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Iterates listings in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.listings.iter().map(|(title, price)| (title.as_str(), *price))
    }

    /// Writes the book to `path` as pretty-printed JSON, replacing any
    /// existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Saving {} listings to {}", self.len(), path.display());

        let json = serde_json::to_string_pretty(self).context("Failed to serialize listings")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write listings file: {}", path.display()))
    }

    /// Loads a book from `path`. A missing or malformed file is an error;
    /// the reconciler cannot run without the exporter's output.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading listings from {}", path.display());

        let content = std::fs::read_to_string(path).with_context(|| {
            format!("Failed to read listings file: {} (run `export` first)", path.display())
        })?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse listings file: {}", path.display()))
    }
}

impl FromIterator<(String, f64)> for ListingBook {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self { listings: iter.into_iter().collect() }
    }
}
