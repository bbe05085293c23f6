//! eBay-specific modules for the Trading API client, XML parsing, and models.

pub mod client;
pub mod models;
pub mod parser;

pub use client::{EbayClient, ListingSource};
pub use models::ListingBook;
