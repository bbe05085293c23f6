//! tcg-repricer - eBay listing price reconciliation CLI
//!
//! A Rust implementation of a two-step workflow: export a seller's active
//! eBay listings to a JSON file, then reconcile those prices against the
//! Pokemon TCG API with an interactive or forced update pass.

pub mod commands;
pub mod config;
pub mod console;
pub mod ebay;
pub mod pricing;
pub mod reconcile;
pub mod tcg;

pub use config::Config;
pub use ebay::models::ListingBook;
