//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// eBay Trading API auth token (IAF), required for export
    #[serde(default)]
    pub ebay_auth_token: Option<String>,

    /// Pokemon TCG API key, required for reconcile
    #[serde(default)]
    pub tcg_api_key: Option<String>,

    /// Path of the listings JSON file (exporter output, reconciler input)
    #[serde(default = "default_listings_file")]
    pub listings_file: PathBuf,

    /// Path of the flat-text price report
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,

    /// Margin percentage used when the prompt is left blank
    #[serde(default = "default_margin")]
    pub default_margin: f64,

    /// eBay active-listing page size (only page 1 is ever fetched)
    #[serde(default = "default_entries_per_page")]
    pub entries_per_page: u32,

    /// Pricing API page size per card lookup
    #[serde(default = "default_tcg_page_size")]
    pub tcg_page_size: u32,

    /// HTTP timeout in seconds for both APIs
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_listings_file() -> PathBuf {
    PathBuf::from("ebay_listings.json")
}

fn default_report_file() -> PathBuf {
    PathBuf::from("tcg_price_report.txt")
}

fn default_margin() -> f64 {
    12.0
}

fn default_entries_per_page() -> u32 {
    50
}

fn default_tcg_page_size() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ebay_auth_token: None,
            tcg_api_key: None,
            listings_file: default_listings_file(),
            report_file: default_report_file(),
            default_margin: default_margin(),
            entries_per_page: default_entries_per_page(),
            tcg_page_size: default_tcg_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("tcg-repricer").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(token) = std::env::var("EBAY_AUTH_TOKEN") {
            self.ebay_auth_token = Some(token);
        }

        if let Ok(key) = std::env::var("TCG_API_KEY") {
            self.tcg_api_key = Some(key);
        }

        if let Ok(timeout) = std::env::var("REPRICER_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        self
    }

    /// Returns the eBay token or a clear error naming the missing credential.
    pub fn require_ebay_token(&self) -> Result<&str> {
        self.ebay_auth_token
            .as_deref()
            .context("Missing eBay auth token. Set EBAY_AUTH_TOKEN or ebay_auth_token in config.toml")
    }

    /// Returns the pricing API key or a clear error naming the missing credential.
    pub fn require_tcg_api_key(&self) -> Result<&str> {
        self.tcg_api_key
            .as_deref()
            .context("Missing Pokemon TCG API key. Set TCG_API_KEY or tcg_api_key in config.toml")
    }
}
