//! Reconcile command: report, then interactive or forced price updates.

use crate::config::Config;
use crate::console::Console;
use crate::ebay::models::ListingBook;
use crate::reconcile::prompts::{self, RunMode};
use crate::reconcile::{report, session};
use crate::tcg::{CardPricing, TcgClient};
use anyhow::Result;
use tracing::info;

/// Drives the full reconciliation flow:
/// load listings -> margin -> report -> mode -> update pass.
pub struct ReconcileCommand {
    config: Config,
    margin_override: Option<f64>,
}

impl ReconcileCommand {
    /// Creates a new reconcile command. A margin override (from the CLI)
    /// skips the margin prompt.
    pub fn new(config: Config, margin_override: Option<f64>) -> Self {
        Self { config, margin_override }
    }

    /// Executes the flow and returns a summary line.
    pub async fn execute(&self, console: &mut impl Console) -> Result<String> {
        let client = TcgClient::new(&self.config)?;
        self.execute_with_client(&client, console).await
    }

    /// Executes the flow with a provided pricing client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CardPricing,
        console: &mut impl Console,
    ) -> Result<String> {
        // Startup dependency: the exporter's output must exist and parse.
        let book = ListingBook::load(&self.config.listings_file)?;
        info!("Loaded {} listings from {}", book.len(), self.config.listings_file.display());

        let margin = self.resolve_margin(console)?;
        console.say(&format!("Using price margin: {}%", margin));

        console.say("\nGenerating report...");
        let records = report::generate(client, &book, margin).await;
        console.say(&report::render(&records));

        report::write(&self.config.report_file, &records)?;
        console.say(&format!("\nReport saved to {}", self.config.report_file.display()));

        match prompts::prompt_mode(console)? {
            RunMode::Exit => {
                console.say("Exiting without updates.");
                Ok("No updates applied".to_string())
            }
            RunMode::Interactive => {
                console.say("Switching to interactive mode...");
                let outcomes = session::run_interactive(client, console, &book, margin).await?;
                Ok(session::summarize(&outcomes))
            }
            RunMode::Force => {
                if prompts::prompt_force_gate(console, margin)? {
                    console.say("Running in force mode. All prices will be updated automatically.");
                    let outcomes = session::run_force(client, console, &book, margin).await?;
                    Ok(session::summarize(&outcomes))
                } else {
                    console.say("Force mode cancelled.");
                    Ok("No updates applied".to_string())
                }
            }
        }
    }

    fn resolve_margin(&self, console: &mut impl Console) -> Result<f64> {
        match self.margin_override {
            Some(margin) => {
                if !(0.0..=100.0).contains(&margin) {
                    anyhow::bail!("Margin must be between 0 and 100, got {}", margin);
                }
                Ok(margin)
            }
            None => prompts::prompt_margin(console, self.config.default_margin),
        }
    }
}
