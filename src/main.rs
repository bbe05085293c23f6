//! tcg-repricer - eBay listing price reconciliation CLI
//!
//! Exports a seller's active eBay listings to a JSON file, then reconciles
//! those prices against the Pokemon TCG API market values.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tcg_repricer::commands::{ExportCommand, ReconcileCommand};
use tcg_repricer::config::Config;
use tcg_repricer::console::StdConsole;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tcg-repricer",
    version,
    about = "eBay listing price reconciliation against the Pokemon TCG API",
    long_about = "Two-step workflow: export active eBay listings to a JSON file, \
then reconcile their prices against Pokemon TCG market values with an \
interactive or forced update pass."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export active eBay listings to the listings JSON file
    #[command(alias = "e")]
    Export {
        /// Output path for the listings file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reconcile listed prices against TCG market values
    #[command(alias = "r")]
    Reconcile {
        /// Listings file produced by `export`
        #[arg(short, long)]
        listings: Option<PathBuf>,

        /// Output path for the text report
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Margin percentage (0-100); skips the interactive margin prompt
        #[arg(short, long)]
        margin: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    match cli.command {
        Commands::Export { output } => {
            if let Some(path) = output {
                config.listings_file = path;
            }

            let cmd = ExportCommand::new(config);
            let output = cmd.execute().await?;
            println!("{}", output);
        }

        Commands::Reconcile { listings, report, margin } => {
            if let Some(path) = listings {
                config.listings_file = path;
            }
            if let Some(path) = report {
                config.report_file = path;
            }

            let cmd = ReconcileCommand::new(config, margin);
            let mut console = StdConsole::new();
            let summary = cmd.execute(&mut console).await?;
            println!("{}", summary);
        }
    }

    Ok(())
}
