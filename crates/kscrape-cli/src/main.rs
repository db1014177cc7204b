mod commands;
mod logging;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use kscrape_core::OutputPaths;

#[derive(Debug, Parser)]
#[command(name = "kscrape-cli")]
#[command(about = "Store locator and bestseller listing collectors, plus a listing report")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect every store from the store locator into a CSV
    Stores,
    /// Collect the bestseller listing pages into a CSV
    Listings,
    /// Summarize the listing CSV and render charts
    Report,
}

impl Commands {
    /// Log directory and file name prefix for this subcommand.
    fn log_file(&self, paths: &OutputPaths) -> (PathBuf, &'static str) {
        match self {
            Commands::Stores => (paths.store_log_dir(), "starbucks_ai.log"),
            Commands::Listings => (paths.listing_log_dir(), "yes24_ai.log"),
            Commands::Report => (paths.listing_log_dir(), "yes24_report.log"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = kscrape_core::load_app_config()?;
    let paths = OutputPaths::new(config.data_root.clone());
    let (log_dir, log_name) = command.log_file(&paths);
    OutputPaths::ensure_dir(&log_dir)?;
    let _log_guard = logging::init(&config.log_level, &log_dir, log_name)?;
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Stores => commands::stores(&config, &paths).await,
        Commands::Listings => commands::listings(&config, &paths).await,
        Commands::Report => commands::report(&config, &paths),
    }
}
