//! One handler per subcommand. Handlers create their output directories,
//! run the operation and log how it ended.

use std::time::Duration;

use kscrape_core::{AppConfig, OutputPaths};
use kscrape_report::{run_report, ReportPlan};
use kscrape_scraper::{
    run_listing_collection, run_store_collection, CollectOutcome, ListingClient,
    StoreLocatorClient,
};

pub(crate) async fn stores(config: &AppConfig, paths: &OutputPaths) -> anyhow::Result<()> {
    OutputPaths::ensure_dir(&paths.store_data_dir())?;
    let client = StoreLocatorClient::new(&config.store_locator_url, config.request_timeout_secs)?;

    tracing::info!("store collection started");
    let outcome = run_store_collection(
        &client,
        &paths.store_csv(),
        Duration::from_millis(config.store_delay_ms),
    )
    .await?;
    log_outcome("store", &outcome);
    Ok(())
}

pub(crate) async fn listings(config: &AppConfig, paths: &OutputPaths) -> anyhow::Result<()> {
    OutputPaths::ensure_dir(&paths.listing_data_dir())?;
    let client = ListingClient::new(&config.listing_url, config.request_timeout_secs)?;
    let pages = config.listing_first_page..=config.listing_last_page;

    tracing::info!(first = *pages.start(), last = *pages.end(), "listing collection started");
    let outcome = run_listing_collection(
        &client,
        &paths.listing_csv(),
        pages,
        Duration::from_millis(config.listing_delay_ms),
    )
    .await?;
    log_outcome("listing", &outcome);
    Ok(())
}

/// A dataset that cannot be loaded ends the run early but is not a
/// process failure.
pub(crate) fn report(config: &AppConfig, paths: &OutputPaths) -> anyhow::Result<()> {
    let plan = ReportPlan::from_config(config);
    let csv_path = paths.listing_csv();

    match run_report(&plan, &csv_path, &paths.charts_dir(), &config.font_path) {
        Ok(output) => {
            println!("{}", output.summary);
            tracing::info!(
                written = output.charts_written.len(),
                failed = output.charts_failed.len(),
                "report finished"
            );
        }
        Err(e) => {
            tracing::error!(path = %csv_path.display(), error = %e, "report aborted");
        }
    }
    Ok(())
}

fn log_outcome(kind: &str, outcome: &CollectOutcome) {
    match outcome {
        CollectOutcome::Written { path, rows } => {
            tracing::info!(kind, rows, path = %path.display(), "collection finished");
        }
        CollectOutcome::Empty => {
            tracing::warn!(kind, "collection finished without records");
        }
    }
}
