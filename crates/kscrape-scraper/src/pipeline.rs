//! End-to-end collector runs: collect, then write the CSV when anything
//! was collected.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::collect::{collect_listings, collect_stores};
use crate::error::ScraperError;
use crate::extract::ItemSelectors;
use crate::listing::ListingClient;
use crate::output::{write_listing_csv, write_store_csv};
use crate::stores::{StoreLocatorClient, REGION_CODES};

/// What a collector run left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// `rows` records were written to `path`.
    Written { path: PathBuf, rows: usize },
    /// Nothing was collected; no file was written.
    Empty,
}

/// Searches every region and writes the combined store list to `csv_path`.
///
/// # Errors
///
/// Only output failures are returned; per-region failures are logged.
pub async fn run_store_collection(
    client: &StoreLocatorClient,
    csv_path: &Path,
    delay: Duration,
) -> Result<CollectOutcome, ScraperError> {
    let collection = collect_stores(client, &REGION_CODES, delay).await;

    if !collection.failed_regions.is_empty() {
        tracing::warn!(
            failed = collection.failed_regions.len(),
            total = REGION_CODES.len(),
            regions = ?collection.failed_regions,
            "some regions failed during store collection"
        );
    }

    if collection.records.is_empty() {
        tracing::error!("no store records collected; no file written");
        return Ok(CollectOutcome::Empty);
    }

    write_store_csv(csv_path, &collection.records)?;
    let rows = collection.records.len();
    tracing::info!(rows, path = %csv_path.display(), "store records saved");
    Ok(CollectOutcome::Written {
        path: csv_path.to_path_buf(),
        rows,
    })
}

/// Walks the listing pages and writes every extracted item to `csv_path`.
///
/// # Errors
///
/// Returns [`ScraperError::Selector`] if the item selectors do not compile,
/// or an output error when the CSV cannot be written. Per-page failures
/// are logged.
pub async fn run_listing_collection(
    client: &ListingClient,
    csv_path: &Path,
    pages: RangeInclusive<u32>,
    delay: Duration,
) -> Result<CollectOutcome, ScraperError> {
    let selectors = ItemSelectors::new()?;
    let collection = collect_listings(client, &selectors, pages, delay).await;

    if !collection.failed_pages.is_empty() {
        tracing::warn!(
            pages = ?collection.failed_pages,
            "some listing pages failed"
        );
    }

    if collection.records.is_empty() {
        tracing::error!("no listing records collected; no file written");
        return Ok(CollectOutcome::Empty);
    }

    write_listing_csv(csv_path, &collection.records)?;
    let rows = collection.records.len();
    tracing::info!(rows, path = %csv_path.display(), "listing records saved");
    Ok(CollectOutcome::Written {
        path: csv_path.to_path_buf(),
        rows,
    })
}
