//! Sequential collection loops.
//!
//! Each loop owns its accumulator and returns it; a failure in one unit of
//! work (a region, a page) is logged and recorded, and the loop moves on.

use std::ops::RangeInclusive;
use std::time::Duration;

use kscrape_core::{ListingRecord, StoreRecord};

use crate::extract::{parse_listing_page, ItemSelectors};
use crate::listing::ListingClient;
use crate::stores::StoreLocatorClient;

/// Records gathered by [`collect_stores`], in region order.
#[derive(Debug, Default)]
pub struct StoreCollection {
    pub records: Vec<StoreRecord>,
    /// Regions whose request or response failed.
    pub failed_regions: Vec<String>,
}

/// Records gathered by [`collect_listings`], in page order.
#[derive(Debug, Default)]
pub struct ListingCollection {
    pub records: Vec<ListingRecord>,
    /// Pages whose request failed.
    pub failed_pages: Vec<u32>,
    /// First page that came back without item blocks, if any.
    pub exhausted_at: Option<u32>,
}

/// Courtesy pause between two outbound requests.
async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Runs one store search per region code and concatenates the results.
///
/// Duplicate stores returned for neighbouring regions are kept.
pub async fn collect_stores(
    client: &StoreLocatorClient,
    region_codes: &[&str],
    delay: Duration,
) -> StoreCollection {
    let mut collection = StoreCollection::default();

    for (idx, region) in region_codes.iter().enumerate() {
        if idx > 0 {
            pause(delay).await;
        }
        tracing::info!(region, "collecting stores");

        match client.fetch_region(region).await {
            Ok(stores) if stores.is_empty() => {
                tracing::warn!(region, "no stores returned for region");
            }
            Ok(stores) => {
                tracing::info!(region, count = stores.len(), "stores found");
                collection.records.extend(stores);
            }
            Err(e) => {
                tracing::error!(region, error = %e, "store search failed; skipping region");
                collection.failed_regions.push((*region).to_owned());
            }
        }
    }

    collection
}

/// Walks the listing pages in `pages`, stopping at the first page without
/// item blocks.
pub async fn collect_listings(
    client: &ListingClient,
    selectors: &ItemSelectors,
    pages: RangeInclusive<u32>,
    delay: Duration,
) -> ListingCollection {
    let mut collection = ListingCollection::default();
    let first = *pages.start();

    for page in pages {
        if page != first {
            pause(delay).await;
        }
        tracing::info!(page, "collecting listing page");

        let html = match client.fetch_page(page).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(page, error = %e, "listing request failed; skipping page");
                collection.failed_pages.push(page);
                continue;
            }
        };

        let records = parse_listing_page(&html, selectors);
        if records.is_empty() {
            tracing::warn!(page, "no item blocks on page; stopping");
            collection.exhausted_at = Some(page);
            break;
        }

        tracing::info!(page, count = records.len(), "items extracted");
        collection.records.extend(records);
    }

    collection
}
