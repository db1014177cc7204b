pub mod collect;
pub mod error;
pub mod extract;
pub mod headers;
pub mod listing;
pub mod output;
pub mod pipeline;
pub mod stores;

pub use collect::{collect_listings, collect_stores, ListingCollection, StoreCollection};
pub use error::ScraperError;
pub use extract::{extract_item, parse_listing_page, ItemSelectors};
pub use listing::ListingClient;
pub use output::{write_listing_csv, write_store_csv};
pub use pipeline::{run_listing_collection, run_store_collection, CollectOutcome};
pub use stores::{StoreLocatorClient, REGION_CODES};
