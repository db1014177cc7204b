use serde::{Deserialize, Serialize};

/// CSV header of the listing file, in column order.
pub const LISTING_COLUMNS: [&str; 12] = [
    "title",
    "subtitle",
    "author",
    "publisher",
    "pub_date",
    "discount_rate",
    "sale_price",
    "original_price",
    "sales_index",
    "review_count",
    "rating",
    "tags",
];

/// One product card from a category listing page, normalized for CSV output.
///
/// Numeric fields are already coerced: anything absent or unparseable is `0`
/// (`0.0` for `rating`). Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub publisher: String,
    pub pub_date: String,
    /// Discount percentage, e.g. `10` for 10%.
    pub discount_rate: i64,
    pub sale_price: i64,
    /// List price; equals `sale_price` when the card shows no list price.
    pub original_price: i64,
    /// Site-specific popularity metric, not a unit count.
    pub sales_index: i64,
    pub review_count: i64,
    pub rating: f64,
    /// Tag labels joined with `", "`.
    pub tags: String,
}
