//! Client for the category listing page.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::headers::listing_headers;

/// Category shown by the listing collector (IT/AI books).
pub const CATEGORY_ID: &str = "001001003032";
/// Sort by sales index, best first.
pub const SORT_ORDER: &str = "SINDEX_ONLY";
pub const PAGE_SIZE: u32 = 24;

/// Builds the ordered query string for one listing page.
#[must_use]
pub fn page_query(page: u32) -> Vec<(&'static str, String)> {
    vec![
        ("dispNo", CATEGORY_ID.to_owned()),
        ("order", SORT_ORDER.to_owned()),
        ("addOptionTp", "0".to_owned()),
        ("page", page.to_string()),
        ("size", PAGE_SIZE.to_string()),
        ("statGbYn", "N".to_owned()),
        ("viewMode", String::new()),
        ("_options", String::new()),
        ("directDelvYn", String::new()),
        ("usedTp", "0".to_owned()),
        ("elemNo", "0".to_owned()),
        ("elemSeq", "0".to_owned()),
        ("seriesNumber", "0".to_owned()),
    ]
}

/// Fetches raw listing HTML one page at a time.
pub struct ListingClient {
    client: Client,
    endpoint: Url,
}

impl ListingClient {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidUrl`] if `endpoint`
    /// does not parse.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, ScraperError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ScraperError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .default_headers(listing_headers())
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Returns the HTML body of listing page `page`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    pub async fn fetch_page(&self, page: u32) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&page_query(page))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_sets_page_and_fixed_filter() {
        let query = page_query(2);
        let get = |name: &str| {
            query
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("page").as_deref(), Some("2"));
        assert_eq!(get("dispNo").as_deref(), Some(CATEGORY_ID));
        assert_eq!(get("order").as_deref(), Some("SINDEX_ONLY"));
        assert_eq!(get("size").as_deref(), Some("24"));
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let result = ListingClient::new("not a url", 5);
        assert!(matches!(result, Err(ScraperError::InvalidUrl { .. })));
    }
}
