//! Client for the store-locator search endpoint.

pub mod payload;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use kscrape_core::StoreRecord;

use crate::error::ScraperError;
use crate::headers::store_locator_headers;

pub use payload::{search_form, REGION_CODES};

/// Response envelope; only `list` is consumed.
#[derive(Debug, Deserialize)]
struct StoreSearchResponse {
    #[serde(default)]
    list: Option<Vec<StoreRecord>>,
}

/// Posts one search per region to the store-locator endpoint.
///
/// The endpoint URL is taken as-is (including any cache-busting query
/// string), so tests can point the client at a mock server.
pub struct StoreLocatorClient {
    client: Client,
    endpoint: Url,
}

impl StoreLocatorClient {
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
            .default_headers(store_locator_headers())
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Fetches every store the endpoint returns for `region_code`.
    ///
    /// A response without a `list` field (or with `"list": null`) is an
    /// empty region, not an error.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_region(&self, region_code: &str) -> Result<Vec<StoreRecord>, ScraperError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&search_form(region_code))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<StoreSearchResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("store search for region {region_code}"),
                source: e,
            }
        })?;

        Ok(parsed.list.unwrap_or_default())
    }
}
