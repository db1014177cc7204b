//! Integration tests for the listing collector using wiremock HTTP mocks.

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kscrape_scraper::{
    collect_listings, run_listing_collection, CollectOutcome, ItemSelectors, ListingClient,
};

const FIXTURE: &str = include_str!("fixtures/listing_page.html");
const EMPTY_PAGE: &str = "<div id=\"yesSchList\"><ul></ul></div>";
const LISTING_PATH: &str = "/product/category/CategoryProductContents";

fn test_client(server: &MockServer) -> ListingClient {
    ListingClient::new(&format!("{}{LISTING_PATH}", server.uri()), 5)
        .expect("client construction should not fail")
}

async fn mount_page(server: &MockServer, page: u32, template: ResponseTemplate, expected: u64) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", page.to_string()))
        .and(query_param("dispNo", "001001003032"))
        .respond_with(template)
        .expect(expected)
        .mount(server)
        .await;
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

#[tokio::test]
async fn stops_at_first_page_without_items() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(FIXTURE), 1).await;
    mount_page(&server, 2, html(EMPTY_PAGE), 1).await;
    mount_page(&server, 3, html(FIXTURE), 0).await;

    let selectors = ItemSelectors::new().unwrap();
    let collection =
        collect_listings(&test_client(&server), &selectors, 1..=3, Duration::ZERO).await;

    assert_eq!(collection.records.len(), 3);
    assert_eq!(collection.exhausted_at, Some(2));
    assert!(collection.failed_pages.is_empty());
}

#[tokio::test]
async fn failed_page_is_skipped_and_collection_continues() {
    let server = MockServer::start().await;
    mount_page(&server, 1, ResponseTemplate::new(503), 1).await;
    mount_page(&server, 2, html(FIXTURE), 1).await;
    mount_page(&server, 3, html(FIXTURE), 1).await;

    let selectors = ItemSelectors::new().unwrap();
    let collection =
        collect_listings(&test_client(&server), &selectors, 1..=3, Duration::ZERO).await;

    assert_eq!(collection.failed_pages, vec![1]);
    assert_eq!(collection.records.len(), 6);
    assert_eq!(collection.exhausted_at, None);
}

#[tokio::test]
async fn missing_price_block_yields_zero_prices_in_csv() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(FIXTURE), 1).await;

    let tmp = tempfile::tempdir().unwrap();
    let csv_path = tmp.path().join("yes24/data/yes24_ai.csv");
    let outcome = run_listing_collection(&test_client(&server), &csv_path, 1..=1, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CollectOutcome::Written {
            path: csv_path.clone(),
            rows: 3
        }
    );

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    // sale_price, original_price
    assert_eq!(&rows[2][6], "0");
    assert_eq!(&rows[2][7], "0");
    assert_eq!(&rows[0][6], "23400");
}

#[tokio::test]
async fn empty_first_page_writes_no_file() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(EMPTY_PAGE), 1).await;
    mount_page(&server, 2, html(FIXTURE), 0).await;

    let tmp = tempfile::tempdir().unwrap();
    let csv_path = tmp.path().join("listing.csv");
    let outcome = run_listing_collection(&test_client(&server), &csv_path, 1..=3, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(outcome, CollectOutcome::Empty);
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn identical_pages_produce_identical_files() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(FIXTURE), 2).await;
    mount_page(&server, 2, html(EMPTY_PAGE), 2).await;

    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("first.csv");
    let second = tmp.path().join("second.csv");
    let client = test_client(&server);

    run_listing_collection(&client, &first, 1..=3, Duration::ZERO)
        .await
        .unwrap();
    run_listing_collection(&client, &second, 1..=3, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}
