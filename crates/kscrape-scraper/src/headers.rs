//! Browser-like request headers for the two upstream sites.
//!
//! Both endpoints serve XHR callers from their own pages, so requests carry
//! the same origin/referer and `sec-fetch` hints a browser would send. The
//! `Host` header is left to `reqwest`.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER, USER_AGENT,
};

const STORE_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";
const LISTING_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36";

fn common_fetch_hints(headers: &mut HeaderMap) {
    let hints: [(&'static str, &'static str); 6] = [
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"Windows\""),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-origin"),
        ("x-requested-with", "XMLHttpRequest"),
    ];
    for (name, value) in hints {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// Headers for the store-locator `POST`.
#[must_use]
pub fn store_locator_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ORIGIN,
        HeaderValue::from_static("https://www.starbucks.co.kr"),
    );
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://www.starbucks.co.kr/store/store_map.do"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(STORE_USER_AGENT));
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(
            "\"Chromium\";v=\"142\", \"Google Chrome\";v=\"142\", \"Not_A Brand\";v=\"99\"",
        ),
    );
    common_fetch_hints(&mut headers);
    headers
}

/// Headers for the category listing `GET`.
#[must_use]
pub fn listing_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://www.yes24.com/product/category/display/001001003032"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(LISTING_USER_AGENT));
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(
            "\"Not(A:Brand\";v=\"8\", \"Chromium\";v=\"144\", \"Google Chrome\";v=\"144\"",
        ),
    );
    common_fetch_hints(&mut headers);
    headers
}
