use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_report_variant_standard() {
    assert_eq!(
        parse_report_variant("standard").unwrap(),
        ReportVariant::Standard
    );
}

#[test]
fn parse_report_variant_is_case_insensitive() {
    assert_eq!(
        parse_report_variant(" Extended ").unwrap(),
        ReportVariant::Extended
    );
}

#[test]
fn parse_report_variant_unknown_fails() {
    let err = parse_report_variant("fancy").unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "KSCRAPE_REPORT_VARIANT")
    );
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.data_root, PathBuf::from("."));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.store_locator_url, DEFAULT_STORE_LOCATOR_URL);
    assert_eq!(cfg.store_delay_ms, 500);
    assert_eq!(cfg.listing_url, DEFAULT_LISTING_URL);
    assert_eq!(cfg.listing_first_page, 1);
    assert_eq!(cfg.listing_last_page, 3);
    assert_eq!(cfg.listing_delay_ms, 1000);
    assert_eq!(cfg.report_variant, ReportVariant::Standard);
    assert!(cfg.report_price_max.is_none());
    assert_eq!(cfg.report_top_n, 10);
    assert!(cfg.report_wordcloud);
}

#[test]
fn extended_variant_gets_default_price_bound() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_REPORT_VARIANT", "extended");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.report_variant, ReportVariant::Extended);
    assert_eq!(cfg.report_price_max, Some(EXTENDED_PRICE_MAX));
}

#[test]
fn explicit_price_bound_overrides_variant_default() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_REPORT_VARIANT", "extended");
    map.insert("KSCRAPE_REPORT_PRICE_MAX", "none");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.report_price_max.is_none());

    map.insert("KSCRAPE_REPORT_PRICE_MAX", "50000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.report_price_max, Some(50_000.0));
}

#[test]
fn negative_price_bound_is_rejected() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_REPORT_PRICE_MAX", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KSCRAPE_REPORT_PRICE_MAX"),
        "expected InvalidEnvVar(KSCRAPE_REPORT_PRICE_MAX), got: {result:?}"
    );
}

#[test]
fn store_delay_override() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_STORE_DELAY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.store_delay_ms, 0);
}

#[test]
fn store_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_STORE_DELAY_MS", "half a second");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KSCRAPE_STORE_DELAY_MS"),
        "expected InvalidEnvVar(KSCRAPE_STORE_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn inverted_page_range_is_rejected() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_LISTING_FIRST_PAGE", "4");
    map.insert("KSCRAPE_LISTING_LAST_PAGE", "2");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KSCRAPE_LISTING_LAST_PAGE"),
        "expected InvalidEnvVar(KSCRAPE_LISTING_LAST_PAGE), got: {result:?}"
    );
}

#[test]
fn zero_first_page_is_rejected() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_LISTING_FIRST_PAGE", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn wordcloud_flag_accepts_common_spellings() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_REPORT_WORDCLOUD", "off");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(!cfg.report_wordcloud);

    map.insert("KSCRAPE_REPORT_WORDCLOUD", "1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.report_wordcloud);
}

#[test]
fn wordcloud_flag_rejects_garbage() {
    let mut map = HashMap::new();
    map.insert("KSCRAPE_REPORT_WORDCLOUD", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KSCRAPE_REPORT_WORDCLOUD"),
        "expected InvalidEnvVar(KSCRAPE_REPORT_WORDCLOUD), got: {result:?}"
    );
}

#[test]
fn debug_output_includes_page_range() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(rendered.contains("listing_pages: 1..=3"), "got: {rendered}");
}
