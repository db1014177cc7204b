use std::path::PathBuf;

use crate::app_config::{AppConfig, ReportVariant};
use crate::ConfigError;

pub const DEFAULT_STORE_LOCATOR_URL: &str =
    "https://www.starbucks.co.kr/store/getStore.do?r=X2D6LNU8AB";
pub const DEFAULT_LISTING_URL: &str =
    "https://www.yes24.com/product/category/CategoryProductContents";

/// Histogram bound used by the extended report when none is configured.
pub const EXTENDED_PRICE_MAX: f64 = 100_000.0;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that does not parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that does not parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Parsing is decoupled from the process
/// environment so tests can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let data_root = PathBuf::from(or_default("KSCRAPE_DATA_ROOT", "."));
    let log_level = or_default("KSCRAPE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("KSCRAPE_REQUEST_TIMEOUT_SECS", "30")?;

    let store_locator_url = or_default("KSCRAPE_STORE_LOCATOR_URL", DEFAULT_STORE_LOCATOR_URL);
    let store_delay_ms = parse_u64("KSCRAPE_STORE_DELAY_MS", "500")?;

    let listing_url = or_default("KSCRAPE_LISTING_URL", DEFAULT_LISTING_URL);
    let listing_first_page = parse_u32("KSCRAPE_LISTING_FIRST_PAGE", "1")?;
    let listing_last_page = parse_u32("KSCRAPE_LISTING_LAST_PAGE", "3")?;
    if listing_first_page == 0 || listing_last_page < listing_first_page {
        return Err(invalid(
            "KSCRAPE_LISTING_LAST_PAGE",
            format!("page range {listing_first_page}..={listing_last_page} is empty"),
        ));
    }
    let listing_delay_ms = parse_u64("KSCRAPE_LISTING_DELAY_MS", "1000")?;

    let report_variant = parse_report_variant(&or_default("KSCRAPE_REPORT_VARIANT", "standard"))?;
    let report_price_max = match lookup("KSCRAPE_REPORT_PRICE_MAX") {
        Ok(raw) => parse_price_max(&raw)?,
        Err(_) => match report_variant {
            ReportVariant::Standard => None,
            ReportVariant::Extended => Some(EXTENDED_PRICE_MAX),
        },
    };
    let report_top_n = parse_usize("KSCRAPE_REPORT_TOP_N", "10")?;
    let report_wordcloud = parse_bool(
        "KSCRAPE_REPORT_WORDCLOUD",
        &or_default("KSCRAPE_REPORT_WORDCLOUD", "true"),
    )?;
    let font_path = PathBuf::from(or_default(
        "KSCRAPE_FONT_PATH",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ));

    Ok(AppConfig {
        data_root,
        log_level,
        request_timeout_secs,
        store_locator_url,
        store_delay_ms,
        listing_url,
        listing_first_page,
        listing_last_page,
        listing_delay_ms,
        report_variant,
        report_price_max,
        report_top_n,
        report_wordcloud,
        font_path,
    })
}

fn parse_report_variant(s: &str) -> Result<ReportVariant, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "standard" => Ok(ReportVariant::Standard),
        "extended" => Ok(ReportVariant::Extended),
        other => Err(ConfigError::InvalidEnvVar {
            var: "KSCRAPE_REPORT_VARIANT".to_string(),
            reason: format!("unknown variant \"{other}\" (expected standard or extended)"),
        }),
    }
}

/// `"none"` (or an empty value) disables the bound.
fn parse_price_max(raw: &str) -> Result<Option<f64>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(Some(v)),
        Ok(v) => Err(ConfigError::InvalidEnvVar {
            var: "KSCRAPE_REPORT_PRICE_MAX".to_string(),
            reason: format!("bound must be a positive number, got {v}"),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            var: "KSCRAPE_REPORT_PRICE_MAX".to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
