//! Parse-then-default numeric coercion shared by the listing extractor and
//! the report cleaner.
//!
//! Every function here is total: the only trapped condition is the parse
//! error itself, which becomes the documented default (`0` / `0.0`).

use std::sync::LazyLock;

use regex::Regex;

static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid decimal regex"));

/// Keeps ASCII digits only and parses the result as an integer.
///
/// An input with no digits at all, or one whose digits overflow `i64`,
/// yields `0`.
#[must_use]
pub fn digits_or_zero(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    parse_int_or_zero(&digits)
}

/// Parses `raw` as an integer, `0` on failure.
#[must_use]
pub fn parse_int_or_zero(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// Parses `raw` as a finite float, `0.0` on failure.
#[must_use]
pub fn parse_float_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Reduces `raw` to its digits and dots, then parses it when the remainder
/// looks like `123` or `123.45`.
///
/// `"평점 9.6점"` becomes `9.6`; `"1.2.3"` and `""` become `0.0`.
#[must_use]
pub fn parse_decimal_or_zero(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !PLAIN_DECIMAL.is_match(&kept) {
        return 0.0;
    }
    parse_float_or_zero(&kept)
}
