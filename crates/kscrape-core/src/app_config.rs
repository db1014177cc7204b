use std::path::PathBuf;

/// Which of the two reporting recipes to run over the listing CSV.
///
/// `Standard` strips thousands separators only and draws the short chart
/// set. `Extended` also strips the `원` suffix, bounds the price histogram
/// and adds the bestseller chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    Standard,
    Extended,
}

impl std::fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportVariant::Standard => write!(f, "standard"),
            ReportVariant::Extended => write!(f, "extended"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub data_root: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub store_locator_url: String,
    pub store_delay_ms: u64,
    pub listing_url: String,
    pub listing_first_page: u32,
    pub listing_last_page: u32,
    pub listing_delay_ms: u64,
    pub report_variant: ReportVariant,
    /// Upper bound for the price histogram; `None` keeps every row.
    pub report_price_max: Option<f64>,
    pub report_top_n: usize,
    pub report_wordcloud: bool,
    pub font_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_root", &self.data_root)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("store_locator_url", &self.store_locator_url)
            .field("store_delay_ms", &self.store_delay_ms)
            .field("listing_url", &self.listing_url)
            .field(
                "listing_pages",
                &(self.listing_first_page..=self.listing_last_page),
            )
            .field("listing_delay_ms", &self.listing_delay_ms)
            .field("report_variant", &self.report_variant)
            .field("report_price_max", &self.report_price_max)
            .field("report_top_n", &self.report_top_n)
            .field("report_wordcloud", &self.report_wordcloud)
            .field("font_path", &self.font_path)
            .finish()
    }
}
