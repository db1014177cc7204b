//! What a report run renders, derived from the configured variant.

use kscrape_core::{AppConfig, ReportVariant};

use crate::dataset::Cleaning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    PriceDistribution,
    TopPublishers,
    TopBestsellers,
    SalesVsReviews,
    WordCloud,
}

impl ChartKind {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::PriceDistribution => "price_dist.png",
            Self::TopPublishers => "top_publishers.png",
            Self::TopBestsellers => "top_bestsellers.png",
            Self::SalesVsReviews => "sales_vs_reviews.png",
            Self::WordCloud => "wordcloud.png",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PriceDistribution => "price_dist",
            Self::TopPublishers => "top_publishers",
            Self::TopBestsellers => "top_bestsellers",
            Self::SalesVsReviews => "sales_vs_reviews",
            Self::WordCloud => "wordcloud",
        }
    }
}

const GENERIC_STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "of", "to", "in", "a", "an", "및", "등", "위한",
];

const TITLE_FILLER_STOPWORDS: &[&str] = &[
    "개정판", "개정", "증보판", "전면", "완벽", "가이드", "입문", "기초", "실전", "활용",
    "시작하는", "배우는", "만드는", "따라하며", "코딩", "에디션", "리커버", "특별판",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub variant: ReportVariant,
    pub cleaning: Cleaning,
    pub price_max: Option<f64>,
    pub top_n: usize,
    pub charts: Vec<ChartKind>,
    pub stopwords: Vec<&'static str>,
}

impl ReportPlan {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut plan = Self::for_variant(config.report_variant);
        plan.price_max = config.report_price_max;
        plan.top_n = config.report_top_n;
        if !config.report_wordcloud {
            plan.charts.retain(|c| *c != ChartKind::WordCloud);
        }
        plan
    }

    /// Defaults for `variant` before configuration overrides.
    #[must_use]
    pub fn for_variant(variant: ReportVariant) -> Self {
        let mut stopwords = GENERIC_STOPWORDS.to_vec();
        let (cleaning, price_max, charts) = match variant {
            ReportVariant::Standard => (
                Cleaning::SeparatorsOnly,
                None,
                vec![
                    ChartKind::PriceDistribution,
                    ChartKind::TopPublishers,
                    ChartKind::SalesVsReviews,
                    ChartKind::WordCloud,
                ],
            ),
            ReportVariant::Extended => {
                stopwords.extend_from_slice(TITLE_FILLER_STOPWORDS);
                (
                    Cleaning::SeparatorsAndCurrency,
                    Some(kscrape_core::config::EXTENDED_PRICE_MAX),
                    vec![
                        ChartKind::PriceDistribution,
                        ChartKind::TopPublishers,
                        ChartKind::TopBestsellers,
                        ChartKind::SalesVsReviews,
                        ChartKind::WordCloud,
                    ],
                )
            }
        };
        stopwords.sort_unstable();
        stopwords.dedup();

        Self {
            variant,
            cleaning,
            price_max,
            top_n: 10,
            charts,
            stopwords,
        }
    }

    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords
            .binary_search_by(|word| (*word).cmp(token))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_skips_bestsellers_and_has_no_bound() {
        let plan = ReportPlan::for_variant(ReportVariant::Standard);
        assert_eq!(plan.cleaning, Cleaning::SeparatorsOnly);
        assert_eq!(plan.price_max, None);
        assert!(!plan.charts.contains(&ChartKind::TopBestsellers));
        assert!(!plan.is_stopword("개정판"));
        assert!(plan.is_stopword("및"));
    }

    #[test]
    fn extended_plan_adds_bestsellers_and_filler_words() {
        let plan = ReportPlan::for_variant(ReportVariant::Extended);
        assert_eq!(plan.cleaning, Cleaning::SeparatorsAndCurrency);
        assert_eq!(plan.price_max, Some(100_000.0));
        assert_eq!(plan.charts.len(), 5);
        assert!(plan.is_stopword("개정판"));
        assert!(plan.is_stopword("the"));
    }

    #[test]
    fn file_names_are_fixed() {
        assert_eq!(ChartKind::PriceDistribution.file_name(), "price_dist.png");
        assert_eq!(ChartKind::WordCloud.file_name(), "wordcloud.png");
    }
}
