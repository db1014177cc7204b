//! Static PNG charts over the listing dataset.
//!
//! Every renderer draws with the `sans-serif` family, which [`load_font`]
//! binds to the configured font file so Hangul labels render.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::dataset::{Book, Dataset};
use crate::error::ReportError;
use crate::plan::{ChartKind, ReportPlan};
use crate::stats::{count_by, top_n_by_sales};
use crate::wordcloud;

type DrawResult = Result<(), Box<dyn Error>>;

pub const FONT_FAMILY: &str = "sans-serif";
pub const HISTOGRAM_BINS: usize = 20;

const CHART_SIZE: (u32, u32) = (1000, 600);
const SKYBLUE: RGBColor = RGBColor(135, 206, 235);
const SALMON: RGBColor = RGBColor(250, 128, 114);
const STEELBLUE: RGBColor = RGBColor(70, 130, 180);
const MAX_LABEL_CHARS: usize = 24;

/// Reads a TTF/OTF file and registers it as the `sans-serif` family.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read and
/// [`ReportError::Font`] if it is not a usable font.
pub fn load_font(path: &Path) -> Result<(), ReportError> {
    let bytes = std::fs::read(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    // Registered fonts must outlive every later draw call.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes).map_err(|_| ReportError::Font {
        path: path.display().to_string(),
        reason: "not a valid TrueType/OpenType font".to_owned(),
    })
}

/// Renders one chart to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Chart`] when there is nothing to draw or the
/// backend fails.
pub fn render(
    kind: ChartKind,
    data: &Dataset,
    plan: &ReportPlan,
    path: &Path,
) -> Result<(), ReportError> {
    let result = match kind {
        ChartKind::PriceDistribution => price_distribution(data, plan.price_max, path),
        ChartKind::TopPublishers => top_publishers(data, plan.top_n, path),
        ChartKind::TopBestsellers => top_bestsellers(data, plan.top_n, path),
        ChartKind::SalesVsReviews => sales_vs_reviews(data, path),
        ChartKind::WordCloud => wordcloud::render(data, plan, path),
    };
    result.map_err(|e| ReportError::Chart {
        chart: kind.label(),
        reason: e.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins spanning `[min, max]`; the last bin is closed.
/// A single repeated value is widened to `value ± 0.5`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lo: lo + width * i as f64,
            hi: lo + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    for v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[allow(clippy::cast_precision_loss)]
fn price_distribution(data: &Dataset, price_max: Option<f64>, path: &Path) -> DrawResult {
    let prices: Vec<f64> = data
        .books
        .iter()
        .map(|b| b.sale_price)
        .filter(|p| price_max.is_none_or(|max| *p <= max))
        .collect();
    let bins = histogram_bins(&prices, HISTOGRAM_BINS);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return Err("no prices to plot".into());
    };
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    let caption = match price_max {
        Some(max) => format!("판매가 분포 ({max:.0}원 이하)"),
        None => "판매가 분포".to_owned(),
    };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(first.lo..last.hi, 0f64..(peak as f64 * 1.1))?;
    chart
        .configure_mesh()
        .x_desc("판매가")
        .y_desc("도서 수")
        .x_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;
    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.lo, 0.0), (b.hi, b.count as f64)], SKYBLUE.filled())
    }))?;
    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.lo, 0.0), (b.hi, b.count as f64)], BLACK.stroke_width(1))
    }))?;
    root.present()?;
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn top_publishers(data: &Dataset, top_n: usize, path: &Path) -> DrawResult {
    let mut counts = count_by(data.books.iter().map(|b| b.publisher.as_str()));
    counts.truncate(top_n);
    let bars: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(name, n)| (name, n as f64))
        .collect();
    horizontal_bars(
        &format!("출판사별 도서 수 (상위 {})", bars.len()),
        "도서 수",
        &bars,
        SALMON,
        path,
    )
}

fn top_bestsellers(data: &Dataset, top_n: usize, path: &Path) -> DrawResult {
    let bars: Vec<(String, f64)> = top_n_by_sales(&data.books, top_n)
        .into_iter()
        .map(|b: &Book| (shorten(&b.title), b.sales_index))
        .collect();
    horizontal_bars(
        &format!("판매지수 상위 {} 도서", bars.len()),
        "판매지수",
        &bars,
        STEELBLUE,
        path,
    )
}

/// Ranked bars, first entry drawn at the top.
fn horizontal_bars(
    caption: &str,
    value_desc: &str,
    bars: &[(String, f64)],
    color: RGBColor,
    path: &Path,
) -> DrawResult {
    if bars.is_empty() {
        return Err("no values to plot".into());
    }
    let n = bars.len();
    let peak = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let peak = if peak > 0.0 { peak * 1.1 } else { 1.0 };
    let label_at = |slot: usize| {
        n.checked_sub(slot + 1)
            .and_then(|rank| bars.get(rank))
            .map(|(label, _)| label.as_str())
    };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(260)
        .build_cartesian_2d(0f64..peak, (0..n).into_segmented())?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(slot) => label_at(*slot).unwrap_or_default().to_owned(),
            _ => String::new(),
        })
        .x_desc(value_desc)
        .draw()?;
    chart.draw_series(bars.iter().enumerate().map(|(rank, (_, value))| {
        let slot = n - 1 - rank;
        let mut bar = Rectangle::new(
            [(0.0, SegmentValue::Exact(slot)), (*value, SegmentValue::Exact(slot + 1))],
            color.filled(),
        );
        bar.set_margin(4, 4, 0, 0);
        bar
    }))?;
    root.present()?;
    Ok(())
}

fn sales_vs_reviews(data: &Dataset, path: &Path) -> DrawResult {
    if data.is_empty() {
        return Err("no rows to plot".into());
    }
    let span = |f: fn(&Book) -> f64| {
        let max = data.books.iter().map(f).fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.05
        } else {
            1.0
        }
    };
    let x_max = span(|b| b.sales_index);
    let y_max = span(|b| b.review_count);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("판매지수 vs 리뷰수", (FONT_FAMILY, 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;
    chart
        .configure_mesh()
        .x_desc("판매지수")
        .y_desc("리뷰수")
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;
    chart.draw_series(
        data.books
            .iter()
            .map(|b| Circle::new((b.sales_index, b.review_count), 4, GREEN.mix(0.5).filled())),
    )?;
    root.present()?;
    Ok(())
}

fn shorten(title: &str) -> String {
    if title.chars().count() <= MAX_LABEL_CHARS {
        return title.to_owned();
    }
    let mut short: String = title.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_every_value() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let bins = histogram_bins(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert!((bins[0].lo - 0.0).abs() < 1e-9);
        assert!((bins[19].hi - 10.0).abs() < 1e-9);
        // the maximum lands in the closed last bin
        assert_eq!(bins[19].count, 1);
    }

    #[test]
    fn constant_values_are_widened() {
        let bins = histogram_bins(&[5.0, 5.0, 5.0], 20);
        assert!((bins[0].lo - 4.5).abs() < 1e-9);
        assert!((bins[19].hi - 5.5).abs() < 1e-9);
        assert_eq!(bins.iter().filter(|b| b.count == 3).count(), 1);
    }

    #[test]
    fn empty_input_has_no_bins() {
        assert!(histogram_bins(&[], 20).is_empty());
    }

    #[test]
    fn long_titles_are_shortened() {
        let long = "가".repeat(40);
        let short = shorten(&long);
        assert_eq!(short.chars().count(), MAX_LABEL_CHARS);
        assert!(short.ends_with('…'));
        assert_eq!(shorten("짧은 제목"), "짧은 제목");
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let err = load_font(Path::new("/no/such/font.ttf")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn bundled_font_registers() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf");
        load_font(&path).unwrap();
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let err = load_font(&path).unwrap_err();
        assert!(matches!(err, ReportError::Font { .. }));
    }
}
