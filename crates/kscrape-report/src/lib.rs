pub mod charts;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod plan;
pub mod stats;
pub mod wordcloud;

use std::path::{Path, PathBuf};

pub use charts::{histogram_bins, load_font};
pub use dataset::{clean_number, Book, Cleaning, Dataset};
pub use error::ReportError;
pub use frame::{Frame, DISPLAY_NAMES};
pub use plan::{ChartKind, ReportPlan};
pub use stats::Summary;

use kscrape_core::OutputPaths;

/// Result of a report run that got past loading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutput {
    pub summary: Summary,
    pub charts_written: Vec<PathBuf>,
    /// Charts that were planned but not produced.
    pub charts_failed: Vec<ChartKind>,
}

/// Loads the listing CSV, summarizes it and renders the planned charts
/// into `charts_dir`.
///
/// Chart problems, including an unusable font, are logged and reported in
/// [`ReportOutput::charts_failed`]; they never discard the summary.
///
/// # Errors
///
/// Returns [`ReportError::Load`] or [`ReportError::MissingColumn`] when the
/// CSV cannot be turned into a dataset. Nothing is rendered in that case.
pub fn run_report(
    plan: &ReportPlan,
    csv_path: &Path,
    charts_dir: &Path,
    font_path: &Path,
) -> Result<ReportOutput, ReportError> {
    let mut frame = Frame::load(csv_path)?;
    frame.rename_columns(&DISPLAY_NAMES);
    let data = Dataset::from_frame(&frame, plan.cleaning)?;
    tracing::info!(
        rows = data.len(),
        variant = %plan.variant,
        path = %csv_path.display(),
        "listing data loaded"
    );

    let summary = Summary::from_dataset(&data);
    let mut output = ReportOutput {
        summary,
        charts_written: Vec::new(),
        charts_failed: Vec::new(),
    };
    if plan.charts.is_empty() {
        return Ok(output);
    }

    if let Err(e) = prepare_charts(charts_dir, font_path) {
        tracing::error!(error = %e, "charts skipped");
        output.charts_failed.clone_from(&plan.charts);
        return Ok(output);
    }

    for &kind in &plan.charts {
        let path = charts_dir.join(kind.file_name());
        match charts::render(kind, &data, plan, &path) {
            Ok(()) => {
                tracing::info!(chart = kind.label(), path = %path.display(), "chart saved");
                output.charts_written.push(path);
            }
            Err(e) => {
                tracing::error!(chart = kind.label(), error = %e, "chart failed; skipping");
                output.charts_failed.push(kind);
            }
        }
    }

    Ok(output)
}

fn prepare_charts(charts_dir: &Path, font_path: &Path) -> Result<(), ReportError> {
    load_font(font_path)?;
    OutputPaths::ensure_dir(charts_dir)?;
    Ok(())
}
