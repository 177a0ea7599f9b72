//! Chart rendering for color distribution visualization

mod stacked;

pub use stacked::render_stacked_chart;

use thiserror::Error;

use crate::analysis::{AnalysisResult, Rgb};

/// Files that fit side by side in one chart
pub const MAX_CHART_FILES: usize = 4;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No colors to render")]
    NoData,

    #[error("Chart supports 1-{max} files")]
    FileCount { max: usize },

    #[error("Failed to save chart: {0}")]
    Render(String),
}

/// Data for a single file in a chart
pub struct FileChartData<'a> {
    pub label: char,
    pub name: &'a str,
    pub result: &'a AnalysisResult,
}

/// Chart dimensions (2x for Retina quality)
const CHART_WIDTH: u32 = 2800;
const CHART_HEIGHT: u32 = 1200;

const COLOR_BACKGROUND: &str = "#0A0A0C";
const COLOR_TEXT: &str = "#FFFFFF";
const COLOR_GRID: &str = "#505050";
/// Segment outline, keeps black and white swatches visible on the background
const COLOR_SEGMENT_BORDER: &str = "#808080";

/// Round a percentage to one decimal place for labels
fn round_pct(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}

/// Percentage of a category in a result, 0 when absent
fn percent_of(result: &AnalysisResult, name: &str) -> f64 {
    result.get(name).map(|c| c.percent()).unwrap_or(0.0)
}

/// Swatch of a category from the first file that has it
fn first_swatch(files: &[FileChartData], name: &str) -> Option<Rgb> {
    files
        .iter()
        .find_map(|f| f.result.get(name).map(|c| c.swatch))
}
