//! CLI mode implementations

mod compare;
mod stats;

pub use compare::run_compare;
pub use stats::run_stats;

use serde::Serialize;

use crate::analysis::{self, AnalysisResult, Palette};
use crate::decode::{DecodeError, Roi, STDIN_SOURCE, load_image};
use crate::output::{get_display_name, print_error};

/// Options shared by every mode
pub struct RunOptions<'a> {
    pub roi: Option<Roi>,
    pub palette: &'a Palette,
    pub quiet: bool,
    pub json: bool,
    pub min_percent: f64,
    pub image_path: Option<&'a str>,
}

/// Color analysis of a single image
pub struct FileStats {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub roi: Option<Roi>,
    pub result: AnalysisResult,
}

/// Decode one image and classify its pixels
pub fn analyze_file(
    filename: &str,
    roi: Option<Roi>,
    palette: &Palette,
) -> Result<FileStats, DecodeError> {
    let name = if filename == STDIN_SOURCE {
        "<stdin>".to_string()
    } else {
        get_display_name(filename).to_string()
    };

    let image = load_image(filename, roi)?;
    let result = analysis::classify(&image.grid, palette);
    log::info!(
        "{}: {} colors found in {}x{} pixels",
        name,
        result.categories().len(),
        image.grid.width(),
        image.grid.height()
    );

    Ok(FileStats {
        name,
        width: image.width,
        height: image.height,
        roi: image.roi,
        result,
    })
}

/// Palette categories present in at least one result, in palette order
pub fn present_categories<'a>(palette: &'a Palette, results: &[&AnalysisResult]) -> Vec<&'a str> {
    palette
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| results.iter().any(|r| r.get(name).is_some()))
        .collect()
}

/// JSON envelope for one analyzed image
#[derive(Serialize)]
pub struct ColorsReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<&'a str>,
    pub colors: &'a AnalysisResult,
}

/// Pretty-print a report as JSON on stdout
pub fn print_json<T: Serialize>(report: &T) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            print_error(&format!("Failed to serialize result: {}", e));
            std::process::exit(1);
        }
    }
}
