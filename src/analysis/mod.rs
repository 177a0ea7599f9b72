//! Color analysis: HSV thresholds, per-color shares and swatches

mod classify;
mod grid;
mod hsv;
mod palette;

pub(crate) use classify::{AnalysisResult, classify};
pub(crate) use grid::{GridError, PixelGrid, Rgb};
pub(crate) use palette::Palette;
