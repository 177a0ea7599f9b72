//! Pixel classification into named colors

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::grid::{PixelGrid, Rgb};
use super::hsv::{Hsv, rgb_to_hsv};
use super::palette::{ColorCategory, Palette};

/// 100% expressed in hundredths of a percent
pub(crate) const FULL_SHARE: u32 = 10_000;

/// Swatch reported when a category has pixels but no mean could be taken
pub(crate) const NEUTRAL_SWATCH: Rgb = Rgb::new(0, 0, 0);

/// Row-major membership of each pixel in one category
pub(crate) struct CategoryMask {
    bits: Vec<bool>,
}

impl CategoryMask {
    pub(crate) fn build(hsv: &[Hsv], category: &ColorCategory) -> Self {
        Self {
            bits: hsv.iter().map(|&px| category.contains(px)).collect(),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Mean of the masked pixels, each channel rounded half-up. None if the mask is empty.
    pub(crate) fn mean_color(&self, grid: &PixelGrid) -> Option<Rgb> {
        let (mut r, mut g, mut b, mut n) = (0u64, 0u64, 0u64, 0u64);
        for (px, _) in grid
            .pixels()
            .iter()
            .zip(&self.bits)
            .filter(|(_, in_mask)| **in_mask)
        {
            r += px.r as u64;
            g += px.g as u64;
            b += px.b as u64;
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let mean = |sum: u64| ((2 * sum + n) / (2 * n)) as u8;
        Some(Rgb::new(mean(r), mean(g), mean(b)))
    }
}

/// Share and swatch of one color in the analyzed region
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryResult {
    pub(crate) name: String,
    /// Share in hundredths of a percent (6000 = 60.00%)
    pub(crate) hundredths: u32,
    pub(crate) swatch: Rgb,
}

impl CategoryResult {
    pub(crate) fn percent(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

/// Colors found in a region, in palette order. Empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AnalysisResult {
    categories: Vec<CategoryResult>,
}

impl AnalysisResult {
    pub(crate) fn categories(&self) -> &[CategoryResult] {
        &self.categories
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Categories ordered by share, largest first; equal shares keep palette order
    pub(crate) fn by_share(&self) -> Vec<&CategoryResult> {
        let mut sorted: Vec<&CategoryResult> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.hundredths.cmp(&a.hundredths));
        sorted
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Entry {
            percent: f64,
            swatch: String,
        }

        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(
                &category.name,
                &Entry {
                    percent: category.percent(),
                    swatch: category.swatch.to_string(),
                },
            )?;
        }
        map.end()
    }
}

/// Convert pixel counts to shares in hundredths of a percent that sum to exactly 100%.
///
/// Each share is rounded half-up on its own. Any leftover from rounding is added
/// to the largest share; among equal largest shares the first one wins. An
/// overshoot bigger than the largest share is taken one hundredth at a time from
/// the shares in descending order instead, so no share drops below zero.
pub(crate) fn counts_to_hundredths(counts: &[u64]) -> Vec<u32> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let scale = FULL_SHARE as u64;
    let mut shares: Vec<u32> = counts
        .iter()
        .map(|&count| ((2 * scale * count + total) / (2 * total)) as u32)
        .collect();

    let sum: i64 = shares.iter().map(|&s| s as i64).sum();
    let diff = FULL_SHARE as i64 - sum;
    if diff == 0 {
        return shares;
    }

    let mut largest = 0;
    for (idx, &share) in shares.iter().enumerate() {
        if share > shares[largest] {
            largest = idx;
        }
    }

    if let Some(corrected) = shares[largest].checked_add_signed(diff as i32) {
        log::debug!(
            "Rounding correction of {} hundredths applied to category #{}",
            diff,
            largest
        );
        shares[largest] = corrected;
        return shares;
    }

    // Stable sort keeps palette order among equal shares
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| shares[b].cmp(&shares[a]));

    let mut excess = diff.unsigned_abs();
    log::debug!(
        "Rounding correction of {} hundredths spread over the largest categories",
        diff
    );
    while excess > 0 {
        for &idx in &order {
            if excess == 0 {
                break;
            }
            if shares[idx] > 0 {
                shares[idx] -= 1;
                excess -= 1;
            }
        }
    }

    shares
}

/// Classify every pixel against the palette and report each color's share and swatch
pub(crate) fn classify(grid: &PixelGrid, palette: &Palette) -> AnalysisResult {
    let hsv: Vec<Hsv> = grid.pixels().iter().map(|&px| rgb_to_hsv(px)).collect();

    let mut matched: Vec<(&str, u64, Option<Rgb>)> = Vec::new();
    for category in palette.categories() {
        let mask = CategoryMask::build(&hsv, category);
        let count = mask.count() as u64;
        log::debug!(
            "{}: {} of {} pixels",
            category.name,
            count,
            grid.pixels().len()
        );
        if count == 0 {
            continue;
        }
        matched.push((category.name.as_str(), count, mask.mean_color(grid)));
    }

    if matched.is_empty() {
        return AnalysisResult::default();
    }

    let counts: Vec<u64> = matched.iter().map(|&(_, count, _)| count).collect();
    let shares = counts_to_hundredths(&counts);

    let categories = matched
        .into_iter()
        .zip(shares)
        .map(|((name, _, swatch), hundredths)| CategoryResult {
            name: name.to_string(),
            hundredths,
            swatch: swatch.unwrap_or(NEUTRAL_SWATCH),
        })
        .collect();

    AnalysisResult { categories }
}
