//! Named color categories and the palette that holds them

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::hsv::{HUE_STEPS, Hsv};

/// Errors raised while loading or validating a palette
#[derive(Error, Debug)]
pub(crate) enum PaletteError {
    #[error("Error reading palette: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Category name must not be empty")]
    EmptyName,

    #[error("Duplicate category: {0}")]
    DuplicateName(String),

    #[error("Category '{0}' has no ranges")]
    NoSegments(String),

    #[error("Category '{name}': lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange { name: String, lower: Hsv, upper: Hsv },

    #[error("Category '{name}': hue bound {hue} exceeds {max}")]
    HueOutOfRange { name: String, hue: u8, max: u8 },
}

/// Inclusive HSV box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct HsvRange {
    pub(crate) lower: Hsv,
    pub(crate) upper: Hsv,
}

impl HsvRange {
    pub(crate) const fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    /// True when every channel lies within [lower, upper]
    pub(crate) fn contains(&self, hsv: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&hsv.h)
            && (self.lower.s..=self.upper.s).contains(&hsv.s)
            && (self.lower.v..=self.upper.v).contains(&hsv.v)
    }
}

/// A named color made of one or more HSV ranges.
///
/// Hues that straddle the 0/179 seam (red) are a single category with two
/// segments, so the classifier never has to merge entries by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ColorCategory {
    pub(crate) name: String,
    pub(crate) segments: Vec<HsvRange>,
}

impl ColorCategory {
    pub(crate) fn new(name: &str, segments: Vec<HsvRange>) -> Self {
        Self {
            name: name.to_string(),
            segments,
        }
    }

    /// True when the pixel falls inside any of the segments
    pub(crate) fn contains(&self, hsv: Hsv) -> bool {
        self.segments.iter().any(|segment| segment.contains(hsv))
    }

    fn validate(&self) -> Result<(), PaletteError> {
        if self.name.trim().is_empty() {
            return Err(PaletteError::EmptyName);
        }
        if self.segments.is_empty() {
            return Err(PaletteError::NoSegments(self.name.clone()));
        }
        for segment in &self.segments {
            let (lower, upper) = (segment.lower, segment.upper);
            if lower.h > upper.h || lower.s > upper.s || lower.v > upper.v {
                return Err(PaletteError::InvertedRange {
                    name: self.name.clone(),
                    lower,
                    upper,
                });
            }
            // 180 is accepted as an upper bound so "full hue" ranges can be written either way
            if upper.h > HUE_STEPS {
                return Err(PaletteError::HueOutOfRange {
                    name: self.name.clone(),
                    hue: upper.h,
                    max: HUE_STEPS,
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct PaletteFile {
    categories: Vec<ColorCategory>,
}

/// Ordered, validated set of categories. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Palette {
    categories: Vec<ColorCategory>,
}

impl Palette {
    pub(crate) fn new(categories: Vec<ColorCategory>) -> Result<Self, PaletteError> {
        let mut seen = HashSet::new();
        for category in &categories {
            category.validate()?;
            if !seen.insert(category.name.as_str()) {
                return Err(PaletteError::DuplicateName(category.name.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Parse a palette from JSON of the form
    /// `{"categories": [{"name": "red", "segments": [{"lower": [h,s,v], "upper": [h,s,v]}]}]}`
    pub(crate) fn from_json_str(json: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = serde_json::from_str(json)?;
        Self::new(file.categories)
    }

    pub(crate) fn load(path: &Path) -> Result<Self, PaletteError> {
        let json = std::fs::read_to_string(path)?;
        let palette = Self::from_json_str(&json)?;
        log::info!(
            "Loaded palette with {} categories from {}",
            palette.len(),
            path.display()
        );
        Ok(palette)
    }

    pub(crate) fn categories(&self) -> &[ColorCategory] {
        &self.categories
    }

    pub(crate) fn len(&self) -> usize {
        self.categories.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn range(lower: (u8, u8, u8), upper: (u8, u8, u8)) -> HsvRange {
    HsvRange::new(
        Hsv::new(lower.0, lower.1, lower.2),
        Hsv::new(upper.0, upper.1, upper.2),
    )
}

impl Default for Palette {
    /// The built-in 12 colors.
    ///
    /// Together the ranges cover every HSV value exactly once: dark pixels are
    /// black, unsaturated ones gray or white, and the rest are split by hue.
    fn default() -> Self {
        let categories = vec![
            ColorCategory::new("black", vec![range((0, 0, 0), (179, 255, 70))]),
            ColorCategory::new("white", vec![range((0, 0, 200), (179, 60, 255))]),
            ColorCategory::new("gray", vec![range((0, 0, 71), (179, 60, 199))]),
            ColorCategory::new(
                "red",
                vec![
                    range((0, 61, 71), (9, 255, 255)),
                    range((170, 61, 71), (179, 255, 255)),
                ],
            ),
            ColorCategory::new("orange", vec![range((10, 61, 181), (25, 255, 255))]),
            ColorCategory::new("brown", vec![range((10, 61, 71), (25, 255, 180))]),
            ColorCategory::new("yellow", vec![range((26, 61, 71), (34, 255, 255))]),
            ColorCategory::new("green", vec![range((35, 61, 71), (85, 255, 255))]),
            ColorCategory::new("cyan", vec![range((86, 61, 71), (95, 255, 255))]),
            ColorCategory::new("blue", vec![range((96, 61, 71), (130, 255, 255))]),
            ColorCategory::new("purple", vec![range((131, 61, 71), (160, 255, 255))]),
            ColorCategory::new("pink", vec![range((161, 61, 71), (169, 255, 255))]),
        ];
        Self { categories }
    }
}
