//! RGB to HSV conversion (8-bit, hue stored as degrees / 2)

use std::fmt;

use serde::Deserialize;

use super::grid::Rgb;

/// Number of distinct hue values (0..=179)
pub(crate) const HUE_STEPS: u8 = 180;

/// HSV triple: hue 0-179, saturation 0-255, value 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub(crate) struct Hsv {
    pub(crate) h: u8,
    pub(crate) s: u8,
    pub(crate) v: u8,
}

impl Hsv {
    pub(crate) const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl From<[u8; 3]> for Hsv {
    fn from([h, s, v]: [u8; 3]) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>3},{:>3},{:>3})", self.h, self.s, self.v)
    }
}

/// Convert an RGB pixel to HSV.
///
/// V is the channel maximum, S is `255 * (max - min) / max` rounded to nearest,
/// and H is the hue angle halved and rounded so a full turn fits in a byte.
/// A rounded hue of 180 wraps to 0. Achromatic pixels get hue 0.
pub(crate) fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as i32;
    let g = rgb.g as i32;
    let b = rgb.b as i32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0 {
        0
    } else {
        ((255 * delta) as f64 / max as f64).round() as u8
    };

    let degrees = if delta == 0 {
        0.0
    } else if max == r {
        60.0 * (g - b) as f64 / delta as f64
    } else if max == g {
        120.0 + 60.0 * (b - r) as f64 / delta as f64
    } else {
        240.0 + 60.0 * (r - g) as f64 / delta as f64
    };
    let degrees = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };

    let mut h = (degrees / 2.0).round() as u16;
    if h >= HUE_STEPS as u16 {
        h -= HUE_STEPS as u16;
    }

    Hsv {
        h: h as u8,
        s,
        v: max as u8,
    }
}
