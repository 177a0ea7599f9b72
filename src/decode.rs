//! Image loading, region cropping and conversion to a pixel grid

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use image::{DynamicImage, RgbImage, imageops};
use thiserror::Error;

use crate::analysis::{GridError, PixelGrid, Rgb};

/// Source name that reads encoded image bytes from stdin
pub(crate) const STDIN_SOURCE: &str = "-";

/// Smallest region (per side) worth analyzing
pub(crate) const MIN_ROI_SIDE: u32 = 5;

#[derive(Error, Debug)]
pub(crate) enum DecodeError {
    #[error("Error opening file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Invalid region '{0}': expected x,y,width,height")]
    RoiSyntax(String),

    #[error("Region {width}x{height} is too small (minimum {min}x{min})")]
    RoiTooSmall { width: u32, height: u32, min: u32 },

    #[error("Region {roi} exceeds image bounds {width}x{height}")]
    RoiOutOfBounds { roi: Roi, width: u32, height: u32 },
}

/// Rectangular region of interest in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Roi {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Roi {
    /// Check the region is large enough and lies inside an image of the given size
    fn check(&self, image_width: u32, image_height: u32) -> Result<(), DecodeError> {
        if self.width < MIN_ROI_SIDE || self.height < MIN_ROI_SIDE {
            return Err(DecodeError::RoiTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_ROI_SIDE,
            });
        }
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if right > image_width as u64 || bottom > image_height as u64 {
            return Err(DecodeError::RoiOutOfBounds {
                roi: *self,
                width: image_width,
                height: image_height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Roi {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<u32> = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| DecodeError::RoiSyntax(s.to_string()))?;

        match parts.as_slice() {
            &[x, y, width, height] => Ok(Roi {
                x,
                y,
                width,
                height,
            }),
            _ => Err(DecodeError::RoiSyntax(s.to_string())),
        }
    }
}

/// Decoded image ready for analysis
pub(crate) struct LoadedImage {
    /// Size of the full image before cropping
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) roi: Option<Roi>,
    pub(crate) grid: PixelGrid,
}

/// Load an image file (or stdin for `-`) and crop it to the region if given
pub(crate) fn load_image(source: &str, roi: Option<Roi>) -> Result<LoadedImage, DecodeError> {
    let bytes = if source == STDIN_SOURCE {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        bytes
    } else {
        std::fs::read(source)?
    };
    let image = load_image_bytes(&bytes)?;

    log::info!(
        "Decoded {} ({}x{}, {:?})",
        source,
        image.width(),
        image.height(),
        image.color()
    );

    to_loaded_image(image, roi)
}

/// Decode encoded image bytes (PNG, JPEG, ...) as delivered by an upload
pub(crate) fn load_image_bytes(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Convert a decoded image to RGB, crop it and build the pixel grid
pub(crate) fn to_loaded_image(
    image: DynamicImage,
    roi: Option<Roi>,
) -> Result<LoadedImage, DecodeError> {
    let rgb = image.into_rgb8();
    let (width, height) = rgb.dimensions();

    let cropped = match roi {
        Some(roi) => {
            roi.check(width, height)?;
            log::info!("Cropping to region {}", roi);
            imageops::crop_imm(&rgb, roi.x, roi.y, roi.width, roi.height).to_image()
        }
        None => rgb,
    };

    Ok(LoadedImage {
        width,
        height,
        roi,
        grid: to_grid(&cropped)?,
    })
}

fn to_grid(image: &RgbImage) -> Result<PixelGrid, GridError> {
    let pixels = image
        .pixels()
        .map(|p| Rgb::new(p[0], p[1], p[2]))
        .collect();
    PixelGrid::new(image.width(), image.height(), pixels)
}
