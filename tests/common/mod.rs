//! Common test utilities

use std::path::Path;

use image::{Rgb, RgbImage};

pub const RED: [u8; 3] = [255, 0, 0];
/// Red on the far side of the hue seam (hue 179)
pub const DEEP_RED: [u8; 3] = [255, 0, 10];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// One color per built-in category, in palette order
pub const PALETTE_COLORS: [[u8; 3]; 12] = [
    [0, 0, 0],       // black
    [255, 255, 255], // white
    [128, 128, 128], // gray
    [255, 0, 0],     // red
    [255, 128, 0],   // orange
    [128, 64, 0],    // brown
    [255, 255, 0],   // yellow
    [0, 255, 0],     // green
    [0, 255, 255],   // cyan
    [0, 0, 255],     // blue
    [255, 0, 255],   // purple
    [255, 0, 160],   // pink
];

/// Generate an image filled with one color
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Generate an image whose columns left of `split_x` are `left` and the rest `right`
pub fn columns(width: u32, height: u32, split_x: u32, left: [u8; 3], right: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < split_x { Rgb(left) } else { Rgb(right) }
    })
}

/// Generate vertical stripes of equal width, one per color
pub fn stripes(colors: &[[u8; 3]], stripe_width: u32, height: u32) -> RgbImage {
    let width = stripe_width * colors.len() as u32;
    RgbImage::from_fn(width, height, |x, _| Rgb(colors[(x / stripe_width) as usize]))
}

/// Write an image as PNG to the given path
pub fn write_png(path: &Path, image: &RgbImage) -> image::ImageResult<()> {
    image.save_with_format(path, image::ImageFormat::Png)
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("PNG encoding should not fail");
    bytes.into_inner()
}
