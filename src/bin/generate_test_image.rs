use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

const SIZE: u32 = 100;

fn solid(color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(SIZE, SIZE, Rgb(color))
}

/// Left `split` percent of the columns in `a`, the rest in `b`
fn split(a: [u8; 3], b: [u8; 3], split: u32) -> RgbImage {
    let boundary = SIZE * split / 100;
    RgbImage::from_fn(SIZE, SIZE, |x, _| if x < boundary { Rgb(a) } else { Rgb(b) })
}

/// One vertical stripe per color
fn stripes(colors: &[[u8; 3]]) -> RgbImage {
    let width = SIZE / colors.len() as u32 * colors.len() as u32;
    let stripe = width / colors.len() as u32;
    RgbImage::from_fn(width, SIZE, |x, _| Rgb(colors[(x / stripe) as usize]))
}

/// Full-saturation hue sweep from left to right
fn hue_sweep() -> RgbImage {
    let width = 360;
    RgbImage::from_fn(width, SIZE, |x, _| {
        let h = x as f32 / 60.0;
        let f = h - h.floor();
        let up = (255.0 * f).round() as u8;
        let down = 255 - up;
        Rgb(match h as u32 {
            0 => [255, up, 0],
            1 => [down, 255, 0],
            2 => [0, 255, up],
            3 => [0, down, 255],
            4 => [up, 0, 255],
            _ => [255, 0, down],
        })
    })
}

fn main() -> ImageResult<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    // Single color (blue: 100%)
    solid([0, 0, 255]).save(dir.join("blue.png"))?;

    // 60% red, 40% blue
    split([255, 0, 0], [0, 0, 255], 60).save(dir.join("red60_blue40.png"))?;

    // Red from both ends of the hue circle (merged into one "red")
    split([255, 0, 0], [255, 0, 10], 75).save(dir.join("red_wrap.png"))?;

    // One stripe per built-in color (~8.3% each)
    let palette_colors = [
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
    stripes(&palette_colors).save(dir.join("palette.png"))?;

    hue_sweep().save(dir.join("hue_sweep.png"))?;

    println!("Generated: blue.png, red60_blue40.png, red_wrap.png, palette.png, hue_sweep.png");
    Ok(())
}
