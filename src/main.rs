mod analysis;
mod chart;
mod decode;
mod mode;
mod output;

use std::path::Path;

use clap::Parser;

use analysis::Palette;
use decode::{Roi, STDIN_SOURCE};
use mode::{RunOptions, run_compare, run_stats};
use output::{print_error, print_palette, print_warning};

/// Maximum number of images accepted in one run
const MAX_FILES: usize = 10;

/// Colors under 1% are hidden from the text output unless asked for
const DEFAULT_MIN_PERCENT: f64 = 1.0;

#[derive(Parser)]
#[command(
    name = "huestat",
    version,
    about = "Image color analyzer: share of each named color with its average swatch",
    after_help = "Examples:
  huestat photo.jpg                                Single image analysis
  huestat photo.jpg --roi 120,80,200,150           Analyze a region (x,y,width,height)
  huestat a.png b.png                              Compare images (first is base)
  huestat photo.jpg --json                         JSON output
  huestat photo.jpg --palette colors.json          Custom color ranges
  cat photo.png | huestat -                        Read the image from stdin
  huestat photo.jpg --image chart.png              Output a chart of the colors"
)]
struct Args {
    /// Images to analyze (PNG, JPEG, BMP, ...). Up to 10 files for comparison, `-` for stdin.
    #[arg(required_unless_present = "list_palette")]
    files: Vec<String>,

    /// Region of interest to analyze, in pixels of the full image
    #[arg(long, value_name = "X,Y,W,H")]
    roi: Option<Roi>,

    /// JSON file with custom color categories
    #[arg(long, value_name = "PATH")]
    palette: Option<String>,

    /// Print results as JSON
    #[arg(short, long)]
    json: bool,

    /// Hide colors below this percentage in the text output [default: 1]
    #[arg(short, long, value_name = "PERCENT")]
    min_percent: Option<f64>,

    /// Print the palette's color ranges and exit
    #[arg(long)]
    list_palette: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn load_palette(path: Option<&str>) -> Palette {
    match path {
        Some(path) => Palette::load(Path::new(path)).unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        }),
        None => Palette::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    let palette = load_palette(args.palette.as_deref());

    if palette.is_empty() {
        print_warning("Palette has no categories, no colors will be reported");
    }

    if args.list_palette {
        print_palette(&palette);
        return;
    }

    // Validate file count
    if args.files.len() > MAX_FILES {
        print_error(&format!("Too many files specified (max {})", MAX_FILES));
        std::process::exit(1);
    }

    if args.files.iter().filter(|f| f.as_str() == STDIN_SOURCE).count() > 1 {
        print_error("stdin (-) can only be read once");
        std::process::exit(1);
    }

    // Validate option combinations
    let min_percent = args.min_percent.unwrap_or(DEFAULT_MIN_PERCENT);
    if !(0.0..=100.0).contains(&min_percent) {
        print_error("--min-percent must be between 0 and 100");
        std::process::exit(1);
    }

    if args.json && args.min_percent.is_some() {
        print_error("--min-percent cannot be used with --json");
        std::process::exit(1);
    }

    if args.image.is_some() && args.files.len() > chart::MAX_CHART_FILES {
        print_error(&format!(
            "--image supports up to {} files",
            chart::MAX_CHART_FILES
        ));
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image
        && let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }

    let options = RunOptions {
        roi: args.roi,
        palette: &palette,
        quiet: args.quiet,
        json: args.json,
        min_percent,
        image_path: args.image.as_deref(),
    };

    // Dispatch to appropriate mode
    if args.files.len() >= 2 {
        run_compare(&args.files, &options);
    } else {
        run_stats(&args.files[0], &options);
    }
}
