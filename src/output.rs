use crate::analysis::{AnalysisResult, Palette, Rgb};
use crate::decode::Roi;
use colored::*;

/// Width of one value column in comparison tables (including the leading space)
const COLUMN_WIDTH: usize = 7;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

/// Block of terminal cells painted with the swatch color
pub(crate) fn swatch_block(color: Rgb) -> ColoredString {
    "    ".on_truecolor(color.r, color.g, color.b)
}

pub(crate) fn print_file_info(display_name: &str, width: u32, height: u32, roi: Option<&Roi>) {
    println!("File: {}", display_name);
    println!("Size: {}x{}", width, height);
    if let Some(roi) = roi {
        println!("Region: {}", roi);
    }
    println!();
}

pub(crate) fn print_palette(palette: &Palette) {
    println!("Palette (H 0-179, S 0-255, V 0-255):");
    for category in palette.categories() {
        let ranges: Vec<String> = category
            .segments
            .iter()
            .map(|s| format!("{}-{}", s.lower, s.upper))
            .collect();
        println!("  {:>8}: {}", category.name, ranges.join("  "));
    }
    println!();
}

/// Print colors largest first, hiding those below `min_percent`
pub(crate) fn print_distribution(result: &AnalysisResult, min_percent: f64) {
    if result.is_empty() {
        println!("  No pixels matched any color category");
        return;
    }

    let mut hidden = 0;
    for category in result.by_share() {
        if category.percent() < min_percent {
            hidden += 1;
            continue;
        }
        println!(
            "  {} {:<8} {:>6.2}%  {}",
            swatch_block(category.swatch),
            style_label(&category.name),
            category.percent(),
            category.swatch
        );
    }

    if hidden > 0 {
        println!("  ({} below {:.1}% not shown)", hidden, min_percent);
    }
}

pub(crate) fn print_header(labels: &[&str], prefix: &str) {
    print!("{}", prefix);
    for label in labels {
        print!(" {:>6}", label);
    }
    println!();
}

pub(crate) fn print_separator(columns: usize, prefix_width: usize) {
    println!(
        "{}{}",
        "-".repeat(prefix_width),
        "-".repeat(columns * COLUMN_WIDTH)
    );
}

pub(crate) fn print_row_styled(label_prefix: &str, label_suffix: &str, values: &[f64]) {
    print!("{}{}", style_label(label_prefix), label_suffix);
    for v in values {
        if v.is_finite() {
            print!(" {:>6.2}", v);
        } else {
            print!("      -");
        }
    }
    println!();
}

pub(crate) fn print_diff_row_styled(label_prefix: &str, label_suffix: &str, a: &[f64], b: &[f64]) {
    print!("{}{}", style_label(label_prefix), label_suffix);
    for (va, vb) in a.iter().zip(b) {
        let diff = vb - va;
        if diff.is_finite() {
            print_colored_diff(diff);
        } else {
            print!("      -");
        }
    }
    println!();
}

fn print_colored_diff(diff: f64) {
    let rounded = (diff * 100.0).round() / 100.0;
    if rounded == 0.0 {
        print!("   0.00");
    } else {
        let formatted = format!("{:>+6.2}", diff);
        if rounded > 0.0 {
            print!(" {}", formatted.green());
        } else {
            print!(" {}", formatted.red());
        }
    }
}

pub(crate) fn print_legend() {
    println!("Percent: share of the pixels that matched a color category");
    println!("Swatch: average color of the pixels in that category");
}

pub(crate) fn print_compare_legend() {
    println!("Values: percent of matched pixels per color");
    println!("Diff: difference from the base file [A]");
}
