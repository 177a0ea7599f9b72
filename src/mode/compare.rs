//! Multiple image comparison mode

use colored::*;
use serde::Serialize;

use crate::chart::{self, FileChartData};
use crate::output::{
    print_compare_legend, print_diff_row_styled, print_error, print_header, print_palette,
    print_row_styled, print_separator, print_warning,
};

use super::{ColorsReport, FileStats, RunOptions, analyze_file, present_categories, print_json};

#[derive(Serialize)]
struct CompareReport<'a> {
    files: Vec<ColorsReport<'a>>,
}

/// Run comparison analysis for multiple images
pub fn run_compare(filenames: &[String], options: &RunOptions) {
    let labels: Vec<char> = ('A'..='Z').collect();

    let stats: Vec<FileStats> = filenames
        .iter()
        .map(|f| {
            analyze_file(f, options.roi, options.palette).unwrap_or_else(|e| {
                print_error(&format!("{}: {}", f, e));
                std::process::exit(1);
            })
        })
        .collect();

    let results: Vec<_> = stats.iter().map(|s| &s.result).collect();
    let categories = present_categories(options.palette, &results);

    if options.json {
        print_json(&CompareReport {
            files: stats
                .iter()
                .map(|s| ColorsReport {
                    file: Some(s.name.as_str()),
                    colors: &s.result,
                })
                .collect(),
        });
    } else {
        println!("Comparison (base: [A]):");
        for (i, s) in stats.iter().enumerate() {
            let label = format!("[{}]", labels[i]);
            println!("  {} {}", label.bold(), s.name);
        }
        println!();

        if !options.quiet {
            print_palette(options.palette);
        }

        println!("[Color Distribution (%)]");
        // A column stays while any file reaches the threshold
        let shown: Vec<&str> = categories
            .iter()
            .copied()
            .filter(|name| {
                stats.iter().any(|s| {
                    s.result
                        .get(name)
                        .is_some_and(|c| c.percent() >= options.min_percent)
                })
            })
            .collect();

        if categories.is_empty() {
            println!("  No pixels matched any color category");
        } else if !shown.is_empty() {
            let pct: Vec<Vec<f64>> = stats
                .iter()
                .map(|s| {
                    shown
                        .iter()
                        .map(|name| s.result.get(name).map(|c| c.percent()).unwrap_or(0.0))
                        .collect()
                })
                .collect();

            print_header(&shown, "      ");
            print_separator(shown.len(), 6);
            print_row_styled(&format!("[{}]", labels[0]), "   ", &pct[0]);

            for (i, row) in pct.iter().enumerate().skip(1) {
                print_separator(shown.len(), 6);
                print_row_styled(&format!("[{}]", labels[i]), "   ", row);
                print_diff_row_styled(&format!("{}-A", labels[i]), "   ", &pct[0], row);
            }
        }

        let hidden = categories.len() - shown.len();
        if hidden > 0 {
            println!("  ({} below {:.1}% not shown)", hidden, options.min_percent);
        }

        if !options.quiet {
            println!();
            print_compare_legend();
        }
    }

    // Output chart image if requested
    if let Some(path) = options.image_path {
        if categories.is_empty() {
            print_warning("No colors matched, chart not written");
            return;
        }

        let file_data: Vec<FileChartData> = stats
            .iter()
            .enumerate()
            .map(|(i, s)| FileChartData {
                label: labels[i],
                name: &s.name,
                result: &s.result,
            })
            .collect();

        if let Err(e) = chart::render_stacked_chart(&file_data, &categories, path) {
            print_error(&e.to_string());
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
