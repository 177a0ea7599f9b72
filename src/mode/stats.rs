//! Single image color analysis mode

use crate::chart::{self, FileChartData};
use crate::output::{
    print_distribution, print_error, print_file_info, print_legend, print_warning,
};

use super::{ColorsReport, FileStats, RunOptions, analyze_file, present_categories, print_json};

/// Run color analysis for a single image
pub fn run_stats(filename: &str, options: &RunOptions) {
    let stats: FileStats =
        analyze_file(filename, options.roi, options.palette).unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        });

    if options.json {
        print_json(&ColorsReport {
            file: None,
            colors: &stats.result,
        });
    } else {
        if !options.quiet {
            println!();
            println!("Color Analysis");
            print_file_info(&stats.name, stats.width, stats.height, stats.roi.as_ref());
        }

        println!("[Color Distribution]");
        print_distribution(&stats.result, options.min_percent);

        if !options.quiet {
            println!();
            print_legend();
        }
    }

    // Output chart if requested
    if let Some(path) = options.image_path {
        if stats.result.is_empty() {
            print_warning("No colors matched, chart not written");
            return;
        }

        let chart_data = FileChartData {
            label: 'A',
            name: &stats.name,
            result: &stats.result,
        };

        let categories = present_categories(options.palette, &[&stats.result]);
        if let Err(e) = chart::render_stacked_chart(&[chart_data], &categories, path) {
            print_error(&e.to_string());
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
