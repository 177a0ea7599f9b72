//! Stacked column chart: one column per file, one swatch-filled segment per color

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine,
        TextStyle,
    },
    renderer::ImageFormat,
    series::Bar,
};

use super::{
    CHART_HEIGHT, CHART_WIDTH, COLOR_BACKGROUND, COLOR_GRID, COLOR_SEGMENT_BORDER, COLOR_TEXT,
    ChartError, FileChartData, MAX_CHART_FILES, first_swatch, percent_of, round_pct,
};

/// Segments below this percentage are drawn without a label
const LABEL_THRESHOLD: f64 = 5.0;

/// Share of the chart width left for columns after the grid margins
const PLOT_WIDTH_RATIO: f64 = 0.92;

/// Render the files' color distributions as stacked columns to a PNG file.
///
/// `categories` fixes the stacking order (bottom to top) and must name colors
/// present in at least one file.
pub fn render_stacked_chart(
    files: &[FileChartData],
    categories: &[&str],
    output_path: &str,
) -> Result<(), ChartError> {
    if files.is_empty() || files.len() > MAX_CHART_FILES {
        return Err(ChartError::FileCount {
            max: MAX_CHART_FILES,
        });
    }
    if categories.is_empty() {
        return Err(ChartError::NoData);
    }

    let column_labels: Vec<String> = if files.len() == 1 {
        vec![String::new()]
    } else {
        files.iter().map(|f| format!("[{}]", f.label)).collect()
    };

    let subtitle = if files.len() == 1 {
        files[0].name.to_string()
    } else {
        files
            .iter()
            .map(|f| format!("[{}] {}", f.label, f.name))
            .collect::<Vec<_>>()
            .join("  vs  ")
    };

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Color Distribution")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(categories.iter().map(|c| c.to_string()).collect())
                .bottom("3%")
                .item_gap(16)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(16)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("3%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(column_labels)
                .axis_label(
                    AxisLabel::new()
                        .show(files.len() > 1)
                        .color(COLOR_TEXT)
                        .font_size(24),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("%")
                .max(100)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // Columns and gaps alternate, with a gap on each side
    let bar_width = CHART_WIDTH as f64 * PLOT_WIDTH_RATIO / (2 * files.len() + 1) as f64;

    for &name in categories {
        let Some(swatch) = first_swatch(files, name) else {
            continue;
        };
        let values: Vec<f64> = files
            .iter()
            .map(|f| round_pct(percent_of(f.result, name)))
            .collect();
        let show_label = values.iter().all(|&v| v >= LABEL_THRESHOLD);

        let mut bar = Bar::new()
            .name(name)
            .data(values)
            .stack("total")
            .bar_width(bar_width)
            .item_style(
                ItemStyle::new()
                    .color(Color::Value(swatch.to_hex()))
                    .border_color(COLOR_SEGMENT_BORDER)
                    .border_width(1.0),
            );

        if show_label {
            bar = bar.label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Inside)
                    .color(COLOR_TEXT)
                    .font_size(18)
                    .font_weight("bold")
                    .formatter("{a} {c}%"),
            );
        }

        chart = chart.series(bar);
    }

    log::debug!(
        "Rendering {} colors for {} files to {}",
        categories.len(),
        files.len(),
        output_path
    );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    Ok(())
}
