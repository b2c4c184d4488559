//! Line chart rendering (series stroked with their assigned gradient)

use std::path::Path;

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ColorStop, LineStyle, SplitLine, Symbol, TextStyle},
    renderer::ImageFormat,
    series::Line,
};
use tracing::debug;

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_LEGEND_TEXT, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, LineChartOptions, build_x_labels, series_name};
use crate::error::{ChartError, Result};
use crate::plot::{GradientId, SeriesCollection};

/// Horizontal gradient: start color on the left, end color on the right
fn stroke(gradient: GradientId) -> Color {
    Color::LinearGradient {
        x: 0.0,
        y: 0.0,
        x2: 1.0,
        y2: 0.0,
        color_stops: vec![
            ColorStop::new(0.0, gradient.start),
            ColorStop::new(1.0, gradient.end),
        ],
    }
}

/// Render every series of `collection` into an image.
/// `.svg` paths are written as SVG, anything else as PNG.
pub fn render_line_chart(
    collection: &SeriesCollection,
    options: &LineChartOptions,
    output_path: &str,
) -> Result<()> {
    if collection.is_empty() {
        return Err(ChartError::Render("no series to render".to_string()));
    }

    let longest = collection.series().iter().map(|s| s.len()).max().unwrap_or(0);
    let x_labels = build_x_labels(&options.labels, longest);

    let legend_data: Vec<String> = (0..collection.len()).map(series_name).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(20)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
                .data(x_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20)),
        )
        // One value axis for every series: the shared vertical scale
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    if options.title.is_some() || options.legend.is_some() {
        chart = chart.title(
            Title::new()
                .text(options.title.clone().unwrap_or_default())
                .subtext(options.legend.clone().unwrap_or_default())
                .left("3%")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_LEGEND_TEXT).font_size(22)),
        );
    }

    for (i, series) in collection.series().iter().enumerate() {
        let gradient = collection.gradient_for(series);
        debug!(series = i, gradient = gradient.name, "adding line");

        chart = chart.series(
            Line::new()
                .name(series_name(i))
                .data(series.points().to_vec())
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(3).color(stroke(gradient))),
        );
    }

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    let is_svg = Path::new(output_path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let saved = if is_svg {
        renderer.save(&chart, output_path)
    } else {
        renderer.save_format(ImageFormat::Png, &chart, output_path)
    };
    saved.map_err(|e| ChartError::Render(e.to_string()))
}
