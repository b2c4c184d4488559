//! Series summary mode

use linechart::chart::series_name;
use linechart::plot::polyline;

use crate::output::{format_point, print_series_header, print_series_row, print_separator, print_warning};

use super::ChartInput;

/// Print per-series extent, gradient and screen endpoints on the shared scale
pub fn run_summary(input: &ChartInput) {
    let collection = &input.collection;
    let line_width = input.layout.line_width(input.frame_width);
    let height = input.layout.plot_height;

    let range = match collection.merged_range() {
        Ok(range) => Some(range),
        Err(e) => {
            print_warning(&format!("no merged range: {}", e));
            None
        }
    };

    if !input.quiet {
        println!("Series: {}", collection.len());
        if let Some((min, max)) = range {
            println!(
                "Merged range: {} .. {}",
                input.specifier.format(min),
                input.specifier.format(max)
            );
        }
        println!(
            "Plot: {:.0} x {:.0} px, line frame offset {}",
            line_width,
            height,
            format_point(input.layout.line_offset)
        );
        println!();
    }

    println!("[Series]");
    print_series_header();
    print_separator(72);

    for (i, series) in collection.series().iter().enumerate() {
        let points = range
            .map(|r| polyline(series, r, line_width, height))
            .unwrap_or_default();

        print_series_row(
            &series_name(i),
            series.len(),
            series.min().ok().map(|v| input.specifier.format(v)),
            series.max().ok().map(|v| input.specifier.format(v)),
            collection.gradient_for(series).name,
            points.first().copied(),
            points.last().copied(),
        );
    }
}
