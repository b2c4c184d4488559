mod mode;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linechart::chart::{self, LineChartOptions};
use linechart::layout::{DEFAULT_FRAME_WIDTH, DEFAULT_PLOT_HEIGHT, DEFAULT_VALUE_SPECIFIER};
use linechart::plot::DEFAULT_GRADIENTS;
use linechart::{ChartLayout, StepScale, ValueSpecifier};

use mode::{ChartInput, build_collection, run_drag, run_summary};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "linechart",
    version,
    about = "Line chart interaction core: shared-scale mapping, nearest-point lookup and drag readout",
    after_help = "Examples:
  linechart 8,23,54,32,12,37,7                       Series summary
  linechart 1,2,3,4,5 10,20,30,40,50 -d 40 -d 120     Replay a drag over two series
  linechart 1,2,3 --labels Mon,Tue,Wed -d 200         Magnifier date line from labels
  linechart 282.5,284.4,283.5 --specifier %.1f -d 90  Custom value format
  linechart 1,2,3 4,5,6 --image chart.svg             Render the chart (SVG or PNG)
  linechart --no-color 1,2,3                          Disable colored output"
)]
struct Args {
    /// Series as comma-separated values, one argument per series (up to 4)
    #[arg(required = true, value_name = "SERIES")]
    series: Vec<String>,

    /// Chart title (shown on the rendered image)
    #[arg(long)]
    title: Option<String>,

    /// Legend text under the title (shown on the rendered image)
    #[arg(long)]
    legend: Option<String>,

    /// printf-style format for magnifier values
    #[arg(short, long, default_value = DEFAULT_VALUE_SPECIFIER, value_name = "FORMAT")]
    specifier: String,

    /// Comma-separated x labels, shown on the magnifier date line
    #[arg(long, value_delimiter = ',', value_name = "LABELS")]
    labels: Vec<String>,

    /// Frame width in pixels
    #[arg(long, default_value_t = DEFAULT_FRAME_WIDTH, value_name = "PX")]
    width: f64,

    /// Plot height in pixels
    #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT, value_name = "PX")]
    height: f64,

    /// Pointer x position to replay as a drag move (repeatable, released after the last)
    #[arg(short, long, value_name = "X", allow_negative_numbers = true)]
    drag: Vec<f64>,

    /// Place the indicator on the drawn line (range-based step height)
    #[arg(long)]
    corrected_scale: bool,

    /// Render the chart to an image (.svg, otherwise PNG)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(ansi: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }
    init_tracing(!args.no_color);

    // Validate series count
    if args.series.len() > DEFAULT_GRADIENTS.len() {
        print_error(&format!(
            "Too many series specified (max {})",
            DEFAULT_GRADIENTS.len()
        ));
        std::process::exit(1);
    }

    // Validate geometry
    if !(args.width > 0.0 && args.width.is_finite()) {
        print_error("Width must be positive");
        std::process::exit(1);
    }

    if !(args.height > 0.0 && args.height.is_finite()) {
        print_error("Height must be positive");
        std::process::exit(1);
    }

    if args.drag.iter().any(|x| !x.is_finite()) {
        print_error("Drag positions must be finite");
        std::process::exit(1);
    }

    let specifier = ValueSpecifier::from(args.specifier.as_str());
    if let Err(e) = specifier.validate() {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let collection = build_collection(&args.series).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    let input = ChartInput {
        collection,
        labels: args.labels,
        specifier,
        frame_width: args.width,
        layout: ChartLayout {
            plot_height: args.height,
            ..ChartLayout::default()
        },
        scale: if args.corrected_scale {
            StepScale::Range
        } else {
            StepScale::Sum
        },
        quiet: args.quiet,
    };

    // Dispatch to appropriate mode
    if args.drag.is_empty() {
        run_summary(&input);
    } else {
        run_drag(&input, &args.drag);
    }

    // Output chart image if requested
    if let Some(path) = args.image.as_deref() {
        let options = LineChartOptions {
            title: args.title,
            legend: args.legend,
            labels: input.labels.clone(),
        };

        if let Err(e) = chart::render_line_chart(&input.collection, &options, path) {
            print_error(&e.to_string());
            std::process::exit(1);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
