//! CLI mode implementations

mod drag;
mod summary;

pub use drag::run_drag;
pub use summary::run_summary;

use linechart::{ChartLayout, Result, Series, SeriesCollection, StepScale, ValueSpecifier};

/// Everything a mode needs from the command line
pub struct ChartInput {
    pub collection: SeriesCollection,
    pub labels: Vec<String>,
    pub specifier: ValueSpecifier,
    pub frame_width: f64,
    pub layout: ChartLayout,
    pub scale: StepScale,
    pub quiet: bool,
}

/// Parse one collection from comma-separated series arguments
pub fn build_collection(raw: &[String]) -> Result<SeriesCollection> {
    let series = raw
        .iter()
        .map(|s| s.parse::<Series>())
        .collect::<Result<Vec<_>>>()?;
    SeriesCollection::with_default_gradients(series)
}
