//! Chart rendering: one gradient-stroked polyline per series

mod colors;
mod line;

pub use line::render_line_chart;

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 1600;
pub(super) const CHART_HEIGHT: u32 = 900;

/// Text and axis data around the plotted lines
#[derive(Debug, Clone, Default)]
pub struct LineChartOptions {
    pub title: Option<String>,
    pub legend: Option<String>,
    /// X-axis labels; indices are used when empty
    pub labels: Vec<String>,
}

/// Series names for the legend ("[A]", "[B]", ...)
pub fn series_name(index: usize) -> String {
    let label = (b'A' + (index % 26) as u8) as char;
    format!("[{}]", label)
}

/// Category labels covering the longest series
pub(super) fn build_x_labels(labels: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| labels.get(i).cloned().unwrap_or_else(|| (i + 1).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_names() {
        assert_eq!(series_name(0), "[A]");
        assert_eq!(series_name(3), "[D]");
    }

    #[test]
    fn test_x_labels_fill_missing_with_indices() {
        let labels = vec!["Mon".to_string()];
        assert_eq!(build_x_labels(&labels, 3), vec!["Mon", "2", "3"]);
        assert!(build_x_labels(&labels, 0).is_empty());
    }
}
