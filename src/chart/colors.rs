//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_LEGEND_TEXT: &str = "#A0A0A8"; // Muted gray
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines
