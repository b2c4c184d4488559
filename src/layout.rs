//! Chart geometry: insets and offsets around the plot frame

use crate::plot::Point;

/// Left padding subtracted from the pointer before index lookup
pub const DEFAULT_LOCATOR_INSET: f64 = 15.0;

/// Height handed to the locator for the indicator step
pub const DEFAULT_PLOT_HEIGHT: f64 = 240.0;

/// Default frame width when the host has not measured one yet
pub const DEFAULT_FRAME_WIDTH: f64 = 360.0;

/// Display format for magnifier values
pub const DEFAULT_VALUE_SPECIFIER: &str = "%.0f";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub locator_inset: f64,
    /// Indicator x = max(pointer x - inset, 0)
    pub indicator_inset: f64,
    pub indicator_y: f64,
    /// Magnifier x = pointer x - frame width / 2 - offset
    pub magnifier_offset_x: f64,
    pub magnifier_y: f64,
    pub plot_height: f64,
    /// Lines are drawn `line_width_trim` narrower than the frame
    pub line_width_trim: f64,
    /// Origin of the line frame relative to the chart frame
    pub line_offset: Point,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            locator_inset: DEFAULT_LOCATOR_INSET,
            indicator_inset: 46.0,
            indicator_y: 32.0,
            magnifier_offset_x: 18.0,
            magnifier_y: 36.0,
            plot_height: DEFAULT_PLOT_HEIGHT,
            line_width_trim: 36.0,
            line_offset: Point::new(28.0, -20.0),
        }
    }
}

impl ChartLayout {
    /// Width of the area lines are drawn into, never negative
    pub fn line_width(&self, frame_width: f64) -> f64 {
        (frame_width - self.line_width_trim).max(0.0)
    }

    pub fn indicator_location(&self, pointer: Point) -> Point {
        Point::new((pointer.x - self.indicator_inset).max(0.0), self.indicator_y)
    }

    pub fn magnifier_offset(&self, pointer: Point, frame_width: f64) -> Point {
        Point::new(
            pointer.x - frame_width / 2.0 - self.magnifier_offset_x,
            self.magnifier_y,
        )
    }
}
