//! Data-to-screen coordinate mapping
//!
//! Screen origin is top-left: x grows to the right, y grows downward, so larger
//! values map to smaller y.

use tracing::trace;

use super::series::Series;
use crate::error::{ChartError, Result};

/// Screen position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal distance between consecutive points
pub fn step_width(count: usize, pixel_width: f64) -> Result<f64> {
    if count < 2 {
        return Err(ChartError::DegenerateStep { count });
    }
    Ok(pixel_width / (count - 1) as f64)
}

/// Inverted linear interpolation of `value` from [min, max] onto [0, height].
/// A flat range places the value at mid-height. No clamping.
pub fn value_to_y(value: f64, value_min: f64, value_max: f64, pixel_height: f64) -> f64 {
    let range = value_max - value_min;
    if range == 0.0 {
        return pixel_height / 2.0;
    }
    pixel_height - (value - value_min) / range * pixel_height
}

/// Map one data point to the screen.
/// Fails with `DegenerateStep` for series shorter than two points.
pub fn to_screen(
    index: usize,
    value: f64,
    series_len: usize,
    value_min: f64,
    value_max: f64,
    pixel_width: f64,
    pixel_height: f64,
) -> Result<Point> {
    let x = index as f64 * step_width(series_len, pixel_width)?;
    let y = value_to_y(value, value_min, value_max, pixel_height);
    trace!(index, value, x, y, "mapped point");
    Ok(Point::new(x, y))
}

/// Map a whole series against a shared (min, max) range.
/// A single-point series is centered horizontally; an empty one yields nothing.
pub fn polyline(
    series: &Series,
    range: (f64, f64),
    pixel_width: f64,
    pixel_height: f64,
) -> Vec<Point> {
    let (value_min, value_max) = range;
    match series.points() {
        [] => Vec::new(),
        [value] => vec![Point::new(
            pixel_width / 2.0,
            value_to_y(*value, value_min, value_max, pixel_height),
        )],
        points => {
            // len >= 2 here, so the step is defined
            let step = pixel_width / (points.len() - 1) as f64;
            points
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    Point::new(
                        i as f64 * step,
                        value_to_y(v, value_min, value_max, pixel_height),
                    )
                })
                .collect()
        }
    }
}
