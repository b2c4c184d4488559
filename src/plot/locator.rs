//! Nearest data point under the pointer

use tracing::debug;

use super::mapper::{Point, value_to_y};
use super::series::{Series, SeriesCollection};

/// Stand-in when both leading series are empty
const ZERO_SERIES: &[f64] = &[0.0];

/// How the vertical step of the indicator point is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepScale {
    /// `height / (max + min)`, y = value * step. Matches the original chart.
    #[default]
    Sum,
    /// `height / (max - min)` with an inverted axis, so the dot sits on the drawn line
    Range,
}

/// Result of one lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    pub index: Option<usize>,
    pub point: Point,
    /// Values of the two leading series at `index`; `None` means keep the last ones
    pub values: Option<(f64, f64)>,
}

impl Located {
    fn miss() -> Self {
        Self {
            index: None,
            point: Point::ZERO,
            values: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.index.is_some()
    }
}

/// Translates a pointer x position into a data index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locator {
    /// Left plot padding subtracted from the pointer position
    pub inset: f64,
    pub scale: StepScale,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            inset: crate::layout::DEFAULT_LOCATOR_INSET,
            scale: StepScale::default(),
        }
    }
}

impl Locator {
    pub fn new(inset: f64, scale: StepScale) -> Self {
        Self { inset, scale }
    }

    /// Look up the index under `pointer_x`. Pointers outside the plot are a
    /// normal input and produce a miss, never an error.
    pub fn locate(
        &self,
        pointer_x: f64,
        pixel_width: f64,
        pixel_height: f64,
        series_a: &Series,
        series_b: &Series,
    ) -> Located {
        let (a, b) = coerce(series_a.points(), series_b.points());

        // Single point: the step is undefined, pin to the only index
        if a.len() == 1 {
            debug!(pointer_x, "single-point series, pinned to index 0");
            return Located {
                index: Some(0),
                point: Point::new(0.0, self.point_y(a[0], a, pixel_height)),
                values: Some((a[0], b.first().copied().unwrap_or(a[0]))),
            };
        }

        let step_width = pixel_width / (a.len() - 1) as f64;
        let raw = ((pointer_x - self.inset) / step_width).floor();
        if !raw.is_finite() || raw < 0.0 || raw >= a.len() as f64 {
            debug!(pointer_x, "pointer outside plot, holding last values");
            return Located::miss();
        }

        let index = raw as usize;
        let value_a = a[index];
        // Shorter second series holds its last value rather than reading out of range
        let value_b = b.get(index).or(b.last()).copied().unwrap_or(value_a);
        let point = Point::new(
            index as f64 * step_width,
            self.point_y(value_a, a, pixel_height),
        );

        debug!(pointer_x, index, value_a, value_b, "located point");
        Located {
            index: Some(index),
            point,
            values: Some((value_a, value_b)),
        }
    }

    /// Locate against the first two series of a collection
    pub fn locate_in(
        &self,
        pointer_x: f64,
        pixel_width: f64,
        pixel_height: f64,
        collection: &SeriesCollection,
    ) -> Located {
        let empty = Series::default();
        let a = collection.get(0).unwrap_or(&empty);
        let b = collection.get(1).unwrap_or(&empty);
        self.locate(pointer_x, pixel_width, pixel_height, a, b)
    }

    fn point_y(&self, value: f64, points: &[f64], pixel_height: f64) -> f64 {
        let (min, max) = extrema(points);
        match self.scale {
            StepScale::Sum => {
                let denominator = max + min;
                if denominator == 0.0 {
                    debug!("zero step height, using 0");
                    return 0.0;
                }
                value * (pixel_height / denominator)
            }
            StepScale::Range => value_to_y(value, min, max, pixel_height),
        }
    }
}

/// An empty series borrows the other one; both empty becomes `[0]`
fn coerce<'a>(a: &'a [f64], b: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => (ZERO_SERIES, ZERO_SERIES),
        (true, false) => (b, b),
        (false, true) => (a, a),
        (false, false) => (a, b),
    }
}

// Callers guarantee `points` is non-empty
fn extrema(points: &[f64]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
