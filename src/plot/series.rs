//! Series and the collection sharing one coordinate space

use std::str::FromStr;

use crate::error::{ChartError, Result};

/// Gradient used to stroke one series (start and end color, left to right)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientId {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl Default for GradientId {
    fn default() -> Self {
        DEFAULT_GRADIENTS[0]
    }
}

/// Gradients assigned by position when the caller supplies none
pub const DEFAULT_GRADIENTS: [GradientId; 4] = [
    GradientId {
        name: "blue",
        start: "#1888F8",
        end: "#1888F8",
    },
    GradientId {
        name: "purple",
        start: "#A050E8",
        end: "#A050E8",
    },
    GradientId {
        name: "orange",
        start: "#F89830",
        end: "#F89830",
    },
    GradientId {
        name: "yellow",
        start: "#F8D818",
        end: "#F8D818",
    },
];

/// One plotted numeric sequence, in plotting order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<f64>,
}

impl Series {
    pub fn new(points: impl Into<Vec<f64>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.points.get(index).copied()
    }

    pub fn min(&self) -> Result<f64> {
        self.points
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(ChartError::EmptySeries)
    }

    pub fn max(&self) -> Result<f64> {
        self.points
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(ChartError::EmptySeries)
    }
}

impl From<Vec<f64>> for Series {
    fn from(points: Vec<f64>) -> Self {
        Self::new(points)
    }
}

impl From<&[f64]> for Series {
    fn from(points: &[f64]) -> Self {
        Self::new(points.to_vec())
    }
}

/// Parse comma-separated values ("8,23,54"). An empty string is an empty series.
impl FromStr for Series {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let points = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ChartError::InvalidValue {
                        input: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(points))
    }
}

/// Series sharing one coordinate space, each drawn with the gradient at its position
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCollection {
    series: Vec<Series>,
    gradients: Vec<GradientId>,
}

impl SeriesCollection {
    /// Extra gradients are ignored; fewer gradients than series is an error.
    pub fn new(series: Vec<Series>, gradients: Vec<GradientId>) -> Result<Self> {
        if gradients.len() < series.len() {
            return Err(ChartError::MissingGradients {
                series: series.len(),
                gradients: gradients.len(),
            });
        }
        Ok(Self { series, gradients })
    }

    pub fn with_default_gradients(series: Vec<Series>) -> Result<Self> {
        Self::new(series, DEFAULT_GRADIENTS.to_vec())
    }

    /// Build from raw caller arrays, one series per array
    pub fn from_raw(data: &[Vec<f64>]) -> Result<Self> {
        Self::with_default_gradients(data.iter().cloned().map(Series::from).collect())
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn gradients(&self) -> &[GradientId] {
        &self.gradients[..self.series.len()]
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// All points flattened in series order. Only meaningful for min/max.
    pub fn merged_points(&self) -> Series {
        Series::new(
            self.series
                .iter()
                .flat_map(|s| s.points().iter().copied())
                .collect::<Vec<_>>(),
        )
    }

    /// Shared vertical range (min, max) across every series
    pub fn merged_range(&self) -> Result<(f64, f64)> {
        let merged = self.merged_points();
        Ok((merged.min()?, merged.max()?))
    }

    /// Position of the first series equal by value to `series`
    pub fn position_of(&self, series: &Series) -> Option<usize> {
        self.series.iter().position(|s| s == series)
    }

    /// Gradient assigned to `series` by its position. A series not in the
    /// collection gets the collection's first gradient.
    pub fn gradient_for(&self, series: &Series) -> GradientId {
        let index = self.position_of(series).unwrap_or(0);
        self.gradients.get(index).copied().unwrap_or_default()
    }

    /// Only the two leading series carry the drag indicator
    pub fn shows_indicator(&self, series: &Series) -> bool {
        matches!(self.position_of(series), Some(i) if i <= 1)
    }
}
