//! Error types for the chart core

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("series is empty")]
    EmptySeries,

    /// Step width divides by `count - 1`
    #[error("cannot compute a step for a series of {count} point(s)")]
    DegenerateStep { count: usize },

    #[error("{series} series but only {gradients} gradient(s)")]
    MissingGradients { series: usize, gradients: usize },

    #[error("invalid value: '{input}'")]
    InvalidValue { input: String },

    #[error("field too wide in value specifier '{spec}' (max {max})")]
    SpecifierField { spec: String, max: usize },

    #[error("failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
