//! Interactive line chart core
//!
//! Maps series values to screen coordinates, finds the data point under a
//! dragged pointer and derives the magnifier readout from the gesture.

pub mod chart;
pub mod error;
pub mod layout;
pub mod plot;
pub mod readout;

pub use error::{ChartError, Result};
pub use layout::ChartLayout;
pub use plot::{
    DragSession, DragState, GradientId, Located, Locator, MagnifierFrame, Point, Series,
    SeriesCollection, StepScale,
};
pub use readout::{MagnifierReadout, ValueSpecifier};
