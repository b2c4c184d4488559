//! Chart interaction core: series, coordinate mapping, nearest-point lookup
//! and the drag/magnifier state machine

mod drag;
mod locator;
mod mapper;
mod series;

pub use drag::{DragSession, DragState, MagnifierFrame};
pub use locator::{Located, Locator, StepScale};
pub use mapper::{Point, polyline, step_width, to_screen, value_to_y};
pub use series::{DEFAULT_GRADIENTS, GradientId, Series, SeriesCollection};
