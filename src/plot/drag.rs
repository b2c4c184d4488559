//! Drag gesture lifecycle and the magnifier state derived from it

use tracing::debug;

use super::locator::{Located, Locator, StepScale};
use super::mapper::Point;
use super::series::SeriesCollection;
use crate::layout::ChartLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Everything the overlay needs to draw after one event
#[derive(Debug, Clone, PartialEq)]
pub struct MagnifierFrame {
    pub state: DragState,
    pub indicator: Point,
    pub closest_point: Point,
    pub magnifier_offset: Point,
    pub opacity: f64,
    pub values: (f64, f64),
    /// Index of the last successful lookup
    pub index: Option<usize>,
    /// Whether the latest move located a point; false means `values` are held
    pub hit: bool,
    /// Secondary reference gridlines are hidden while dragging
    pub hide_horizontal_lines: bool,
    /// Per series, by position: whether its indicator dot is drawn
    pub indicators: Vec<bool>,
}

/// Interaction state for a single chart instance and a single pointer.
///
/// Every pointer move is fully resolved (lookup plus state update) before it
/// returns, so events must be fed in delivery order.
#[derive(Debug, Clone)]
pub struct DragSession {
    layout: ChartLayout,
    locator: Locator,
    state: DragState,
    drag_location: Point,
    indicator_location: Point,
    magnifier_offset: Point,
    closest_point: Point,
    opacity: f64,
    current_values: (f64, f64),
    current_index: Option<usize>,
    last_hit: bool,
    hide_horizontal_lines: bool,
    indicators: Vec<bool>,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(ChartLayout::default(), StepScale::default())
    }
}

impl DragSession {
    pub fn new(layout: ChartLayout, scale: StepScale) -> Self {
        Self {
            locator: Locator::new(layout.locator_inset, scale),
            layout,
            state: DragState::Idle,
            drag_location: Point::ZERO,
            indicator_location: Point::ZERO,
            magnifier_offset: Point::ZERO,
            closest_point: Point::ZERO,
            opacity: 0.0,
            current_values: (0.0, 0.0),
            current_index: None,
            last_hit: false,
            hide_horizontal_lines: false,
            indicators: Vec::new(),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn drag_location(&self) -> Point {
        self.drag_location
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Same transition as a move
    pub fn pointer_down(
        &mut self,
        pointer: Point,
        frame_width: f64,
        collection: &SeriesCollection,
    ) -> MagnifierFrame {
        self.pointer_moved(pointer, frame_width, collection)
    }

    /// `frame_width` is the width measured on the current layout pass.
    pub fn pointer_moved(
        &mut self,
        pointer: Point,
        frame_width: f64,
        collection: &SeriesCollection,
    ) -> MagnifierFrame {
        self.state = DragState::Dragging;
        self.drag_location = pointer;
        self.indicator_location = self.layout.indicator_location(pointer);
        self.magnifier_offset = self.layout.magnifier_offset(pointer, frame_width);
        self.opacity = 1.0;

        let located = self.locator.locate_in(
            pointer.x,
            frame_width,
            self.layout.plot_height,
            collection,
        );
        self.apply(located);
        self.hide_horizontal_lines = true;
        // Trend lines show their dot only while the gridlines are hidden
        self.indicators = collection
            .series()
            .iter()
            .map(|s| self.hide_horizontal_lines && collection.shows_indicator(s))
            .collect();

        debug!(
            x = pointer.x,
            index = ?self.current_index,
            hit = located.is_hit(),
            "pointer moved"
        );
        self.frame()
    }

    /// Hide the magnifier; the last values stay for the next drag's first frame
    pub fn pointer_up(&mut self) -> MagnifierFrame {
        self.state = DragState::Idle;
        self.opacity = 0.0;
        self.hide_horizontal_lines = false;
        self.indicators.fill(false);
        debug!("pointer released");
        self.frame()
    }

    pub fn frame(&self) -> MagnifierFrame {
        MagnifierFrame {
            state: self.state,
            indicator: self.indicator_location,
            closest_point: self.closest_point,
            magnifier_offset: self.magnifier_offset,
            opacity: self.opacity,
            values: self.current_values,
            index: self.current_index,
            hit: self.last_hit,
            hide_horizontal_lines: self.hide_horizontal_lines,
            indicators: self.indicators.clone(),
        }
    }

    fn apply(&mut self, located: Located) {
        self.closest_point = located.point;
        self.last_hit = located.is_hit();
        if let Some(values) = located.values {
            self.current_values = values;
            self.current_index = located.index;
        }
    }
}
