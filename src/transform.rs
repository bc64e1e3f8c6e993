//! Projection between data coordinates and view-box coordinates of one chart.

use std::sync::Arc;

use crate::data_types::ChartPosition;
use crate::scales::LinearScale;

/// Chart-local scales placed at the chart's position in the view box.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
    pub x_scale: Arc<LinearScale>,
    pub y_scale: Arc<LinearScale>,
    pub bounds: ChartPosition,
}

impl PlotTransform {
    pub fn new(x_scale: Arc<LinearScale>, y_scale: Arc<LinearScale>, bounds: ChartPosition) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    pub fn data_to_screen(&self, point: (f64, f64)) -> (f64, f64) {
        (self.x_data_to_screen(point.0), self.y_data_to_screen(point.1))
    }

    pub fn screen_to_data(&self, point: (f64, f64)) -> (f64, f64) {
        (
            self.x_scale.invert(point.0 - self.bounds.x),
            self.y_scale.invert(point.1 - self.bounds.y),
        )
    }

    pub fn x_data_to_screen(&self, x: f64) -> f64 {
        self.bounds.x + self.x_scale.map(x)
    }

    pub fn y_data_to_screen(&self, y: f64) -> f64 {
        self.bounds.y + self.y_scale.map(y)
    }

    /// Whether a view-box point falls inside the chart area.
    pub fn contains(&self, point: (f64, f64)) -> bool {
        point.0 >= self.bounds.x
            && point.0 <= self.bounds.x + self.bounds.width
            && point.1 >= self.bounds.y
            && point.1 <= self.bounds.y + self.bounds.height
    }
}
