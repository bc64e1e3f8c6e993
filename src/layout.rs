//! View box and per-chart regions derived from the measured container.

use crate::config::ChartConfig;
use crate::data_types::{AxisBBox, ChartPosition, ChartType, ContainerSize, ViewBox};

/// Space between the main chart and the right edge of the view box.
pub const PADDING: f64 = 10.0;

/// Radius of the cursor focus circle; the view box is widened by it.
pub const FOCUS_CIRCLE_RADIUS: f64 = 5.5;

/// Height over width of the view box for a chart type.
pub fn aspect_ratio(container: &ContainerSize, chart_type: ChartType, config: &ChartConfig) -> f64 {
    if chart_type.is_well_diagram() {
        return config.well_aspect_ratio;
    }
    if container.is_valid() && container.width > 0.0 {
        container.height / container.width
    } else {
        0.0
    }
}

/// Extends the container to the left and top by the axis overhang and to the
/// right by the focus circle.
pub fn view_box(
    container: &ContainerSize,
    axis_bbox: &AxisBBox,
    chart_type: ChartType,
    config: &ChartConfig,
) -> ViewBox {
    let left = finite_or_zero(axis_bbox.x).min(0.0);
    let top = finite_or_zero(axis_bbox.y).min(0.0);
    let right = finite_or_zero(container.width) + config.focus_circle_radius;
    let ratio = aspect_ratio(container, chart_type, config);
    ViewBox {
        left,
        top,
        right,
        bottom: top + (right - left) * ratio,
    }
}

pub fn chart_position(view_box: &ViewBox, chart_type: ChartType, config: &ChartConfig) -> ChartPosition {
    let vb_width = view_box.width();
    let vb_height = view_box.height();
    let radius = config.focus_circle_radius;
    let plot_width = (vb_width - radius - config.padding).max(radius);

    match chart_type {
        ChartType::Main => ChartPosition::new(
            0.0,
            0.0,
            plot_width,
            vb_height * config.main_height_ratio,
        ),
        ChartType::Brush => ChartPosition::new(
            0.0,
            vb_height * config.main_height_ratio,
            plot_width,
            vb_height * (1.0 - config.main_height_ratio),
        ),
        ChartType::Lithology => {
            ChartPosition::new(view_box.right * 0.03, 0.0, vb_width * 0.75, vb_height)
        }
        ChartType::Construction => {
            ChartPosition::new(view_box.right * 0.235, 0.0, vb_width * 0.35, vb_height)
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
