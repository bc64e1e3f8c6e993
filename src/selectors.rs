//! Memoized selector graph.
//!
//! Every selector takes a [`State`] snapshot and returns an `Arc`. Asking twice
//! for the same snapshot yields the same `Arc`; a new snapshot yields a new
//! value only when one of the selector's inputs changed identity.
//!
//! Selectors are grouped by area:
//! - `points`: series, chart points, segments, legend classes
//! - `layout`: container, axis box, view box, chart positions
//! - `scales`: x/y domains, scales and plot transforms
//! - `well_log`: lithology and construction geometry
//! - `cursor`: cursor point, focus marker, tooltip
//! - `axes`: tick positions and labels

mod axes;
mod cursor;
mod layout;
mod points;
mod scales;
mod well_log;

pub use axes::AxisTick;
pub use cursor::CursorFocus;
pub use well_log::{ConstructionElement, ConstructionKind, LithologyRect};

use crate::config::ChartConfig;
use crate::data_types::{
    AxisBBox, ChartOptions, ChartPoint, ChartPosition, ChartType, ContainerSize, InstanceId,
    Rect, SiteKey, ViewBox, Viewport, WaterLevelSeries, WellLog,
};
use crate::gaps::{LineSegment, SegmentClasses};
use crate::memo::MemoFamily;
use crate::points::NearestPoint;
use crate::scales::LinearScale;
use crate::transform::PlotTransform;
use std::sync::Arc;

type ChartKey = (ChartOptions, ChartType);
type Domain = (f64, f64);

/// The selector graph of one page. Each memo family keeps one cache per
/// parameter key and is never evicted.
pub struct Selectors {
    config: ChartConfig,

    chart_points: MemoFamily<SiteKey, (Arc<WaterLevelSeries>,), Vec<ChartPoint>>,
    line_segments: MemoFamily<SiteKey, (Arc<Vec<ChartPoint>>,), Vec<LineSegment>>,
    active_classes: MemoFamily<SiteKey, (Arc<Vec<ChartPoint>>,), SegmentClasses>,
    series_unit: MemoFamily<SiteKey, (Arc<WaterLevelSeries>,), Option<String>>,
    well_log_extent_y: MemoFamily<SiteKey, (Arc<WellLog>,), Domain>,

    view_box: MemoFamily<(InstanceId, ChartType), (Arc<ContainerSize>, Arc<AxisBBox>), ViewBox>,
    chart_position: MemoFamily<(InstanceId, ChartType), (Arc<ViewBox>,), ChartPosition>,

    domain_x: MemoFamily<ChartKey, (Arc<Vec<ChartPoint>>, Option<Arc<Viewport>>), Domain>,
    domain_y: MemoFamily<ChartKey, (Arc<Vec<ChartPoint>>, Option<Arc<WellLog>>), Domain>,
    scale_x: MemoFamily<ChartKey, (Arc<Domain>, Arc<ChartPosition>), LinearScale>,
    scale_y: MemoFamily<ChartKey, (Arc<Domain>, Arc<ChartPosition>), LinearScale>,
    plot_transform: MemoFamily<
        ChartKey,
        (Arc<LinearScale>, Arc<LinearScale>, Arc<ChartPosition>),
        PlotTransform,
    >,

    lithology_rects:
        MemoFamily<ChartKey, (Arc<WellLog>, Arc<ChartPosition>, Arc<LinearScale>), Vec<LithologyRect>>,
    construction_elements: MemoFamily<
        ChartKey,
        (Arc<WellLog>, Arc<ChartPosition>, Arc<LinearScale>),
        Vec<ConstructionElement>,
    >,
    well_water_level: MemoFamily<
        ChartKey,
        (
            Arc<WellLog>,
            Arc<ChartPosition>,
            Arc<LinearScale>,
            Arc<Option<NearestPoint>>,
        ),
        Option<Rect>,
    >,

    cursor_point:
        MemoFamily<ChartKey, (Arc<Vec<ChartPoint>>, Option<f64>, Arc<Domain>), Option<NearestPoint>>,
    cursor_focus: MemoFamily<
        ChartKey,
        (
            Option<f64>,
            Arc<Option<NearestPoint>>,
            Arc<LinearScale>,
            Arc<LinearScale>,
        ),
        CursorFocus,
    >,
    cursor_tooltip:
        MemoFamily<ChartOptions, (Arc<Option<NearestPoint>>, Arc<Option<String>>), Option<String>>,

    axis_x_ticks: MemoFamily<ChartKey, (Arc<LinearScale>,), Vec<AxisTick>>,
    axis_y_ticks: MemoFamily<ChartKey, (Arc<LinearScale>,), Vec<AxisTick>>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl Selectors {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            chart_points: MemoFamily::new(),
            line_segments: MemoFamily::new(),
            active_classes: MemoFamily::new(),
            series_unit: MemoFamily::new(),
            well_log_extent_y: MemoFamily::new(),
            view_box: MemoFamily::new(),
            chart_position: MemoFamily::new(),
            domain_x: MemoFamily::new(),
            domain_y: MemoFamily::new(),
            scale_x: MemoFamily::new(),
            scale_y: MemoFamily::new(),
            plot_transform: MemoFamily::new(),
            lithology_rects: MemoFamily::new(),
            construction_elements: MemoFamily::new(),
            well_water_level: MemoFamily::new(),
            cursor_point: MemoFamily::new(),
            cursor_focus: MemoFamily::new(),
            cursor_tooltip: MemoFamily::new(),
            axis_x_ticks: MemoFamily::new(),
            axis_y_ticks: MemoFamily::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Times the chart points of `site` were rebuilt.
    pub fn chart_points_version(&self, site: &SiteKey) -> u64 {
        self.chart_points.version(site)
    }

    /// Times the x scale of a chart was rebuilt.
    pub fn scale_x_version(&self, options: &ChartOptions, chart_type: ChartType) -> u64 {
        self.scale_x.version(&(options.clone(), chart_type))
    }
}

fn chart_key(options: &ChartOptions, chart_type: ChartType) -> ChartKey {
    (options.clone(), chart_type)
}
