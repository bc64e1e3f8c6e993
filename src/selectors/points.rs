use std::sync::Arc;

use tracing::trace;

use super::Selectors;
use crate::data_types::{ChartPoint, RequestStatus, SiteKey, WaterLevelSeries, WellLog};
use crate::gaps::{self, LineSegment, SegmentClasses};
use crate::points;
use crate::store::State;

impl Selectors {
    pub fn series(&self, state: &State, site: &SiteKey) -> Arc<WaterLevelSeries> {
        state.series(site)
    }

    pub fn series_status(&self, state: &State, site: &SiteKey) -> Option<RequestStatus> {
        state.series_status(site)
    }

    pub fn chart_points(&self, state: &State, site: &SiteKey) -> Arc<Vec<ChartPoint>> {
        self.chart_points
            .get(site, (state.series(site),), |(series,)| {
                trace!(%site, samples = series.samples.len(), "building chart points");
                points::chart_points(series)
            })
    }

    pub fn line_segments(&self, state: &State, site: &SiteKey) -> Arc<Vec<LineSegment>> {
        let max_gap = self.config.gap_threshold_ms;
        self.line_segments
            .get(site, (self.chart_points(state, site),), |(points,)| {
                trace!(%site, points = points.len(), "splitting line segments");
                gaps::line_segments_with_gap(points, max_gap)
            })
    }

    /// Approval classes present in the series, for the legend.
    pub fn active_classes(&self, state: &State, site: &SiteKey) -> Arc<SegmentClasses> {
        self.active_classes
            .get(site, (self.chart_points(state, site),), |(points,)| {
                points::active_classes(points)
            })
    }

    pub fn series_unit(&self, state: &State, site: &SiteKey) -> Arc<Option<String>> {
        self.series_unit
            .get(site, (state.series(site),), |(series,)| points::series_unit(series))
    }

    pub fn well_log(&self, state: &State, site: &SiteKey) -> Arc<WellLog> {
        state.well_log(site)
    }

    pub fn well_log_status(&self, state: &State, site: &SiteKey) -> Option<RequestStatus> {
        state.well_log_status(site)
    }

    /// Depth range covered by the lithology entries, `(0, 0)` without entries.
    pub fn well_log_extent_y(&self, state: &State, site: &SiteKey) -> Arc<(f64, f64)> {
        self.well_log_extent_y
            .get(site, (state.well_log(site),), |(log,)| log.extent_y())
    }

    pub fn selected_construction_id(&self, state: &State, site: &SiteKey) -> Option<Arc<str>> {
        state.selected_construction_id(site)
    }

    pub fn visible_construction_ids(&self, state: &State, site: &SiteKey) -> Option<Arc<[Arc<str>]>> {
        state.visible_construction_ids(site)
    }

    pub fn selected_lithology_id(&self, state: &State, site: &SiteKey) -> Option<Arc<str>> {
        state.selected_lithology_id(site)
    }
}
