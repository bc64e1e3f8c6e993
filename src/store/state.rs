use std::collections::HashMap;
use std::sync::Arc;

use crate::data_types::{
    AxisBBox, ContainerSize, InstanceId, RequestStatus, SiteKey, Viewport, WaterLevelSeries,
    WellLog,
};

/// UI state of one chart instance.
#[derive(Clone, Debug)]
pub(in crate::store) struct ChartUi {
    pub container: Arc<ContainerSize>,
    pub axis_bbox: Arc<AxisBBox>,
    pub viewport: Option<Arc<Viewport>>,
    pub cursor: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub(in crate::store) struct Selection {
    pub construction_id: Option<Arc<str>>,
    pub lithology_id: Option<Arc<str>>,
    pub visible_construction_ids: Option<Arc<[Arc<str>]>>,
}

/// Records handed out for absent data. Created once and shared by every
/// snapshot derived from the same root, so "nothing there" keeps one identity.
#[derive(Debug)]
pub(in crate::store) struct Defaults {
    pub series: Arc<WaterLevelSeries>,
    pub well_log: Arc<WellLog>,
    pub container: Arc<ContainerSize>,
    pub axis_bbox: Arc<AxisBBox>,
}

/// Immutable snapshot of the store.
///
/// Snapshots are only produced by [`crate::store::reduce`]. Every map sits
/// behind its own `Arc`, so a new snapshot shares whatever an action did not touch.
#[derive(Clone, Debug)]
pub struct State {
    pub(in crate::store) series: Arc<HashMap<SiteKey, Arc<WaterLevelSeries>>>,
    pub(in crate::store) series_status: Arc<HashMap<SiteKey, RequestStatus>>,
    pub(in crate::store) well_logs: Arc<HashMap<SiteKey, Arc<WellLog>>>,
    pub(in crate::store) well_log_status: Arc<HashMap<SiteKey, RequestStatus>>,
    pub(in crate::store) charts: Arc<HashMap<InstanceId, ChartUi>>,
    pub(in crate::store) selections: Arc<HashMap<SiteKey, Selection>>,
    pub(in crate::store) defaults: Arc<Defaults>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            series: Arc::default(),
            series_status: Arc::default(),
            well_logs: Arc::default(),
            well_log_status: Arc::default(),
            charts: Arc::default(),
            selections: Arc::default(),
            defaults: Arc::new(Defaults {
                series: Arc::new(WaterLevelSeries::default()),
                well_log: Arc::new(WellLog::default()),
                container: Arc::new(ContainerSize::default()),
                axis_bbox: Arc::new(AxisBBox::default()),
            }),
        }
    }

    /// Series of a site, or the shared empty series.
    pub fn series(&self, site: &SiteKey) -> Arc<WaterLevelSeries> {
        self.series
            .get(site)
            .cloned()
            .unwrap_or_else(|| self.defaults.series.clone())
    }

    pub fn has_series(&self, site: &SiteKey) -> bool {
        self.series.contains_key(site)
    }

    pub fn series_status(&self, site: &SiteKey) -> Option<RequestStatus> {
        self.series_status.get(site).copied()
    }

    /// Well log of a site, or the shared empty log.
    pub fn well_log(&self, site: &SiteKey) -> Arc<WellLog> {
        self.well_logs
            .get(site)
            .cloned()
            .unwrap_or_else(|| self.defaults.well_log.clone())
    }

    pub fn well_log_status(&self, site: &SiteKey) -> Option<RequestStatus> {
        self.well_log_status.get(site).copied()
    }

    pub fn container_size(&self, id: InstanceId) -> Arc<ContainerSize> {
        self.charts
            .get(&id)
            .map(|ui| ui.container.clone())
            .unwrap_or_else(|| self.defaults.container.clone())
    }

    pub fn axis_bbox(&self, id: InstanceId) -> Arc<AxisBBox> {
        self.charts
            .get(&id)
            .map(|ui| ui.axis_bbox.clone())
            .unwrap_or_else(|| self.defaults.axis_bbox.clone())
    }

    pub fn viewport(&self, id: InstanceId) -> Option<Arc<Viewport>> {
        self.charts.get(&id).and_then(|ui| ui.viewport.clone())
    }

    pub fn cursor(&self, id: InstanceId) -> Option<f64> {
        self.charts.get(&id).and_then(|ui| ui.cursor)
    }

    pub fn selected_construction_id(&self, site: &SiteKey) -> Option<Arc<str>> {
        self.selections
            .get(site)
            .and_then(|s| s.construction_id.clone())
    }

    pub fn selected_lithology_id(&self, site: &SiteKey) -> Option<Arc<str>> {
        self.selections.get(site).and_then(|s| s.lithology_id.clone())
    }

    /// Construction ids the host currently shows, `None` when unrestricted.
    pub fn visible_construction_ids(&self, site: &SiteKey) -> Option<Arc<[Arc<str>]>> {
        self.selections
            .get(site)
            .and_then(|s| s.visible_construction_ids.clone())
    }

    pub(in crate::store) fn chart_ui(&self, id: InstanceId) -> ChartUi {
        self.charts.get(&id).cloned().unwrap_or_else(|| ChartUi {
            container: self.defaults.container.clone(),
            axis_bbox: self.defaults.axis_bbox.clone(),
            viewport: None,
            cursor: None,
        })
    }
}
