use std::sync::Arc;

use crate::data_types::{
    AxisBBox, ContainerSize, InstanceId, RequestStatus, SiteKey, Viewport, WaterLevelSeries,
    WellLog,
};

/// Messages that change the store state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Chart UI state, per instance
    /// Show a time sub-range in the main chart
    SetViewport { id: InstanceId, viewport: Viewport },
    /// Go back to the full data extent
    ResetViewport { id: InstanceId },
    /// Highlight a timestamp, or fall back to the latest point with `None`
    SetCursor { id: InstanceId, cursor: Option<f64> },
    /// Size of the chart container as observed by the renderer
    SetContainerSize { id: InstanceId, size: ContainerSize },
    /// Measured bounding box of the rendered y axis
    SetAxisBBox { id: InstanceId, bbox: AxisBBox },

    // Service data, per site
    SetSeries {
        site: SiteKey,
        series: Arc<WaterLevelSeries>,
    },
    SetSeriesStatus { site: SiteKey, status: RequestStatus },
    SetWellLog { site: SiteKey, log: Arc<WellLog> },
    SetWellLogStatus { site: SiteKey, status: RequestStatus },

    // Selection in the well diagrams
    SetSelectedConstructionId { site: SiteKey, id: Option<String> },
    SetSelectedLithologyId { site: SiteKey, id: Option<String> },
    /// Construction items currently shown, `None` for all of them
    SetVisibleConstructionIds { site: SiteKey, ids: Option<Vec<String>> },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetViewport { .. } => "set_viewport",
            Action::ResetViewport { .. } => "reset_viewport",
            Action::SetCursor { .. } => "set_cursor",
            Action::SetContainerSize { .. } => "set_container_size",
            Action::SetAxisBBox { .. } => "set_axis_bbox",
            Action::SetSeries { .. } => "set_series",
            Action::SetSeriesStatus { .. } => "set_series_status",
            Action::SetWellLog { .. } => "set_well_log",
            Action::SetWellLogStatus { .. } => "set_well_log_status",
            Action::SetSelectedConstructionId { .. } => "set_selected_construction_id",
            Action::SetSelectedLithologyId { .. } => "set_selected_lithology_id",
            Action::SetVisibleConstructionIds { .. } => "set_visible_construction_ids",
        }
    }
}
