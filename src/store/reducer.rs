use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::warn;

use super::actions::Action;
use super::state::{ChartUi, Selection, State};
use crate::data_types::{InstanceId, RequestStatus, SiteKey};

/// Applies an action, returning a new snapshot.
///
/// The previous snapshot is never modified. Maps the action does not touch are
/// shared with it. A rejected or ineffective action returns `state` itself.
pub fn reduce(state: &Arc<State>, action: &Action) -> Arc<State> {
    match action {
        Action::SetViewport { id, viewport } => {
            if !viewport.is_finite() {
                warn!(id = id.0, ?viewport, "rejecting non-finite viewport");
                return state.clone();
            }
            let current = state.chart_ui(*id);
            if current.viewport.as_deref() == Some(viewport) {
                return state.clone();
            }
            with_chart(state, *id, ChartUi {
                viewport: Some(Arc::new(*viewport)),
                ..current
            })
        }
        Action::ResetViewport { id } => {
            let current = state.chart_ui(*id);
            if current.viewport.is_none() {
                return state.clone();
            }
            with_chart(state, *id, ChartUi {
                viewport: None,
                ..current
            })
        }
        Action::SetCursor { id, cursor } => {
            if cursor.is_some_and(|c| !c.is_finite()) {
                warn!(id = id.0, ?cursor, "rejecting non-finite cursor");
                return state.clone();
            }
            let current = state.chart_ui(*id);
            if current.cursor == *cursor {
                return state.clone();
            }
            with_chart(state, *id, ChartUi {
                cursor: *cursor,
                ..current
            })
        }
        Action::SetContainerSize { id, size } => {
            if !size.is_valid() {
                warn!(id = id.0, ?size, "rejecting invalid container size");
                return state.clone();
            }
            let current = state.chart_ui(*id);
            if *current.container == *size {
                return state.clone();
            }
            with_chart(state, *id, ChartUi {
                container: Arc::new(*size),
                ..current
            })
        }
        Action::SetAxisBBox { id, bbox } => {
            if !bbox.is_finite() {
                warn!(id = id.0, ?bbox, "rejecting non-finite axis bounding box");
                return state.clone();
            }
            let current = state.chart_ui(*id);
            if *current.axis_bbox == *bbox {
                return state.clone();
            }
            with_chart(state, *id, ChartUi {
                axis_bbox: Arc::new(*bbox),
                ..current
            })
        }
        Action::SetSeries { site, series } => Arc::new(State {
            series: inserted(&state.series, site.clone(), series.clone()),
            ..(**state).clone()
        }),
        Action::SetSeriesStatus { site, status } => {
            if !advances(state.series_status(site), *status) {
                return state.clone();
            }
            Arc::new(State {
                series_status: inserted(&state.series_status, site.clone(), *status),
                ..(**state).clone()
            })
        }
        Action::SetWellLog { site, log } => Arc::new(State {
            well_logs: inserted(&state.well_logs, site.clone(), log.clone()),
            ..(**state).clone()
        }),
        Action::SetWellLogStatus { site, status } => {
            if !advances(state.well_log_status(site), *status) {
                return state.clone();
            }
            Arc::new(State {
                well_log_status: inserted(&state.well_log_status, site.clone(), *status),
                ..(**state).clone()
            })
        }
        Action::SetSelectedConstructionId { site, id } => {
            let mut selection = selection_of(state, site);
            if selection.construction_id.as_deref() == id.as_deref() {
                return state.clone();
            }
            selection.construction_id = id.as_deref().map(Arc::from);
            with_selection(state, site, selection)
        }
        Action::SetSelectedLithologyId { site, id } => {
            let mut selection = selection_of(state, site);
            if selection.lithology_id.as_deref() == id.as_deref() {
                return state.clone();
            }
            selection.lithology_id = id.as_deref().map(Arc::from);
            with_selection(state, site, selection)
        }
        Action::SetVisibleConstructionIds { site, ids } => {
            let mut selection = selection_of(state, site);
            let unchanged = match (&selection.visible_construction_ids, ids) {
                (None, None) => true,
                (Some(current), Some(ids)) => current
                    .iter()
                    .map(|id| &**id)
                    .eq(ids.iter().map(String::as_str)),
                _ => false,
            };
            if unchanged {
                return state.clone();
            }
            selection.visible_construction_ids = ids
                .as_ref()
                .map(|ids| ids.iter().map(|id| Arc::from(id.as_str())).collect());
            with_selection(state, site, selection)
        }
    }
}

/// Status only moves forward: unset, then started, then done.
fn advances(current: Option<RequestStatus>, next: RequestStatus) -> bool {
    current.map_or(true, |current| next > current)
}

fn inserted<K: Eq + Hash + Clone, V: Clone>(map: &Arc<HashMap<K, V>>, key: K, value: V) -> Arc<HashMap<K, V>> {
    let mut next = HashMap::clone(map);
    next.insert(key, value);
    Arc::new(next)
}

fn with_chart(state: &Arc<State>, id: InstanceId, ui: ChartUi) -> Arc<State> {
    Arc::new(State {
        charts: inserted(&state.charts, id, ui),
        ..(**state).clone()
    })
}

fn selection_of(state: &State, site: &SiteKey) -> Selection {
    state.selections.get(site).cloned().unwrap_or_default()
}

fn with_selection(state: &Arc<State>, site: &SiteKey, selection: Selection) -> Arc<State> {
    Arc::new(State {
        selections: inserted(&state.selections, site.clone(), selection),
        ..(**state).clone()
    })
}
