use std::sync::Arc;

use tracing::trace;

use super::Selectors;
use crate::data_types::{AxisBBox, ChartPosition, ChartType, ContainerSize, InstanceId, ViewBox, Viewport};
use crate::layout;
use crate::store::State;

impl Selectors {
    pub fn container_size(&self, state: &State, id: InstanceId) -> Arc<ContainerSize> {
        state.container_size(id)
    }

    pub fn axis_bbox(&self, state: &State, id: InstanceId) -> Arc<AxisBBox> {
        state.axis_bbox(id)
    }

    pub fn viewport(&self, state: &State, id: InstanceId) -> Option<Arc<Viewport>> {
        state.viewport(id)
    }

    pub fn cursor(&self, state: &State, id: InstanceId) -> Option<f64> {
        state.cursor(id)
    }

    pub fn view_box(&self, state: &State, id: InstanceId, chart_type: ChartType) -> Arc<ViewBox> {
        let inputs = (state.container_size(id), state.axis_bbox(id));
        self.view_box
            .get(&(id, chart_type), inputs, |(container, bbox)| {
                trace!(id = id.0, %chart_type, "computing view box");
                layout::view_box(container, bbox, chart_type, &self.config)
            })
    }

    pub fn chart_position(
        &self,
        state: &State,
        id: InstanceId,
        chart_type: ChartType,
    ) -> Arc<ChartPosition> {
        let inputs = (self.view_box(state, id, chart_type),);
        self.chart_position
            .get(&(id, chart_type), inputs, |(view_box,)| {
                layout::chart_position(view_box, chart_type, &self.config)
            })
    }
}
