use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{chart_key, Selectors};
use crate::data_types::{ChartOptions, ChartType};
use crate::store::State;
use crate::utils::date_formatter::{determine_date_format, format_timestamp};
use crate::utils::format_value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    /// Chart-local pixel coordinate along the axis.
    pub position: f64,
    pub label: String,
}

impl Selectors {
    pub fn axis_x_ticks(&self, state: &State, options: &ChartOptions, chart_type: ChartType) -> Arc<Vec<AxisTick>> {
        let count = self.config.tick_count_x;
        let inputs = (self.scale_x(state, options, chart_type),);
        self.axis_x_ticks
            .get(&chart_key(options, chart_type), inputs, |(scale,)| {
                let (d0, d1) = scale.domain();
                let format = determine_date_format((d1 - d0).abs());
                scale
                    .ticks(count)
                    .into_iter()
                    .map(|value| AxisTick {
                        value,
                        position: scale.map(value),
                        label: format_timestamp(value, format),
                    })
                    .collect()
            })
    }

    pub fn axis_y_ticks(&self, state: &State, options: &ChartOptions, chart_type: ChartType) -> Arc<Vec<AxisTick>> {
        let count = self.config.tick_count_y;
        let inputs = (self.scale_y(state, options, chart_type),);
        self.axis_y_ticks
            .get(&chart_key(options, chart_type), inputs, |(scale,)| {
                scale
                    .ticks(count)
                    .into_iter()
                    .map(|value| AxisTick {
                        value,
                        position: scale.map(value),
                        label: format_value(value),
                    })
                    .collect()
            })
    }
}
