use std::sync::Arc;

use tracing::trace;

use super::{chart_key, Selectors};
use crate::data_types::{ChartOptions, ChartType};
use crate::points;
use crate::scales::LinearScale;
use crate::store::State;
use crate::transform::PlotTransform;

impl Selectors {
    /// Visible time range. Only the main chart follows the viewport; the other
    /// charts always span the full extent of the series.
    pub fn domain_x(&self, state: &State, options: &ChartOptions, chart_type: ChartType) -> Arc<(f64, f64)> {
        let viewport = match chart_type {
            ChartType::Main => state.viewport(options.id),
            _ => None,
        };
        let inputs = (self.chart_points(state, &options.site_key), viewport);
        self.domain_x
            .get(&chart_key(options, chart_type), inputs, |(points, viewport)| {
                match viewport {
                    Some(viewport) => (viewport.start, viewport.end),
                    None => points::domain_x(points)
                        .map_or((0.0, 0.0), |(start, end)| (start as f64, end as f64)),
                }
            })
    }

    /// Padded water-level range. The well diagrams also cover the depth range
    /// of the well log.
    pub fn domain_y(&self, state: &State, options: &ChartOptions, chart_type: ChartType) -> Arc<(f64, f64)> {
        let log = chart_type
            .is_well_diagram()
            .then(|| state.well_log(&options.site_key));
        let inputs = (self.chart_points(state, &options.site_key), log);
        let padding = self.config.domain_padding;
        self.domain_y
            .get(&chart_key(options, chart_type), inputs, |(points, log)| {
                let values = (!points.is_empty()).then(|| points::padded_domain_y(points, padding));
                let depths = log
                    .as_ref()
                    .filter(|log| !log.entries.is_empty())
                    .map(|log| log.extent_y());
                match (values, depths) {
                    (Some(v), Some(d)) => (v.0.min(d.0), v.1.max(d.1)),
                    (Some(v), None) => v,
                    (None, Some(d)) => d,
                    (None, None) => (0.0, 0.0),
                }
            })
    }

    /// Time scale onto `[0, width]` of the chart.
    pub fn scale_x(&self, state: &State, options: &ChartOptions, chart_type: ChartType) -> Arc<LinearScale> {
        let inputs = (
            self.domain_x(state, options, chart_type),
            self.chart_position(state, options.id, chart_type),
        );
        self.scale_x
            .get(&chart_key(options, chart_type), inputs, |(domain, position)| {
                trace!(id = options.id.0, %chart_type, ?domain, "building x scale");
                LinearScale::new_linear(**domain, (0.0, position.width))
            })
    }

    /// Value scale onto `[height, 0]` of the chart.
    pub fn scale_y(&self, state: &State, options: &ChartOptions, chart_type: ChartType) -> Arc<LinearScale> {
        let inputs = (
            self.domain_y(state, options, chart_type),
            self.chart_position(state, options.id, chart_type),
        );
        self.scale_y
            .get(&chart_key(options, chart_type), inputs, |(domain, position)| {
                trace!(id = options.id.0, %chart_type, ?domain, "building y scale");
                LinearScale::new_linear(**domain, (position.height, 0.0))
            })
    }

    pub fn plot_transform(
        &self,
        state: &State,
        options: &ChartOptions,
        chart_type: ChartType,
    ) -> Arc<PlotTransform> {
        let inputs = (
            self.scale_x(state, options, chart_type),
            self.scale_y(state, options, chart_type),
            self.chart_position(state, options.id, chart_type),
        );
        self.plot_transform
            .get(&chart_key(options, chart_type), inputs, |(x, y, position)| {
                PlotTransform::new(x.clone(), y.clone(), **position)
            })
    }
}
