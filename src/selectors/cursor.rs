use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{chart_key, Selectors};
use crate::data_types::{ChartOptions, ChartType};
use crate::points::{self, NearestPoint};
use crate::store::State;
use crate::utils::date_formatter::format_datetime;

/// Chart-local position of the cursor marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorFocus {
    /// x of the vertical focus line; only shown while a cursor is set.
    pub line_x: Option<f64>,
    /// Center of the focus circle on the nearest point.
    pub circle: Option<(f64, f64)>,
}

impl Selectors {
    /// Point nearest to the cursor, or to the right edge of the x domain when
    /// no cursor is set.
    pub fn cursor_point(
        &self,
        state: &State,
        options: &ChartOptions,
        chart_type: ChartType,
    ) -> Arc<Option<NearestPoint>> {
        let inputs = (
            self.chart_points(state, &options.site_key),
            state.cursor(options.id),
            self.domain_x(state, options, chart_type),
        );
        self.cursor_point
            .get(&chart_key(options, chart_type), inputs, |(points, cursor, domain)| {
                let time = cursor.unwrap_or(domain.1);
                points::nearest_point(points, time)
            })
    }

    pub fn cursor_focus(
        &self,
        state: &State,
        options: &ChartOptions,
        chart_type: ChartType,
    ) -> Arc<CursorFocus> {
        let inputs = (
            state.cursor(options.id),
            self.cursor_point(state, options, chart_type),
            self.scale_x(state, options, chart_type),
            self.scale_y(state, options, chart_type),
        );
        self.cursor_focus
            .get(&chart_key(options, chart_type), inputs, |(cursor, point, x, y)| {
                CursorFocus {
                    line_x: cursor.map(|c| x.map(c)),
                    circle: (**point)
                        .as_ref()
                        .map(|p| (x.map(p.datum.date_time as f64), y.map(p.datum.value))),
                }
            })
    }

    /// Tooltip of the main chart: `"<value> <unit> - <date>"`.
    pub fn cursor_tooltip(&self, state: &State, options: &ChartOptions) -> Arc<Option<String>> {
        let inputs = (
            self.cursor_point(state, options, ChartType::Main),
            self.series_unit(state, &options.site_key),
        );
        self.cursor_tooltip.get(options, inputs, |(point, unit)| {
            let point = (**point).as_ref()?;
            let mut parts = Vec::with_capacity(2);
            if point.datum.value != 0.0 {
                let unit = (**unit).as_deref().unwrap_or_default();
                parts.push(format!("{} {}", point.datum.value, unit).trim_end().to_string());
            }
            parts.push(format_datetime(point.datum.date_time));
            Some(parts.join(" - "))
        })
    }
}
