use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{chart_key, Selectors};
use crate::data_types::{ChartOptions, ChartPosition, ChartType, ConstructionItem, LithologyEntry, Rect};
use crate::scales::LinearScale;
use crate::store::State;

/// One lithology interval drawn across the chart width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LithologyRect {
    pub rect: Rect,
    pub entry: LithologyEntry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionKind {
    Casing,
    Screen,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructionElement {
    pub kind: ConstructionKind,
    pub id: String,
    pub rect: Rect,
}

impl Selectors {
    pub fn lithology_rects(
        &self,
        state: &State,
        options: &ChartOptions,
        chart_type: ChartType,
    ) -> Arc<Vec<LithologyRect>> {
        let inputs = (
            state.well_log(&options.site_key),
            self.chart_position(state, options.id, chart_type),
            self.scale_y(state, options, chart_type),
        );
        self.lithology_rects
            .get(&chart_key(options, chart_type), inputs, |(log, position, y)| {
                log.entries
                    .iter()
                    .map(|entry| LithologyRect {
                        rect: Rect::between(
                            0.0,
                            position.width,
                            y.map(entry.depth_start),
                            y.map(entry.depth_end),
                        ),
                        entry: entry.clone(),
                    })
                    .collect()
            })
    }

    /// Casings followed by screens, centered and scaled by diameter.
    pub fn construction_elements(
        &self,
        state: &State,
        options: &ChartOptions,
        chart_type: ChartType,
    ) -> Arc<Vec<ConstructionElement>> {
        let inputs = (
            state.well_log(&options.site_key),
            self.chart_position(state, options.id, chart_type),
            self.scale_y(state, options, chart_type),
        );
        self.construction_elements
            .get(&chart_key(options, chart_type), inputs, |(log, position, y)| {
                let max_diameter = log
                    .casings
                    .iter()
                    .chain(log.screens.iter())
                    .map(|item| item.diameter)
                    .filter(|d| d.is_finite())
                    .fold(0.0, f64::max);

                let casings = log.casings.iter().map(|item| (ConstructionKind::Casing, item));
                let screens = log.screens.iter().map(|item| (ConstructionKind::Screen, item));
                casings
                    .chain(screens)
                    .map(|(kind, item)| ConstructionElement {
                        kind,
                        id: item.id.clone(),
                        rect: element_rect(item, position, y, max_diameter),
                    })
                    .collect()
            })
    }

    /// Water column inside the well, from the cursor point's level down to the
    /// bottom of the construction.
    pub fn well_water_level(
        &self,
        state: &State,
        options: &ChartOptions,
        chart_type: ChartType,
    ) -> Arc<Option<Rect>> {
        let inputs = (
            state.well_log(&options.site_key),
            self.chart_position(state, options.id, chart_type),
            self.scale_y(state, options, chart_type),
            self.cursor_point(state, options, chart_type),
        );
        self.well_water_level.get(
            &chart_key(options, chart_type),
            inputs,
            |(log, position, y, cursor_point)| {
                let point = (**cursor_point).as_ref()?;
                let bottom = log.construction_depth()?;
                let widest = log
                    .casings
                    .iter()
                    .max_by(|a, b| a.diameter.total_cmp(&b.diameter))
                    .or_else(|| log.screens.iter().max_by(|a, b| a.diameter.total_cmp(&b.diameter)))?;
                let max_diameter = log
                    .casings
                    .iter()
                    .chain(log.screens.iter())
                    .map(|item| item.diameter)
                    .filter(|d| d.is_finite())
                    .fold(0.0, f64::max);
                let (x, width) = centered(widest.diameter, position.width, max_diameter);
                Some(Rect::between(
                    x,
                    width,
                    y.map(point.datum.value),
                    y.map(bottom),
                ))
            },
        )
    }
}

fn element_rect(item: &ConstructionItem, position: &ChartPosition, y: &LinearScale, max_diameter: f64) -> Rect {
    let (x, width) = centered(item.diameter, position.width, max_diameter);
    Rect::between(x, width, y.map(item.depth_start), y.map(item.depth_end))
}

/// Horizontal placement of an element of `diameter` centered in `chart_width`.
fn centered(diameter: f64, chart_width: f64, max_diameter: f64) -> (f64, f64) {
    let width = if max_diameter > 0.0 && diameter.is_finite() {
        chart_width * (diameter.max(0.0) / max_diameter)
    } else {
        chart_width
    };
    ((chart_width - width) / 2.0, width)
}
