//! Keeps the zoom widget of the main chart and the brush of the overview
//! chart in agreement with the store viewport.
//!
//! Every transition carries an [`Origin`]. Only a [`Origin::UserDrag`]
//! transition dispatches; the handler then moves the other widget with an
//! [`Origin::ExternalSync`] transition, which updates that widget and stops
//! there. This is what keeps brush and zoom from driving each other forever.

use tracing::{debug, trace};

use crate::data_types::{ChartOptions, ChartType, Viewport};
use crate::selectors::Selectors;
use crate::store::{Action, State, Store};
use crate::view_controller::ZoomTransform;

/// Who caused a widget change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The user dragged, scrolled or brushed.
    UserDrag,
    /// The widget was repositioned to mirror the store or the other widget.
    ExternalSync,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Widget {
    Brush,
    Zoom,
}

pub struct BrushZoomController {
    options: ChartOptions,
    zoom: ZoomTransform,
    /// Brush selection in overview chart pixels.
    brush: Option<(f64, f64)>,
    last_transition: Option<(Widget, Origin)>,
}

impl BrushZoomController {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            zoom: ZoomTransform::identity(),
            brush: None,
            last_transition: None,
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn zoom_transform(&self) -> ZoomTransform {
        self.zoom
    }

    pub fn brush_selection(&self) -> Option<(f64, f64)> {
        self.brush
    }

    pub fn last_transition(&self) -> Option<(Widget, Origin)> {
        self.last_transition
    }

    /// Handles a new zoom transform on the main chart.
    ///
    /// A user zoom is mapped through the overview scale to a viewport, which
    /// is dispatched, and the brush follows. Returns the dispatched action.
    pub fn on_zoom(
        &mut self,
        store: &mut Store,
        selectors: &Selectors,
        transform: ZoomTransform,
        origin: Origin,
    ) -> Option<Action> {
        self.last_transition = Some((Widget::Zoom, origin));
        if origin == Origin::ExternalSync {
            trace!(?transform, "zoom synced");
            self.zoom = transform;
            return None;
        }

        let state = store.state();
        let brush_scale = selectors.scale_x(&state, &self.options, ChartType::Brush);
        let main = selectors.chart_position(&state, self.options.id, ChartType::Main);
        let extent = (0.0, main.width);
        let constrained = transform.constrain(extent, extent, selectors.config().min_zoom_scale);
        self.zoom = constrained;

        let (start, end) = constrained.rescale(&brush_scale);
        if !start.is_finite() || !end.is_finite() {
            debug!(?constrained, "zoom produced a non-finite domain, ignoring");
            return None;
        }

        let action = Action::SetViewport {
            id: self.options.id,
            viewport: Viewport::new(start, end),
        };
        store.dispatch(action.clone());

        let selection = (brush_scale.map(start), brush_scale.map(end));
        self.move_brush(Some(selection));
        Some(action)
    }

    /// Handles a new brush selection on the overview chart.
    ///
    /// A non-empty user selection becomes the viewport and the zoom follows.
    /// An empty or zero-width selection resets the viewport to the full extent.
    pub fn on_brush(
        &mut self,
        store: &mut Store,
        selectors: &Selectors,
        selection: Option<(f64, f64)>,
        origin: Origin,
    ) -> Option<Action> {
        self.last_transition = Some((Widget::Brush, origin));
        if origin == Origin::ExternalSync {
            trace!(?selection, "brush synced");
            self.brush = selection;
            return None;
        }

        let state = store.state();
        let selection = selection
            .map(|(a, b)| (a.min(b), a.max(b)))
            .filter(|(a, b)| a.is_finite() && b.is_finite() && b > a);

        let Some((s0, s1)) = selection else {
            let action = Action::ResetViewport {
                id: self.options.id,
            };
            store.dispatch(action.clone());
            self.brush = None;
            self.move_zoom(ZoomTransform::identity());
            return Some(action);
        };

        let brush_scale = selectors.scale_x(&state, &self.options, ChartType::Brush);
        let main = selectors.chart_position(&state, self.options.id, ChartType::Main);
        let action = Action::SetViewport {
            id: self.options.id,
            viewport: Viewport::new(brush_scale.invert(s0), brush_scale.invert(s1)),
        };
        store.dispatch(action.clone());
        self.brush = Some((s0, s1));

        if let Some(zoom) = ZoomTransform::scaled_to_selection((s0, s1), main.width) {
            self.move_zoom(zoom);
        }
        Some(action)
    }

    /// Repositions both widgets from the store viewport, for changes that did
    /// not come from either widget (a resize or a viewport set elsewhere).
    /// Never dispatches.
    pub fn sync(&mut self, state: &State, selectors: &Selectors) {
        let brush_scale = selectors.scale_x(state, &self.options, ChartType::Brush);
        let main = selectors.chart_position(state, self.options.id, ChartType::Main);

        match selectors.viewport(state, self.options.id) {
            Some(viewport) => {
                let selection = (brush_scale.map(viewport.start), brush_scale.map(viewport.end));
                self.move_brush(Some(selection));
                let zoom = ZoomTransform::scaled_to_selection(selection, main.width)
                    .unwrap_or_else(ZoomTransform::identity);
                self.move_zoom(zoom);
            }
            None => {
                self.move_brush(None);
                self.move_zoom(ZoomTransform::identity());
            }
        }
    }

    fn move_brush(&mut self, selection: Option<(f64, f64)>) {
        self.brush = selection;
        trace!(?selection, "brush moved");
    }

    fn move_zoom(&mut self, zoom: ZoomTransform) {
        self.zoom = zoom;
        trace!(?zoom, "zoom moved");
    }
}
