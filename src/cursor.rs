//! Pointer tracking over the main chart overlay.

use tracing::debug;

use crate::data_types::{ChartOptions, ChartType};
use crate::selectors::Selectors;
use crate::store::{Action, Store};

pub struct CursorTracker {
    options: ChartOptions,
}

impl CursorTracker {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    /// Sets the cursor to the time under view-box coordinate `x`.
    pub fn on_pointer_move(&self, store: &mut Store, selectors: &Selectors, x: f64) -> Option<Action> {
        let state = store.state();
        let transform = selectors.plot_transform(&state, &self.options, ChartType::Main);
        let (time, _) = transform.screen_to_data((x, transform.bounds.y));
        if !time.is_finite() {
            debug!(x, "pointer position maps to a non-finite time");
            return None;
        }
        let action = Action::SetCursor {
            id: self.options.id,
            cursor: Some(time),
        };
        store.dispatch(action.clone());
        Some(action)
    }

    pub fn on_pointer_over(&self, store: &mut Store, selectors: &Selectors, x: f64) -> Option<Action> {
        self.on_pointer_move(store, selectors, x)
    }

    /// Clears the cursor so the latest point is shown again.
    pub fn on_pointer_out(&self, store: &mut Store) -> Action {
        let action = Action::SetCursor {
            id: self.options.id,
            cursor: None,
        };
        store.dispatch(action.clone());
        action
    }
}
