//! Single state container: actions in, snapshots out.

mod actions;
mod reducer;
mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use state::State;

use std::sync::Arc;

use tracing::{debug, trace};

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Arc<State>)>;

/// Owns the current [`State`] and serializes every change through [`Store::dispatch`].
pub struct Store {
    state: Arc<State>,
    revision: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(State::new())
    }

    pub fn with_state(state: State) -> Self {
        Self {
            state: Arc::new(state),
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<State> {
        self.state.clone()
    }

    /// Number of accepted state changes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reduces `action` into a new snapshot and notifies listeners.
    ///
    /// Returns `false` when the action left the state unchanged; listeners are
    /// not called in that case.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, &action);
        if Arc::ptr_eq(&next, &self.state) {
            trace!(action = action.name(), "action left state unchanged");
            return false;
        }

        self.state = next;
        self.revision += 1;
        debug!(
            action = action.name(),
            revision = self.revision,
            listeners = self.listeners.len(),
            "state updated"
        );

        let state = self.state.clone();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Arc<State>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
