//! Connects store changes to draw callbacks.
//!
//! A binding pairs a selector with a draw function. The draw function runs
//! once when the binding is created and afterwards only when the selector
//! returns a different `Arc` than it did for the previous frame. Store
//! dispatches merely request a frame; [`Bindings::run_frame`] does the work,
//! so any number of dispatches between two frames cost one redraw at most.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::store::{ListenerId, State, Store};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

/// Frame request shared with the store listener.
#[derive(Debug, Default)]
struct FrameQueue {
    requested: bool,
    /// Dispatches observed since the last frame.
    pending: u64,
}

trait Update {
    /// Recomputes the selector, redrawing if its output changed.
    fn update(&mut self, state: &State) -> bool;
}

struct TargetBinding<T, V, C, S, D> {
    target: T,
    selector: S,
    draw: D,
    last: Arc<V>,
    context: Option<C>,
}

impl<T, V, C, S, D> Update for TargetBinding<T, V, C, S, D>
where
    S: Fn(&State) -> Arc<V>,
    D: FnMut(&mut T, &V, Option<C>) -> C,
{
    fn update(&mut self, state: &State) -> bool {
        let value = (self.selector)(state);
        if Arc::ptr_eq(&value, &self.last) {
            return false;
        }
        let previous = self.context.take();
        self.context = Some((self.draw)(&mut self.target, &value, previous));
        self.last = value;
        true
    }
}

struct Listener<V, S, F> {
    selector: S,
    on_change: F,
    last: Arc<V>,
}

impl<V, S, F> Update for Listener<V, S, F>
where
    S: Fn(&State) -> Arc<V>,
    F: FnMut(&V),
{
    fn update(&mut self, state: &State) -> bool {
        let value = (self.selector)(state);
        if Arc::ptr_eq(&value, &self.last) {
            return false;
        }
        (self.on_change)(&value);
        self.last = value;
        true
    }
}

/// The set of live bindings of a page.
pub struct Bindings {
    entries: Vec<(BindingId, Box<dyn Update>)>,
    next_id: u64,
    queue: Arc<Mutex<FrameQueue>>,
    listener: Option<ListenerId>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new()
    }
}

impl Bindings {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            queue: Arc::new(Mutex::new(FrameQueue::default())),
            listener: None,
        }
    }

    /// Draws `target` with the current selector output and keeps it up to date.
    ///
    /// `draw` receives the context it returned on its previous call, `None`
    /// the first time.
    pub fn bind<T, V, C>(
        &mut self,
        state: &State,
        mut target: T,
        selector: impl Fn(&State) -> Arc<V> + 'static,
        mut draw: impl FnMut(&mut T, &V, Option<C>) -> C + 'static,
    ) -> BindingId
    where
        T: 'static,
        V: 'static,
        C: 'static,
    {
        let value = selector(state);
        let context = draw(&mut target, &value, None);
        self.push(TargetBinding {
            target,
            selector,
            draw,
            last: value,
            context: Some(context),
        })
    }

    /// Calls `on_change` whenever the selector output changes. Unlike
    /// [`Bindings::bind`] nothing runs for the current state.
    pub fn listen<V: 'static>(
        &mut self,
        state: &State,
        selector: impl Fn(&State) -> Arc<V> + 'static,
        on_change: impl FnMut(&V) + 'static,
    ) -> BindingId {
        let last = selector(state);
        self.push(Listener {
            selector,
            on_change,
            last,
        })
    }

    fn push(&mut self, binding: impl Update + 'static) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(binding)));
        id
    }

    /// Drops a binding together with its target and context.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(binding_id, _)| *binding_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribes to `store` so that every accepted dispatch requests a frame.
    pub fn connect(&mut self, store: &mut Store) {
        if self.listener.is_some() {
            return;
        }
        let queue = self.queue.clone();
        self.listener = Some(store.subscribe(move |_| {
            let mut queue = queue.lock();
            queue.requested = true;
            queue.pending += 1;
        }));
    }

    pub fn disconnect(&mut self, store: &mut Store) -> bool {
        match self.listener.take() {
            Some(id) => store.unsubscribe(id),
            None => false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.listener.is_some()
    }

    pub fn request_frame(&self) {
        self.queue.lock().requested = true;
    }

    pub fn frame_requested(&self) -> bool {
        self.queue.lock().requested
    }

    /// Runs one frame against `state` if one was requested.
    ///
    /// Returns the number of bindings that redrew.
    pub fn run_frame(&mut self, state: &State) -> usize {
        let pending = {
            let mut queue = self.queue.lock();
            if !queue.requested {
                return 0;
            }
            queue.requested = false;
            std::mem::take(&mut queue.pending)
        };

        let mut redrawn = 0;
        for (id, binding) in self.entries.iter_mut() {
            if binding.update(state) {
                trace!(binding = id.0, "redrawing binding");
                redrawn += 1;
            }
        }
        debug!(
            dispatches = pending,
            bindings = self.entries.len(),
            redrawn,
            "frame complete"
        );
        redrawn
    }
}
