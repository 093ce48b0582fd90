//! Where controllers keep their results.
//!
//! Controllers never hold a borrow of screen state across an `.await`. They read a
//! [`snapshot`](StateHandle::snapshot) and replace the value through
//! [`apply`](StateHandle::apply), which receives the previous value and returns the
//! next one. In components the handle is a `Signal`; headless callers and tests use
//! [`MemoryState`].

use dioxus::prelude::*;
use store::{reduce, SessionAction, SessionState};

pub trait StateHandle<T> {
    fn snapshot(&self) -> T;
    fn apply(&mut self, f: impl FnOnce(&T) -> T);
}

impl<T: Clone + 'static> StateHandle<T> for Signal<T> {
    fn snapshot(&self) -> T {
        self.peek().clone()
    }

    fn apply(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.peek());
        self.set(next);
    }
}

/// Plain owned state that remembers every value it has held.
#[derive(Clone, Debug)]
pub struct MemoryState<T> {
    current: T,
    history: Vec<T>,
}

impl<T: Clone> MemoryState<T> {
    pub fn new(value: T) -> Self {
        Self {
            history: vec![value.clone()],
            current: value,
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    /// Every value in order, starting with the initial one.
    pub fn history(&self) -> &[T] {
        &self.history
    }
}

impl<T: Clone> StateHandle<T> for MemoryState<T> {
    fn snapshot(&self) -> T {
        self.get().clone()
    }

    fn apply(&mut self, f: impl FnOnce(&T) -> T) {
        self.current = f(&self.current);
        self.history.push(self.current.clone());
    }
}

/// Run a session action through the reducer.
pub fn dispatch<S: StateHandle<SessionState>>(session: &mut S, action: SessionAction) {
    tracing::debug!(?action, "session action");
    session.apply(|state| reduce(state, action));
}
