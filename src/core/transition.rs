//! Transitions: the guarded, actioned edges between states.

use super::guard::{Action, Guard};
use super::state::StateId;
use std::fmt;

/// An edge from one state to another, taken when its event is dispatched.
///
/// A transition is immutable once registered. Several transitions in one
/// state may share an event label; the dispatcher evaluates them in
/// registration order.
pub struct Transition<C> {
    event: String,
    target: StateId,
    guard: Option<Guard<C>>,
    action: Option<Action<C>>,
}

impl<C> Transition<C> {
    /// Create an unconditional transition with no side effect.
    pub fn new(event: impl Into<String>, target: StateId) -> Self {
        Self {
            event: event.into(),
            target,
            guard: None,
            action: None,
        }
    }

    /// Create a transition from the full (event, target, guard, action) tuple.
    pub fn with_callbacks(
        event: impl Into<String>,
        target: StateId,
        guard: Option<Guard<C>>,
        action: Option<Action<C>>,
    ) -> Self {
        Self {
            event: event.into(),
            target,
            guard,
            action,
        }
    }

    /// Gate the transition with a predicate over the context.
    pub fn guard<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Run a side effect on the context when the transition fires.
    pub fn action<F>(mut self, effect: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(effect));
        self
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn target(&self) -> StateId {
        self.target
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Check whether this transition listens for `event`.
    pub fn matches(&self, event: &str) -> bool {
        self.event == event
    }

    /// Check the guard, if any. Unguarded transitions are always allowed.
    pub fn allows(&self, context: &mut C) -> bool {
        self.guard.as_ref().map_or(true, |g| g.check(context))
    }

    pub(crate) fn run_action(&self, context: &mut C) {
        if let Some(action) = &self.action {
            action.run(context);
        }
    }
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("target", &self.target)
            .field("guarded", &self.guard.is_some())
            .field("actioned", &self.action.is_some())
            .finish()
    }
}
