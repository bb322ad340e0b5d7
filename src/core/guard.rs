//! Guard predicates and actions attached to transitions.
//!
//! Both wrap host-supplied closures over the machine's context. Guards decide
//! whether a matching transition may fire; actions run once when it does.

use std::fmt;
use std::sync::Arc;

/// Predicate over the machine context that gates a transition.
///
/// A guard sees only the context, never the event name or the transition
/// it belongs to. It may be called several times in one dispatch when more
/// than one transition shares an event label, and it may write to the
/// context, for instance to count its own attempts.
///
/// # Example
///
/// ```rust
/// use fsms::core::Guard;
///
/// struct Job {
///     pid: i32,
/// }
///
/// let has_pid = Guard::new(|job: &mut Job| job.pid != -1);
///
/// assert!(has_pid.check(&mut Job { pid: 42 }));
/// assert!(!has_pid.check(&mut Job { pid: -1 }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&mut C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against a context.
    pub fn check(&self, context: &mut C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Side effect run on the machine context when a transition fires.
pub struct Action<C> {
    effect: Arc<dyn Fn(&mut C) + Send + Sync>,
}

impl<C> Action<C> {
    /// Create an action from a closure.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        Action {
            effect: Arc::new(effect),
        }
    }

    /// Run the action. Panics raised by the closure propagate to the caller.
    pub fn run(&self, context: &mut C) {
        (self.effect)(context)
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            effect: Arc::clone(&self.effect),
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
