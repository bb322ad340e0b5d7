//! Records of fired transitions.
//!
//! A [`StateTransition`] is handed to every subscriber when a transition
//! fires. Machines configured to track history also keep them, in order,
//! in a [`StateHistory`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// The record is a snapshot: it owns copies of the state names and is not
/// affected by anything the machine does afterwards.
///
/// # Example
///
/// ```rust
/// use fsms::core::StateTransition;
///
/// let record = StateTransition::new("off", "on", "switch");
///
/// assert_eq!(record.from, "off");
/// assert_eq!(record.to, "on");
/// assert_eq!(record.event, "switch");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Name of the state before the transition fired
    pub from: String,
    /// Name of the state the transition moved to
    pub to: String,
    /// Event label that triggered the transition
    pub event: String,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Create a record stamped with the current time.
    pub fn new(from: impl Into<String>, to: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            event: event.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether the transition left the machine in the state it started from.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of fired transitions.
///
/// # Example
///
/// ```rust
/// use fsms::core::{StateHistory, StateTransition};
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition::new("PENDING", "READY", "advance"));
/// history.record(StateTransition::new("READY", "RUNNING", "advance"));
///
/// assert_eq!(history.get_path(), vec!["PENDING", "READY", "RUNNING"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition record.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Names of the states traversed: the first source, then each target.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time elapsed between the first and last recorded transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Recorded transitions that were triggered by `event`.
    pub fn by_event<'a>(&'a self, event: &'a str) -> impl Iterator<Item = &'a StateTransition> {
        self.transitions.iter().filter(move |t| t.event == event)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
