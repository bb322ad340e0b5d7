//! Machine configuration.

use serde::{Deserialize, Serialize};

/// How the dispatcher treats several transitions that share an event label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Fire every allowed match in order, but stop scanning at the first
    /// match whose guard refuses. The last allowed match wins.
    #[default]
    HaltOnBlocked,

    /// Only the first matching transition is considered, allowed or not.
    FirstMatch,

    /// Fire every allowed match in order and skip the refused ones.
    SkipBlocked,
}

/// Options fixed when a machine is created.
///
/// # Example
///
/// ```rust
/// use fsms::{DispatchPolicy, MachineConfig};
///
/// let config = MachineConfig::new()
///     .dispatch(DispatchPolicy::FirstMatch)
///     .track_history(true);
///
/// assert_eq!(config.dispatch, DispatchPolicy::FirstMatch);
/// assert!(config.track_history);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub dispatch: DispatchPolicy,
    pub track_history: bool,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch policy.
    pub fn dispatch(mut self, policy: DispatchPolicy) -> Self {
        self.dispatch = policy;
        self
    }

    /// Keep a [`StateHistory`](crate::core::StateHistory) of fired transitions.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }
}
