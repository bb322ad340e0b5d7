//! Builder that declares a whole graph by state name and links it in one pass.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Action, Guard, Transition};
use crate::machine::Machine;
use tracing::{debug, warn};

/// A transition described by state names instead of handles.
pub struct TransitionSpec<C> {
    event: String,
    source: String,
    target: String,
    guard: Option<Guard<C>>,
    action: Option<Action<C>>,
}

impl<C> TransitionSpec<C> {
    pub fn new(
        event: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            event: event.into(),
            source: source.into(),
            target: target.into(),
            guard: None,
            action: None,
        }
    }

    /// Add a guard (optional).
    pub fn guard<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add an action (optional).
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

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Builds a fully linked machine from state names.
///
/// States are registered in the order given. The initial state and every
/// transition's source and target are then resolved by name, first match
/// wins. If any name fails to resolve, [`build`](Self::build) returns an
/// error and no machine.
///
/// # Example
///
/// ```rust
/// use fsms::builder::{InlineBuilder, TransitionSpec};
///
/// let mut jobs = InlineBuilder::<()>::new("jobs", "PENDING")
///     .states(["PENDING", "READY", "RUNNING", "DONE"])
///     .transition(TransitionSpec::new("advance", "PENDING", "READY"))
///     .transition(TransitionSpec::new("advance", "READY", "RUNNING"))
///     .transition(TransitionSpec::new("advance", "RUNNING", "DONE"))
///     .build()
///     .unwrap();
///
/// jobs.transition("advance");
/// assert_eq!(jobs.state_name().as_deref(), Some("READY"));
/// ```
pub struct InlineBuilder<C> {
    name: String,
    initial: String,
    states: Vec<String>,
    transitions: Vec<TransitionSpec<C>>,
    config: MachineConfig,
}

impl<C> InlineBuilder<C> {
    pub fn new(name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: initial.into(),
            states: Vec::new(),
            transitions: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Add one state label.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Add several state labels, keeping their order.
    pub fn states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a transition descriptor.
    pub fn transition(mut self, spec: TransitionSpec<C>) -> Self {
        self.transitions.push(spec);
        self
    }

    /// Add several transition descriptors, keeping their order.
    pub fn transitions(mut self, specs: impl IntoIterator<Item = TransitionSpec<C>>) -> Self {
        self.transitions.extend(specs);
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the machine with a default context.
    pub fn build(self) -> Result<Machine<C>, BuildError>
    where
        C: Default,
    {
        self.build_with_context(C::default())
    }

    /// Build the machine around `context`.
    pub fn build_with_context(self, context: C) -> Result<Machine<C>, BuildError> {
        let InlineBuilder {
            name,
            initial,
            states,
            transitions,
            config,
        } = self;

        let mut machine = Machine::with_config(name, context, config);
        for state in &states {
            machine.add_state(state);
        }

        let initial_id = machine.find_state(&initial).map_err(|_| {
            warn!(machine = %machine.name(), initial = %initial, "initial state not found");
            BuildError::UnresolvedInitialState {
                machine: machine.name().to_string(),
                name: initial.clone(),
            }
        })?;
        machine.set_initial_state(initial_id)?;

        let count = transitions.len();
        for spec in transitions {
            let source = machine
                .find_state(&spec.source)
                .map_err(|_| BuildError::UnresolvedSource {
                    machine: machine.name().to_string(),
                    event: spec.event.clone(),
                    name: spec.source.clone(),
                })?;
            let target = machine
                .find_state(&spec.target)
                .map_err(|_| BuildError::UnresolvedTarget {
                    machine: machine.name().to_string(),
                    event: spec.event.clone(),
                    name: spec.target.clone(),
                })?;

            let transition = Transition::with_callbacks(spec.event, target, spec.guard, spec.action);
            machine.register_transition(source, transition)?;
        }

        debug!(
            machine = %machine.name(),
            states = states.len(),
            transitions = count,
            "inline machine built"
        );
        Ok(machine)
    }
}
