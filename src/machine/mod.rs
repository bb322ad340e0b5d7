//! The machine runtime: graph registration, dispatch and cloning.
//!
//! # Key Concepts
//!
//! - **Machine**: a name, a context, a current state and subscribers over a state graph
//! - **Dispatch**: processing one event against the current state's transitions
//! - **Cloning**: a second machine walking the same graph with its own cursor

mod dispatch;
mod error;
mod graph;

pub use dispatch::Dispatch;
pub use error::MachineError;

use crate::config::MachineConfig;
use crate::core::{StateHistory, StateId, StateRecord, StateTransition, Transition};
use dispatch::{Scan, Step};
use graph::StateGraph;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Callback notified after a transition has fired.
pub type Subscriber = Box<dyn Fn(&StateTransition) + Send + Sync>;

/// A finite state machine over a host-defined context `C`.
///
/// # Example
///
/// ```rust
/// use fsms::{Machine, StateRecord, Transition};
///
/// let mut switch = Machine::new("switch", 0u32);
/// let off = switch.register_state(StateRecord::new("off"));
/// let on = switch.register_state(StateRecord::new("on"));
///
/// switch
///     .register_transition(off, Transition::new("switch", on).action(|n: &mut u32| *n += 1))
///     .unwrap();
/// switch.register_transition(on, Transition::new("switch", off)).unwrap();
/// switch.set_initial_state(off).unwrap();
///
/// switch.transition("switch");
///
/// assert_eq!(switch.state_name().as_deref(), Some("on"));
/// assert_eq!(*switch.context(), 1);
/// ```
pub struct Machine<C> {
    name: String,
    context: C,
    graph: Arc<StateGraph<C>>,
    current: Option<StateId>,
    subscribers: Vec<Subscriber>,
    config: MachineConfig,
    history: Option<StateHistory>,
}

impl<C> Machine<C> {
    /// Create a machine with an empty graph and no current state.
    pub fn new(name: impl Into<String>, context: C) -> Self {
        Self::with_config(name, context, MachineConfig::default())
    }

    pub fn with_config(name: impl Into<String>, context: C, config: MachineConfig) -> Self {
        let name = name.into();
        debug!(machine = %name, ?config, "machine created");
        Self {
            name,
            context,
            graph: Arc::new(StateGraph::new()),
            current: None,
            subscribers: Vec::new(),
            history: config.track_history.then(StateHistory::new),
            config,
        }
    }

    /// Create a machine that walks the same state graph as `source`.
    ///
    /// No state or transition is copied: transitions registered through
    /// either machine are visible to both. The clone has its own context,
    /// no subscribers and no current state until
    /// [`set_initial_state`](Self::set_initial_state) is called on it.
    pub fn cloned_from(name: impl Into<String>, context: C, source: &Machine<C>) -> Self {
        let name = name.into();
        debug!(machine = %name, source = %source.name, "machine cloned");
        Self {
            name,
            context,
            graph: Arc::clone(&source.graph),
            current: None,
            subscribers: Vec::new(),
            history: source.config.track_history.then(StateHistory::new),
            config: source.config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the machine and hand the context back to the host.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Apply `f` to the context.
    pub fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut C),
    {
        f(&mut self.context)
    }

    /// Apply `f` to the context only if `predicate` holds. Returns whether
    /// `f` ran.
    pub fn mutate_if<P, F>(&mut self, predicate: P, f: F) -> bool
    where
        P: FnOnce(&C) -> bool,
        F: FnOnce(&mut C),
    {
        if !predicate(&self.context) {
            return false;
        }
        f(&mut self.context);
        true
    }

    /// Append a state to the graph and return its handle.
    pub fn register_state(&mut self, state: StateRecord<C>) -> StateId {
        let id = self.graph.insert(state);
        debug!(machine = %self.name, state = %id, "state registered");
        id
    }

    /// Create and register a state in one call.
    pub fn add_state(&mut self, name: &str) -> StateId {
        self.register_state(StateRecord::new(name))
    }

    /// Append `transition` to the outgoing transitions of `source`.
    ///
    /// Both `source` and the transition's target must belong to this
    /// machine's graph.
    pub fn register_transition(
        &mut self,
        source: StateId,
        transition: Transition<C>,
    ) -> Result<(), MachineError> {
        self.ensure_known(source)?;
        self.ensure_known(transition.target())?;

        let event = transition.event().to_string();
        let target = transition.target();
        if !self.graph.attach(source, transition) {
            return Err(self.foreign(source));
        }
        debug!(machine = %self.name, %source, %target, event = %event, "transition registered");
        Ok(())
    }

    /// Point the machine at `state`.
    pub fn set_initial_state(&mut self, state: StateId) -> Result<(), MachineError> {
        self.ensure_known(state)?;
        self.current = Some(state);
        Ok(())
    }

    /// Handle of the first state registered under `name`.
    pub fn find_state(&self, name: &str) -> Result<StateId, MachineError> {
        self.graph.find(name).ok_or_else(|| MachineError::UnknownState {
            machine: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Handle of the current state.
    pub fn state(&self) -> Option<StateId> {
        self.current
    }

    /// Name of the current state.
    pub fn state_name(&self) -> Option<Arc<str>> {
        self.current.and_then(|id| self.graph.name_of(id))
    }

    pub fn is_in(&self, name: &str) -> bool {
        self.state_name().is_some_and(|current| &*current == name)
    }

    /// Names of every state in the graph, in registration order.
    pub fn state_names(&self) -> Vec<Arc<str>> {
        self.graph.names()
    }

    pub fn state_count(&self) -> usize {
        self.graph.len()
    }

    /// Number of outgoing transitions registered on `state`.
    pub fn transition_count(&self, state: StateId) -> Result<usize, MachineError> {
        self.ensure_known(state)?;
        Ok(self.graph.outgoing(state).len())
    }

    /// Whether both machines walk the same graph.
    pub fn shares_graph_with(&self, other: &Machine<C>) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph)
    }

    /// Register a callback to run after every fired transition.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&StateTransition) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Fired transitions, when the machine tracks history.
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    /// Process `event` against the current state's transitions.
    ///
    /// Matching transitions are visited in registration order. Each one
    /// whose guard allows it runs its action, moves the machine to its
    /// target and notifies subscribers. What happens after a guard refuses
    /// depends on the machine's [`DispatchPolicy`](crate::DispatchPolicy).
    /// An event nothing listens for leaves the machine untouched.
    ///
    /// Panics raised by guards, actions or subscribers propagate; a state
    /// change committed before the panic stays committed.
    pub fn transition(&mut self, event: &str) -> Dispatch {
        let Some(source) = self.current else {
            trace!(machine = %self.name, event, "dispatch before initial state");
            return Dispatch::Uninitialized;
        };

        // Snapshot so no lock is held while host callbacks run. This clones
        // one Arc per outgoing transition on every dispatch.
        let outgoing = self.graph.outgoing(source);
        let mut scan = Scan::new(self.config.dispatch);

        for transition in outgoing.iter().filter(|t| t.matches(event)) {
            let allowed = transition.allows(&mut self.context);
            match scan.on_match(allowed) {
                Step::Fire => self.fire(transition, event),
                Step::FireAndHalt => {
                    self.fire(transition, event);
                    break;
                }
                Step::Skip => {
                    trace!(machine = %self.name, event, target = %transition.target(), "guard skipped");
                }
                Step::Halt => {
                    trace!(machine = %self.name, event, target = %transition.target(), "guard blocked");
                    break;
                }
            }
        }

        let outcome = scan.outcome();
        if outcome == Dispatch::NoMatch {
            trace!(machine = %self.name, event, "no matching transition");
        }
        outcome
    }

    fn fire(&mut self, transition: &Transition<C>, event: &str) {
        transition.run_action(&mut self.context);

        let target = transition.target();
        let record = (!self.subscribers.is_empty() || self.history.is_some()).then(|| {
            StateTransition::new(
                self.name_or_empty(self.current),
                self.name_or_empty(Some(target)),
                event,
            )
        });

        self.current = Some(target);
        debug!(machine = %self.name, event, %target, "transition fired");

        if let Some(record) = record {
            if let Some(history) = self.history.as_mut() {
                history.record(record.clone());
            }
            for subscriber in &self.subscribers {
                subscriber(&record);
            }
        }
    }

    fn name_or_empty(&self, id: Option<StateId>) -> String {
        id.and_then(|id| self.graph.name_of(id))
            .map(|name| name.to_string())
            .unwrap_or_default()
    }

    fn ensure_known(&self, id: StateId) -> Result<(), MachineError> {
        if self.graph.contains(id) {
            Ok(())
        } else {
            Err(self.foreign(id))
        }
    }

    fn foreign(&self, id: StateId) -> MachineError {
        warn!(machine = %self.name, state = %id, "state handle does not belong to this machine");
        MachineError::ForeignState {
            machine: self.name.clone(),
            index: id.index(),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Machine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.name)
            .field("context", &self.context)
            .field("graph", &self.graph.id())
            .field("current", &self.state_name())
            .field("subscribers", &self.subscribers.len())
            .field("config", &self.config)
            .finish()
    }
}
