//! States and the handles that identify them inside a machine's graph.

use super::transition::Transition;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Handle to a state registered in a machine's graph.
///
/// Returned by [`Machine::register_state`](crate::Machine::register_state).
/// A handle remembers which graph issued it, so passing it to a machine
/// that does not share that graph is reported as an error instead of
/// silently addressing an unrelated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId {
    graph: Uuid,
    index: usize,
}

impl StateId {
    pub(crate) fn new(graph: Uuid, index: usize) -> Self {
        Self { graph, index }
    }

    pub(crate) fn graph(&self) -> Uuid {
        self.graph
    }

    /// Position of the state in registration order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A named node with an ordered list of outgoing transitions.
///
/// States are created free-standing and then registered into a machine.
/// Transition order is registration order and matters during dispatch.
///
/// # Example
///
/// ```rust
/// use fsms::core::StateRecord;
///
/// let off: StateRecord<()> = StateRecord::new("off");
///
/// assert_eq!(off.name(), "off");
/// ```
pub struct StateRecord<C> {
    name: Arc<str>,
    transitions: Vec<Arc<Transition<C>>>,
}

impl<C> StateRecord<C> {
    /// Create a state with no outgoing transitions.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Outgoing transitions in registration order.
    pub(crate) fn transitions(&self) -> &[Arc<Transition<C>>] {
        &self.transitions
    }

    pub(crate) fn push(&mut self, transition: Transition<C>) {
        self.transitions.push(Arc::new(transition));
    }
}

impl<C> fmt::Debug for StateRecord<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRecord")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_transitions() {
        let state: StateRecord<()> = StateRecord::new("PENDING");

        assert_eq!(state.name(), "PENDING");
        assert!(state.transitions().is_empty());
    }

    #[test]
    fn push_preserves_registration_order() {
        let graph = Uuid::new_v4();
        let mut state: StateRecord<()> = StateRecord::new("RUNNING");

        state.push(Transition::new("promote", StateId::new(graph, 1)));
        state.push(Transition::new("promote", StateId::new(graph, 2)));
        state.push(Transition::new("cancel", StateId::new(graph, 3)));

        let targets: Vec<usize> = state
            .transitions()
            .iter()
            .map(|t| t.target().index())
            .collect();
        assert_eq!(targets, vec![1, 2, 3]);
    }

    #[test]
    fn handles_from_different_graphs_differ() {
        let a = StateId::new(Uuid::new_v4(), 0);
        let b = StateId::new(Uuid::new_v4(), 0);

        assert_ne!(a, b);
        assert_eq!(a.index(), b.index());
    }

    #[test]
    fn handle_displays_its_index() {
        let id = StateId::new(Uuid::new_v4(), 4);
        assert_eq!(id.to_string(), "#4");
    }
}
