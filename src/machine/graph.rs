//! The state graph shared between a machine and its clones.

use crate::core::{StateId, StateRecord, Transition};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Append-only collection of states, addressed by [`StateId`].
///
/// Machines hold the graph behind an `Arc`. States are never removed, so a
/// handle that resolved once stays valid for the life of the graph.
pub(crate) struct StateGraph<C> {
    id: Uuid,
    states: RwLock<Vec<StateRecord<C>>>,
}

impl<C> StateGraph<C> {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            states: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    // Callbacks never run while a lock is held, so a poisoned lock still
    // guards a consistent Vec.
    fn read(&self) -> RwLockReadGuard<'_, Vec<StateRecord<C>>> {
        self.states.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<StateRecord<C>>> {
        self.states.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, state: StateRecord<C>) -> StateId {
        let mut states = self.write();
        states.push(state);
        StateId::new(self.id, states.len() - 1)
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.graph() == self.id && id.index() < self.read().len()
    }

    /// First state registered under `name`.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.read()
            .iter()
            .position(|s| s.name() == name)
            .map(|index| StateId::new(self.id, index))
    }

    /// Append a transition to `source`. Returns `false` if `source` is not
    /// part of this graph.
    pub fn attach(&self, source: StateId, transition: Transition<C>) -> bool {
        if source.graph() != self.id {
            return false;
        }
        match self.write().get_mut(source.index()) {
            Some(state) => {
                state.push(transition);
                true
            }
            None => false,
        }
    }

    pub fn name_of(&self, id: StateId) -> Option<Arc<str>> {
        if id.graph() != self.id {
            return None;
        }
        self.read().get(id.index()).map(StateRecord::shared_name)
    }

    /// Snapshot of the outgoing transitions of `id`.
    pub fn outgoing(&self, id: StateId) -> Vec<Arc<Transition<C>>> {
        if id.graph() != self.id {
            return Vec::new();
        }
        self.read()
            .get(id.index())
            .map(|s| s.transitions().to_vec())
            .unwrap_or_default()
    }

    pub fn names(&self) -> Vec<Arc<str>> {
        self.read().iter().map(StateRecord::shared_name).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }
}
