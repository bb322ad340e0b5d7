//! Errors returned by the inline builder.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building a machine in one call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state '{name}' is not among the states of machine '{machine}'")]
    UnresolvedInitialState { machine: String, name: String },

    #[error("Transition '{event}' starts from unknown state '{name}' in machine '{machine}'")]
    UnresolvedSource {
        machine: String,
        event: String,
        name: String,
    },

    #[error("Transition '{event}' targets unknown state '{name}' in machine '{machine}'")]
    UnresolvedTarget {
        machine: String,
        event: String,
        name: String,
    },

    #[error(transparent)]
    Machine(#[from] MachineError),
}
