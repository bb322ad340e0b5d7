//! Errors raised while wiring a machine's graph.

use thiserror::Error;

/// Errors that can occur when registering or looking up states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("State handle {index} is not part of the graph used by machine '{machine}'")]
    ForeignState { machine: String, index: usize },

    #[error("No state named '{name}' in machine '{machine}'")]
    UnknownState { machine: String, name: String },
}
