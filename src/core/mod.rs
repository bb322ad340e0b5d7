//! Core building blocks of a state graph.
//!
//! This module contains the data types a machine is assembled from:
//! - States and the handles that address them
//! - Transitions with their optional guards and actions
//! - Records of fired transitions and their history

mod guard;
mod history;
mod state;
mod transition;

pub use guard::{Action, Guard};
pub use history::{StateHistory, StateTransition};
pub use state::{StateId, StateRecord};
pub use transition::Transition;
