//! fsms: an embeddable finite state machine engine
//!
//! A machine owns a host-defined context, a graph of named states and a
//! pointer to the current state. Named events drive it from state to state
//! through guarded, actioned transitions, and subscribers hear about every
//! transition that fires.
//!
//! # Core Concepts
//!
//! - **States**: named nodes with ordered outgoing transitions
//! - **Transitions**: event label, target, optional guard and action
//! - **Dispatch**: [`Machine::transition`] processes one event
//! - **Inline building**: [`builder::InlineBuilder`] and [`inline_machine!`] link a graph by name
//! - **Cloning**: [`Machine::cloned_from`] walks an existing graph with a new cursor
//!
//! # Example
//!
//! ```rust
//! use fsms::{Machine, StateRecord, Transition};
//!
//! #[derive(Default)]
//! struct Job {
//!     pid: i32,
//!     status: i32,
//! }
//!
//! let mut fsm = Machine::new("scheduler", Job { pid: -1, status: -1 });
//! let pending = fsm.register_state(StateRecord::new("PENDING"));
//! let running = fsm.register_state(StateRecord::new("RUNNING"));
//! let exited = fsm.register_state(StateRecord::new("EXITED"));
//! fsm.set_initial_state(pending).unwrap();
//!
//! fsm.register_transition(
//!     pending,
//!     Transition::new("promote", running).action(|job: &mut Job| job.pid = 1),
//! )
//! .unwrap();
//! fsm.register_transition(
//!     running,
//!     Transition::new("promote", exited)
//!         .guard(|job: &mut Job| job.pid != -1)
//!         .action(|job: &mut Job| job.status = 0),
//! )
//! .unwrap();
//!
//! fsm.transition("promote");
//! fsm.transition("promote");
//! fsm.transition("promote"); // nothing leaves EXITED
//!
//! assert_eq!(fsm.state_name().as_deref(), Some("EXITED"));
//! assert_eq!(fsm.context().status, 0);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, InlineBuilder, TransitionSpec};
pub use config::{DispatchPolicy, MachineConfig};
pub use self::core::{Action, Guard, StateHistory, StateId, StateRecord, StateTransition, Transition};
pub use machine::{Dispatch, Machine, MachineError, Subscriber};
