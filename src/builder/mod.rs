//! Inline construction of whole machines.
//!
//! [`InlineBuilder`] and the [`inline_machine!`](crate::inline_machine) macro
//! declare states and transitions by name and resolve every name into a
//! linked graph before handing back a usable machine.

pub mod error;
pub mod inline;
pub mod macros;

pub use error::BuildError;
pub use inline::{InlineBuilder, TransitionSpec};
