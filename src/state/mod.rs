//! Immutable records a [`Snapshot`](crate::Snapshot) is made of.
//!
//! Every record is a value copy. Once built, none of them refers back to
//! the live runtime, so a snapshot can be kept, cloned and rendered long
//! after the observed actors have moved on.

mod actor_state;
mod cell_state;
mod task_meta;
mod task_state;
mod thread_state;

pub use actor_state::{ActorState, ActorStatus};
pub use cell_state::CellState;
pub use task_meta::TaskMeta;
pub use task_state::TaskState;
pub use thread_state::ThreadState;

/// Text recorded for a task field that couldn't be read.
pub const UNAVAILABLE: &str = "<unavailable>";
