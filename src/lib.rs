//! Stack dumps for actor runtimes.
//!
//! Captures what every execution unit of a live actor runtime is doing,
//! both actor threads and plain background threads, and renders it as a
//! plain-text report for debugging hangs, deadlocks and runaway tasks.
//!
//! The runtime is never paused. Capture reads each unit while it keeps
//! running, copies everything into an immutable [`Snapshot`], and only then
//! renders it. Anything that fails while reading a unit degrades to a
//! placeholder in the snapshot; the only errors surfaced are those of the
//! output sink.
//!
//! The runtime plugs in by implementing the traits in [`runtime`]:
//! a [`ThreadRegistry`] enumerating [`ExecutionUnit`]s, which expose their
//! [`ActorRef`], whose tasks are copied out as [`TaskRef`]s.
//!
//! # Example
//!
//! ```ignore
//! // On SIGQUIT, an admin request, a watchdog firing...
//! stack_dump::dump(&runtime.threads(), &mut std::io::stderr())?;
//!
//! // Or keep the snapshot around and render it later, possibly twice.
//! let snapshot = Snapshot::capture_bounded(registry, &Config::default()).await;
//! snapshot.render(&mut log_file)?;
//! ```

mod backtrace;
mod classify;
mod config;
mod error;
mod object_id;
mod render;
mod snapshot;

mod internal;

pub mod runtime;
pub mod state;

#[cfg(any(test, feature = "test-harness"))]
pub mod testing;

pub use backtrace::Backtrace;
pub use classify::{Classification, classify};
pub use config::Config;
pub use error::Error;
pub use object_id::ObjectId;
pub use render::{EMPTY_BACKTRACE, Renderer};
pub use runtime::{ActorRef, Behavior, ExecutionUnit, Role, Subject, TaskRef, ThreadRegistry};
pub use snapshot::Snapshot;
pub use state::{ActorState, ActorStatus, CellState, TaskMeta, TaskState, ThreadState};

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type DumpId = u128;

/// Capture the runtime and write the report to `out` in one go.
pub fn dump<R, W>(registry: &R, out: &mut W) -> Result
where
    R: ThreadRegistry,
    W: std::io::Write + ?Sized,
{
    Snapshot::capture(registry).render(out)
}
