//! In-memory runtime for exercising capture without a real actor system.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! stack-dump = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! The fakes implement the [`runtime`](crate::runtime) traits over plain
//! values. Each one can be told to panic on individual reads, or to stall,
//! to reproduce units that exit or hang mid-capture.
//!
//! # Example
//!
//! ```ignore
//! let registry = FakeRegistry::new()
//!     .with_unit(FakeUnit::actor(0x1, FakeActor::new(0xa).with_name("worker")))
//!     .with_unit(FakeUnit::thread(0x2).with_backtrace(["main"]));
//!
//! let snapshot = Snapshot::capture(&registry);
//! assert_eq!(snapshot.actors().len(), 1);
//! assert_eq!(snapshot.threads().len(), 1);
//! ```

mod fake_actor;
mod fake_registry;
mod fake_subject;
mod fake_task;
mod fake_unit;

pub use fake_actor::FakeActor;
pub use fake_registry::FakeRegistry;
pub use fake_subject::FakeSubject;
pub use fake_task::FakeTask;
pub use fake_unit::FakeUnit;
