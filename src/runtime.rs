//! Interfaces the dumper needs from the host actor runtime.
//!
//! The dumper owns none of the observed state. Everything it learns comes
//! through these traits, which the runtime implements over its own thread
//! registry, actor cells and task queues. Implementations must not block:
//! every method is called on a live system, possibly from a signal-driven
//! diagnostic path, while the observed units keep running.
//!
//! A method that can't produce its value because the unit is going away
//! should return `None`/empty. A method that panics is tolerated as well;
//! the dumper isolates each call and substitutes a placeholder.

use std::borrow::Cow;

use crate::{Backtrace, ObjectId, TaskMeta};

/// Process-wide enumeration of live execution units.
pub trait ThreadRegistry {
    type Unit: ExecutionUnit;

    /// All execution units alive right now, in a stable enumeration order.
    ///
    /// Must be callable at any time without synchronizing with the units
    /// themselves.
    fn live_units(&self) -> Vec<Self::Unit>;
}

/// Function of a runtime-managed execution unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// The unit hosts an actor.
    Actor,
    /// Internal runtime machinery, e.g. a pool manager or timer thread.
    Other,
}

/// Handle to one live thread of execution.
pub trait ExecutionUnit {
    type Actor: ActorRef;

    fn id(&self) -> ObjectId;

    /// Role of the unit, or `None` when the runtime doesn't manage it.
    fn role(&self) -> Option<Role>;

    /// Actor currently owned by the unit.
    ///
    /// Only consulted for units in the [`Role::Actor`] role. May be `None`
    /// between two actors or while the owning actor shuts down.
    fn actor(&self) -> Option<Self::Actor>;

    /// Current call stack, or `None` if the unit has exited or stack capture
    /// isn't supported.
    fn backtrace(&self) -> Option<Backtrace>;
}

/// Behaviour an actor is currently running.
///
/// Only the subject-bound kind carries diagnostic payload; everything else
/// (supervisors, routers, custom behaviours) is folded into `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior<S> {
    /// The actor is bound to a user-defined subject object.
    Cell(S),
    Other,
}

impl<S> Behavior<S> {
    pub fn subject(&self) -> Option<&S> {
        match self {
            Behavior::Cell(subject) => Some(subject),
            Behavior::Other => None,
        }
    }
}

/// User object a cell actor is bound to.
pub trait Subject {
    fn id(&self) -> ObjectId;

    /// Type name printed next to the subject id, e.g. `Worker`.
    fn type_name(&self) -> Cow<'static, str>;
}

/// Handle to a live actor.
pub trait ActorRef {
    type Subject: Subject;
    type Task: TaskRef;

    fn id(&self) -> ObjectId;

    /// Registered name, if the actor has one.
    fn name(&self) -> Option<String>;

    fn behavior(&self) -> Behavior<Self::Subject>;

    /// Point-in-time copy of the actor's pending and active tasks.
    ///
    /// The collection is owned and mutated by the actor's own thread. The
    /// copy must be taken in one short step (e.g. clone under the queue's
    /// own lock) so that the returned records are consistent with each
    /// other as of that instant. Never hand out a live view.
    fn copy_tasks(&self) -> Vec<Self::Task>;

    /// Call stack of the thread currently hosting the actor.
    fn backtrace(&self) -> Option<Backtrace>;
}

/// One copied task record.
pub trait TaskRef {
    /// Implementation kind of the task, e.g. `TaskFiber`.
    fn kind(&self) -> Cow<'static, str>;

    /// What the task was scheduled for, e.g. `call` or `timer`.
    fn task_type(&self) -> Cow<'static, str>;

    /// Descriptive copy of whatever the runtime attached to the task.
    fn meta(&self) -> TaskMeta;

    /// Scheduling status, e.g. `running` or `suspended`.
    fn status(&self) -> Cow<'static, str>;

    fn backtrace(&self) -> Option<Backtrace>;
}
