use std::fmt;

use crate::{
    Backtrace, Config, ObjectId,
    internal::probe,
    runtime::{ActorRef, Behavior},
};

use super::{CellState, TaskState};

/// What an actor was doing when it was captured.
///
/// Decided once from the copied task collection and never updated:
///
/// ```text
/// no tasks copied  → Idle
/// any task copied  → Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorStatus {
    /// Actor had no tasks, waiting for messages.
    Idle,
    /// Actor had at least one pending or active task.
    Running,
}

impl ActorStatus {
    /// Description used on the `State:` line of the report.
    pub fn describe(&self) -> &'static str {
        match self {
            ActorStatus::Idle => "Idle (waiting for messages)",
            ActorStatus::Running => "Running (executing tasks)",
        }
    }
}

impl fmt::Display for ActorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorStatus::Idle => write!(f, "idle"),
            ActorStatus::Running => write!(f, "running"),
        }
    }
}

/// Copy of one actor's diagnostic state.
///
/// # Consistency
///
/// `status` is `Running` exactly when `tasks` is non-empty, as observed at
/// capture time. The fields are read one after another from an actor that
/// keeps running, so together they approximate the actor's state rather
/// than describe a single instant. The tasks themselves come from one
/// copy-out and are consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ObjectId,
    pub name: Option<String>,
    /// Bound subject, present only for cell actors.
    pub cell: Option<CellState>,
    pub status: ActorStatus,
    pub tasks: Vec<TaskState>,
    /// Stack of the thread hosting the actor.
    pub backtrace: Option<Backtrace>,
}

impl ActorState {
    /// Build the state of `actor`, tolerating failures field by field.
    ///
    /// Placeholders for failed reads: [`ObjectId::UNKNOWN`] for the id,
    /// no name, no cell, no backtrace. A failed task copy reads as an empty
    /// collection, so the actor is reported `Idle`.
    pub fn capture<A: ActorRef>(actor: &A, config: &Config) -> Self {
        let id = probe("actor.id", || actor.id()).unwrap_or(ObjectId::UNKNOWN);
        let name = probe("actor.name", || actor.name()).flatten();

        let cell = probe("actor.behavior", || match actor.behavior() {
            Behavior::Cell(subject) => Some(CellState::capture(&subject)),
            Behavior::Other => None,
        })
        .flatten();

        let tasks = probe("actor.copy_tasks", || actor.copy_tasks()).unwrap_or_default();
        let (status, tasks) = if tasks.is_empty() {
            (ActorStatus::Idle, Vec::new())
        } else {
            let states = tasks
                .iter()
                .map(|task| TaskState::capture(task, config.max_frames))
                .collect();
            (ActorStatus::Running, states)
        };

        let backtrace = probe("actor.backtrace", || actor.backtrace())
            .flatten()
            .map(|bt| bt.truncated(config.max_frames));

        Self {
            id,
            name,
            cell,
            status,
            tasks,
            backtrace,
        }
    }

    /// State recorded for an actor whose capture couldn't complete.
    ///
    /// Only the identity, read before the capture started, survives.
    pub fn unresponsive(id: ObjectId) -> Self {
        Self {
            id,
            name: None,
            cell: None,
            status: ActorStatus::Idle,
            tasks: Vec::new(),
            backtrace: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == ActorStatus::Running
    }
}
