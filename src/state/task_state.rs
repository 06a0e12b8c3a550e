use std::borrow::Cow;

use crate::{Backtrace, TaskMeta, internal::probe, runtime::TaskRef};

use super::UNAVAILABLE;

/// Copy of one task taken while the owning actor kept running.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskState {
    /// Implementation kind of the task.
    pub kind: String,
    /// What the task was scheduled for.
    pub task_type: String,
    pub meta: TaskMeta,
    pub status: String,
    pub backtrace: Option<Backtrace>,
}

impl TaskState {
    /// Copy every field of `task`, each read isolated from the others.
    ///
    /// A field whose read fails becomes [`UNAVAILABLE`] (text fields),
    /// [`TaskMeta::Empty`] or an absent backtrace.
    pub fn capture<T: TaskRef>(task: &T, max_frames: Option<usize>) -> Self {
        Self {
            kind: text_field("task.kind", || task.kind()),
            task_type: text_field("task.task_type", || task.task_type()),
            meta: probe("task.meta", || task.meta()).unwrap_or_default(),
            status: text_field("task.status", || task.status()),
            backtrace: probe("task.backtrace", || task.backtrace())
                .flatten()
                .map(|bt| bt.truncated(max_frames)),
        }
    }
}

fn text_field(what: &'static str, read: impl FnOnce() -> Cow<'static, str>) -> String {
    probe(what, read)
        .map(Cow::into_owned)
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTask;

    #[test]
    fn copies_all_fields() {
        let task = FakeTask::new("TaskFiber", "call", "running")
            .with_meta(TaskMeta::text("handle_event"))
            .with_backtrace(["a", "b", "c"]);
        let state = TaskState::capture(&task, Some(2));
        assert_eq!(state.kind, "TaskFiber");
        assert_eq!(state.task_type, "call");
        assert_eq!(state.status, "running");
        assert_eq!(state.meta, TaskMeta::text("handle_event"));
        assert_eq!(state.backtrace, Some(Backtrace::from_frames(["a", "b"])));
    }

    #[test]
    fn failing_reads_become_placeholders() {
        let task = FakeTask::new("TaskFiber", "call", "running").panicking();
        let state = TaskState::capture(&task, None);
        assert_eq!(state.kind, UNAVAILABLE);
        assert_eq!(state.task_type, UNAVAILABLE);
        assert_eq!(state.status, UNAVAILABLE);
        assert_eq!(state.meta, TaskMeta::Empty);
        assert_eq!(state.backtrace, None);
    }
}
