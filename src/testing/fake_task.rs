use std::borrow::Cow;

use crate::{Backtrace, TaskMeta, runtime::TaskRef};

/// Task record held by a [`FakeActor`](super::FakeActor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeTask {
    kind: Cow<'static, str>,
    task_type: Cow<'static, str>,
    status: Cow<'static, str>,
    meta: TaskMeta,
    backtrace: Option<Backtrace>,
    panicking: bool,
}

impl FakeTask {
    pub fn new(
        kind: impl Into<Cow<'static, str>>,
        task_type: impl Into<Cow<'static, str>>,
        status: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind: kind.into(),
            task_type: task_type.into(),
            status: status.into(),
            meta: TaskMeta::Empty,
            backtrace: None,
            panicking: false,
        }
    }

    pub fn with_meta(mut self, meta: TaskMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_backtrace<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backtrace = Some(Backtrace::from_frames(frames));
        self
    }

    /// Every read of this task panics, as if it finished mid-copy.
    pub fn panicking(mut self) -> Self {
        self.panicking = true;
        self
    }

    fn check(&self) {
        if self.panicking {
            panic!("task finished while being read");
        }
    }
}

impl TaskRef for FakeTask {
    fn kind(&self) -> Cow<'static, str> {
        self.check();
        self.kind.clone()
    }

    fn task_type(&self) -> Cow<'static, str> {
        self.check();
        self.task_type.clone()
    }

    fn meta(&self) -> TaskMeta {
        self.check();
        self.meta.clone()
    }

    fn status(&self) -> Cow<'static, str> {
        self.check();
        self.status.clone()
    }

    fn backtrace(&self) -> Option<Backtrace> {
        self.check();
        self.backtrace.clone()
    }
}
