use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use crate::{
    Backtrace, ObjectId,
    runtime::{ActorRef, Behavior},
    testing::{FakeSubject, FakeTask},
};

/// Actor handle backed by plain values.
///
/// Clones share the task queue, so a test can keep one handle and change
/// the queue while another handle sits in a [`FakeUnit`](super::FakeUnit).
/// [`copy_tasks`](ActorRef::copy_tasks) clones the queue under its lock,
/// the way a real runtime copies out its mailbox.
#[derive(Clone)]
pub struct FakeActor {
    id: u64,
    name: Option<String>,
    subject: Option<FakeSubject>,
    tasks: Arc<Mutex<Vec<FakeTask>>>,
    backtrace: Option<Backtrace>,
    stall: Option<Duration>,
    panicking_id: bool,
    panicking_tasks: bool,
}

impl FakeActor {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: None,
            subject: None,
            tasks: Arc::new(Mutex::new(Vec::new())),
            backtrace: None,
            stall: None,
            panicking_id: false,
            panicking_tasks: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bind the actor to `subject`, making it a cell actor.
    pub fn with_subject(mut self, subject: FakeSubject) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn with_task(self, task: FakeTask) -> Self {
        self.push_task(task);
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

    /// Block for `delay` whenever the backtrace is read.
    pub fn stalling(mut self, delay: Duration) -> Self {
        self.stall = Some(delay);
        self
    }

    pub fn panicking_id(mut self) -> Self {
        self.panicking_id = true;
        self
    }

    pub fn panicking_tasks(mut self) -> Self {
        self.panicking_tasks = true;
        self
    }

    /// Enqueue a task on the live queue shared by all clones.
    pub fn push_task(&self, task: FakeTask) {
        self.queue().push(task);
    }

    /// Drain the live queue, as if every task completed.
    pub fn finish_tasks(&self) {
        self.queue().clear();
    }

    fn queue(&self) -> MutexGuard<'_, Vec<FakeTask>> {
        self.tasks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ActorRef for FakeActor {
    type Subject = FakeSubject;
    type Task = FakeTask;

    fn id(&self) -> ObjectId {
        if self.panicking_id {
            panic!("actor terminated");
        }
        ObjectId::new(self.id)
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn behavior(&self) -> Behavior<FakeSubject> {
        match &self.subject {
            Some(subject) => Behavior::Cell(subject.clone()),
            None => Behavior::Other,
        }
    }

    fn copy_tasks(&self) -> Vec<FakeTask> {
        if self.panicking_tasks {
            panic!("task queue torn down");
        }
        self.queue().clone()
    }

    fn backtrace(&self) -> Option<Backtrace> {
        if let Some(delay) = self.stall {
            std::thread::sleep(delay);
        }
        self.backtrace.clone()
    }
}

impl PartialEq for FakeActor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Eq for FakeActor {}

impl fmt::Debug for FakeActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeActor")
            .field("id", &ObjectId::new(self.id))
            .field("name", &self.name)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}
