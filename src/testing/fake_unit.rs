use std::time::Duration;

use crate::{
    Backtrace, ObjectId,
    runtime::{ExecutionUnit, Role},
    testing::FakeActor,
};

/// Execution unit listed by a [`FakeRegistry`](super::FakeRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeUnit {
    id: u64,
    role: Option<Role>,
    actor: Option<FakeActor>,
    backtrace: Option<Backtrace>,
    stall: Option<Duration>,
    panicking_role: bool,
    panicking_actor: bool,
    panicking_backtrace: bool,
}

impl FakeUnit {
    fn new(id: u64, role: Option<Role>, actor: Option<FakeActor>) -> Self {
        Self {
            id,
            role,
            actor,
            backtrace: None,
            stall: None,
            panicking_role: false,
            panicking_actor: false,
            panicking_backtrace: false,
        }
    }

    /// Thread the runtime doesn't manage.
    pub fn thread(id: u64) -> Self {
        Self::new(id, None, None)
    }

    /// Runtime thread hosting `actor`.
    pub fn actor(id: u64, actor: FakeActor) -> Self {
        Self::new(id, Some(Role::Actor), Some(actor))
    }

    /// Runtime thread in the actor role that doesn't own an actor right now.
    pub fn idle_actor_thread(id: u64) -> Self {
        Self::new(id, Some(Role::Actor), None)
    }

    /// Internal runtime thread, e.g. a pool manager.
    pub fn internal(id: u64) -> Self {
        Self::new(id, Some(Role::Other), None)
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

    pub fn panicking_role(mut self) -> Self {
        self.panicking_role = true;
        self
    }

    pub fn panicking_actor(mut self) -> Self {
        self.panicking_actor = true;
        self
    }

    /// Reading the backtrace panics, as if the thread exited.
    pub fn panicking_backtrace(mut self) -> Self {
        self.panicking_backtrace = true;
        self
    }
}

impl ExecutionUnit for FakeUnit {
    type Actor = FakeActor;

    fn id(&self) -> ObjectId {
        ObjectId::new(self.id)
    }

    fn role(&self) -> Option<Role> {
        if self.panicking_role {
            panic!("thread exited during classification");
        }
        self.role
    }

    fn actor(&self) -> Option<FakeActor> {
        if self.panicking_actor {
            panic!("actor slot torn down");
        }
        self.actor.clone()
    }

    fn backtrace(&self) -> Option<Backtrace> {
        if self.panicking_backtrace {
            panic!("thread exited");
        }
        if let Some(delay) = self.stall {
            std::thread::sleep(delay);
        }
        self.backtrace.clone()
    }
}
