use std::{fmt, io};

use crate::{ActorState, ActorStatus, Backtrace, Config, Result, Snapshot, ThreadState};

/// Line written in place of a backtrace that couldn't be captured.
pub const EMPTY_BACKTRACE: &str = "EMPTY BACKTRACE";

/// Writes the text report of a [`Snapshot`].
///
/// Output is a pure function of the snapshot and the configuration, so the
/// same snapshot renders byte-identically to any number of sinks. Actors
/// come first, then plain threads, each in capture order:
///
/// ```text
/// Actor 0x7f3a Cell 0x7f40: Worker [pool]
/// State: Running (executing tasks)
/// <tab>app::worker::run
///
/// Tasks:
///   1) TaskFiber[call]: running
///       {method: handle_event}
/// EMPTY BACKTRACE
///
/// Thread 0x7f52:
/// <tab>std::thread::park
///
/// ```
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Write the report to `out`, one block per actor and thread.
    ///
    /// Each block is assembled in memory first and handed to the sink with
    /// a single `write_all`, so concurrent writers on a shared stream
    /// (stderr) interleave at block boundaries at worst.
    pub fn render<W: io::Write + ?Sized>(&self, snapshot: &Snapshot, out: &mut W) -> Result {
        let mut block = String::new();
        for actor in snapshot.actors() {
            block.clear();
            self.write_actor(actor, &mut block)?;
            out.write_all(block.as_bytes())?;
        }
        for thread in snapshot.threads() {
            block.clear();
            self.write_thread(thread, &mut block)?;
            out.write_all(block.as_bytes())?;
        }
        Ok(())
    }

    /// Write the whole report to a formatting sink.
    pub fn write_snapshot<W: fmt::Write + ?Sized>(
        &self,
        snapshot: &Snapshot,
        out: &mut W,
    ) -> fmt::Result {
        for actor in snapshot.actors() {
            self.write_actor(actor, out)?;
        }
        for thread in snapshot.threads() {
            self.write_thread(thread, out)?;
        }
        Ok(())
    }

    pub fn write_actor<W: fmt::Write + ?Sized>(
        &self,
        actor: &ActorState,
        out: &mut W,
    ) -> fmt::Result {
        write!(out, "{} {}", self.config.actor_label, actor.id)?;
        if let Some(cell) = &actor.cell {
            write!(
                out,
                " {} {}: {}",
                self.config.cell_label, cell.subject_id, cell.subject_type
            )?;
        }
        if let Some(name) = &actor.name {
            write!(out, " [{name}]")?;
        }
        writeln!(out)?;

        writeln!(out, "State: {}", actor.status.describe())?;
        self.write_backtrace(actor.backtrace.as_ref(), out)?;

        if actor.status == ActorStatus::Running {
            writeln!(out, "Tasks:")?;
            for (i, task) in actor.tasks.iter().enumerate() {
                writeln!(
                    out,
                    "  {}) {}[{}]: {}",
                    i + 1,
                    task.kind,
                    task.task_type,
                    task.status
                )?;
                writeln!(out, "      {}", task.meta)?;
                self.write_backtrace(task.backtrace.as_ref(), out)?;
            }
        }
        Ok(())
    }

    pub fn write_thread<W: fmt::Write + ?Sized>(
        &self,
        thread: &ThreadState,
        out: &mut W,
    ) -> fmt::Result {
        writeln!(out, "Thread {}:", thread.id)?;
        self.write_backtrace(thread.backtrace.as_ref(), out)
    }

    /// One indented line per frame and a blank line, or the
    /// [`EMPTY_BACKTRACE`] marker when nothing was captured.
    pub fn write_backtrace<W: fmt::Write + ?Sized>(
        &self,
        backtrace: Option<&Backtrace>,
        out: &mut W,
    ) -> fmt::Result {
        match backtrace {
            Some(backtrace) => {
                for frame in backtrace.frames() {
                    writeln!(out, "{}{}", self.config.indent, frame)?;
                }
            }
            None => writeln!(out, "{EMPTY_BACKTRACE}")?,
        }
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, ObjectId, TaskMeta, TaskState};

    fn backtrace(config: &Config, bt: Option<&Backtrace>) -> String {
        let mut out = String::new();
        Renderer::new(config).write_backtrace(bt, &mut out).unwrap();
        out
    }

    #[test]
    fn absent_backtrace_is_marked() {
        assert_eq!(backtrace(&Config::default(), None), "EMPTY BACKTRACE\n\n");
    }

    #[test]
    fn frames_are_indented() {
        let bt = Backtrace::from_frames(["f1", "f2"]);
        assert_eq!(backtrace(&Config::default(), Some(&bt)), "\tf1\n\tf2\n\n");
        let config = Config::default().with_indent("  ");
        assert_eq!(backtrace(&config, Some(&bt)), "  f1\n  f2\n\n");
    }

    #[test]
    fn empty_backtrace_is_just_a_blank_line() {
        let bt = Backtrace::default();
        assert_eq!(backtrace(&Config::default(), Some(&bt)), "\n");
    }

    #[test]
    fn header_with_cell_and_name() {
        let actor = ActorState {
            cell: Some(CellState {
                subject_id: ObjectId::new(0x2a),
                subject_type: "Worker".into(),
            }),
            name: Some("pool".into()),
            ..ActorState::unresponsive(ObjectId::new(0x1f))
        };
        let config = Config::default()
            .with_actor_label("maiko::Actor")
            .with_cell_label("maiko::Cell");
        let mut out = String::new();
        Renderer::new(&config).write_actor(&actor, &mut out).unwrap();
        assert_eq!(
            out,
            "maiko::Actor 0x1f maiko::Cell 0x2a: Worker [pool]\n\
             State: Idle (waiting for messages)\n\
             EMPTY BACKTRACE\n\n"
        );
    }

    #[test]
    fn running_actor_lists_tasks() {
        let task = TaskState {
            kind: "TaskFiber".into(),
            task_type: "call".into(),
            meta: TaskMeta::text("tick"),
            status: "running".into(),
            backtrace: Some(Backtrace::from_frames(["t1"])),
        };
        let actor = ActorState {
            status: ActorStatus::Running,
            tasks: vec![task],
            backtrace: Some(Backtrace::from_frames(["a1"])),
            ..ActorState::unresponsive(ObjectId::new(0xff))
        };
        let mut out = String::new();
        Renderer::new(&Config::default())
            .write_actor(&actor, &mut out)
            .unwrap();
        assert_eq!(
            out,
            "Actor 0xff\n\
             State: Running (executing tasks)\n\
             \ta1\n\n\
             Tasks:\n  \
             1) TaskFiber[call]: running\n      \
             tick\n\
             \tt1\n\n"
        );
    }

    struct FailingSink;

    impl io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let snapshot = Snapshot::new(vec![], vec![ThreadState::unresponsive(ObjectId::new(1))]);
        let result = snapshot.render(&mut FailingSink);
        assert!(matches!(result, Err(crate::Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        let mut out = Vec::new();
        Snapshot::new(vec![], vec![]).render(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
