#![cfg(feature = "test-harness")]

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use stack_dump::{
    ActorStatus, Config, ObjectId, Snapshot,
    testing::{FakeActor, FakeRegistry, FakeSubject, FakeTask, FakeUnit},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[tokio::test]
async fn bounded_capture_skips_stalled_units() {
    init_tracing();
    let registry = FakeRegistry::new()
        .with_unit(FakeUnit::thread(0x1).stalling(Duration::from_secs(1)))
        .with_unit(FakeUnit::actor(
            0x2,
            FakeActor::new(0xa)
                .with_name("stuck")
                .with_task(FakeTask::new("X", "call", "running"))
                .stalling(Duration::from_secs(1)),
        ))
        .with_unit(FakeUnit::thread(0x3).with_backtrace(["main"]));

    let config = Config::default().with_unit_timeout(Duration::from_millis(50));
    let started = Instant::now();
    let snapshot = Snapshot::capture_bounded(Arc::new(registry), &config).await;
    assert!(started.elapsed() < Duration::from_secs(1));

    let actor = &snapshot.actors()[0];
    assert_eq!(actor.id, ObjectId::new(0xa));
    assert_eq!(actor.status, ActorStatus::Idle);
    assert_eq!(actor.name, None);

    let threads: Vec<_> = snapshot.threads().iter().map(|t| t.id.get()).collect();
    assert_eq!(threads, [0x1, 0x3]);
    assert_eq!(snapshot.threads()[0].backtrace, None);
    assert_eq!(snapshot.threads()[1].backtrace.as_ref().map(|bt| bt.len()), Some(1));
}

#[test]
fn panicking_units_still_produce_a_dump() {
    init_tracing();
    let registry = FakeRegistry::new()
        .with_unit(FakeUnit::internal(0x1).panicking_role())
        .with_unit(FakeUnit::actor(0x2, FakeActor::new(0xb)).panicking_actor())
        .with_unit(FakeUnit::thread(0x3).panicking_backtrace())
        .with_unit(FakeUnit::actor(
            0x4,
            FakeActor::new(0xc)
                .with_subject(FakeSubject::new(0x2a, "Worker"))
                .with_task(FakeTask::new("X", "call", "running").panicking()),
        ));

    let snapshot = Snapshot::capture(&registry);
    let output = snapshot.to_string();

    // 0x1 fell back to a plain thread, 0x2 lost its actor and was dropped.
    let threads: Vec<_> = snapshot.threads().iter().map(|t| t.id.get()).collect();
    assert_eq!(threads, [0x1, 0x3]);
    assert_eq!(snapshot.actors().len(), 1);
    assert!(output.starts_with("Actor 0xc Cell 0x2a: Worker\n"));
    assert!(output.contains("  1) <unavailable>[<unavailable>]: <unavailable>\n      (none)\n"));
    assert!(output.ends_with("Thread 0x3:\nEMPTY BACKTRACE\n\n"));
}

#[test]
fn later_queue_changes_do_not_reach_the_snapshot() {
    let actor = FakeActor::new(0xd).with_task(FakeTask::new("X", "call", "running"));
    let registry = FakeRegistry::new().with_unit(FakeUnit::actor(0x1, actor.clone()));

    let snapshot = Snapshot::capture(&registry);
    let before = snapshot.to_string();

    actor.finish_tasks();
    actor.push_task(FakeTask::new("Y", "timer", "suspended"));
    actor.push_task(FakeTask::new("Z", "timer", "suspended"));

    assert_eq!(snapshot.to_string(), before);
    assert_eq!(snapshot.actors()[0].tasks.len(), 1);
    assert_eq!(Snapshot::capture(&registry).actors()[0].tasks.len(), 2);
}
