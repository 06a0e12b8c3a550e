use std::{
    fmt, io,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use uuid::Uuid;

use crate::{
    ActorState, Config, DumpId, ObjectId, Renderer, Result, ThreadState,
    classify::{Classification, classify},
    internal::probe,
    runtime::{ActorRef, ExecutionUnit, ThreadRegistry},
};

/// Point-in-time dump of every actor and plain thread in the runtime.
///
/// Built once by one of the `capture` functions and immutable afterwards.
/// Actors and threads are kept in the order the registry enumerated them.
///
/// # Consistency
///
/// Capture doesn't stop the world. Every unit keeps running while it is
/// read, so the snapshot approximates the system at capture time rather
/// than being an exact cut, and may already be outdated when rendered.
/// Rendering only touches the snapshot, never the live runtime.
///
/// # Example
///
/// ```ignore
/// let snapshot = Snapshot::capture(&registry);
/// tracing::info!(actors = snapshot.actors().len(), "captured");
/// snapshot.render(&mut std::io::stderr())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    id: DumpId,
    timestamp: u64,
    actors: Vec<ActorState>,
    threads: Vec<ThreadState>,
}

impl Snapshot {
    /// Assemble a snapshot from already captured records.
    pub fn new(actors: Vec<ActorState>, threads: Vec<ThreadState>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos().min(u64::MAX as u128) as u64)
            .unwrap_or(0);
        Self {
            id: Uuid::new_v4().as_u128(),
            timestamp,
            actors,
            threads,
        }
    }

    /// Capture every live unit of `registry` with the default configuration.
    ///
    /// Units in the actor role become [`ActorState`]s, units the runtime
    /// doesn't manage become [`ThreadState`]s, and internal runtime units
    /// are left out.
    ///
    /// There is no time limit per unit: a host whose backtrace capture
    /// blocks on a stuck thread stalls the whole capture. Use
    /// [`capture_bounded`](Self::capture_bounded) on fault paths.
    pub fn capture<R: ThreadRegistry>(registry: &R) -> Self {
        Self::capture_with(registry, &Config::default())
    }

    /// Like [`capture`](Self::capture), with explicit configuration.
    pub fn capture_with<R: ThreadRegistry>(registry: &R, config: &Config) -> Self {
        let units = probe("registry.live_units", || registry.live_units()).unwrap_or_default();
        let mut actors = Vec::new();
        let mut threads = Vec::new();
        let mut dropped = 0_usize;

        for unit in &units {
            match classify(unit) {
                Classification::Actor(Some(actor)) => {
                    actors.push(ActorState::capture(&actor, config));
                }
                Classification::NotParticipant => {
                    threads.push(ThreadState::capture(unit, config));
                }
                Classification::Actor(None) | Classification::Internal => dropped += 1,
            }
        }

        let snapshot = Self::new(actors, threads);
        snapshot.log_captured(dropped);
        snapshot
    }

    /// Capture with a time limit per unit.
    ///
    /// Units are classified inline; building each record (where the host
    /// reads tasks and backtraces) runs on tokio's blocking pool, bounded
    /// by [`Config::unit_timeout`]. A unit that doesn't finish in time is
    /// recorded with its identity only and capture moves on. Its blocking
    /// read is abandoned, not cancelled, and finishes in the background.
    ///
    /// Enumeration is bounded by the same limit; if it stalls the snapshot
    /// is empty.
    pub async fn capture_bounded<R>(registry: Arc<R>, config: &Config) -> Self
    where
        R: ThreadRegistry + Send + Sync + 'static,
        R::Unit: Send + 'static,
        <R::Unit as ExecutionUnit>::Actor: Send + 'static,
    {
        let limit = config.unit_timeout;
        let units = bounded(limit, "registry.live_units", ObjectId::UNKNOWN, move || {
            probe("registry.live_units", || registry.live_units()).unwrap_or_default()
        })
        .await
        .unwrap_or_default();

        let mut actors = Vec::new();
        let mut threads = Vec::new();
        let mut dropped = 0_usize;

        for unit in units {
            match classify(&unit) {
                Classification::Actor(Some(actor)) => {
                    let id = probe("actor.id", || actor.id()).unwrap_or(ObjectId::UNKNOWN);
                    let config = config.clone();
                    let state = bounded(limit, "actor", id, move || {
                        ActorState::capture(&actor, &config)
                    })
                    .await
                    .unwrap_or_else(|| ActorState::unresponsive(id));
                    actors.push(state);
                }
                Classification::NotParticipant => {
                    let id = probe("unit.id", || unit.id()).unwrap_or(ObjectId::UNKNOWN);
                    let config = config.clone();
                    let state = bounded(limit, "thread", id, move || {
                        ThreadState::capture(&unit, &config)
                    })
                    .await
                    .unwrap_or_else(|| ThreadState::unresponsive(id));
                    threads.push(state);
                }
                Classification::Actor(None) | Classification::Internal => dropped += 1,
            }
        }

        let snapshot = Self::new(actors, threads);
        snapshot.log_captured(dropped);
        snapshot
    }

    /// Unique id of this dump, for correlating log lines.
    #[inline]
    pub fn id(&self) -> DumpId {
        self.id
    }

    /// Capture time in nanoseconds since Unix epoch.
    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Captured actors, in enumeration order.
    #[inline]
    pub fn actors(&self) -> &[ActorState] {
        &self.actors
    }

    /// Captured plain threads, in enumeration order.
    #[inline]
    pub fn threads(&self) -> &[ThreadState] {
        &self.threads
    }

    /// Write the text report to `out` using the default labels.
    ///
    /// Only errors of `out` itself are returned.
    pub fn render<W: io::Write + ?Sized>(&self, out: &mut W) -> Result {
        Renderer::new(&Config::default()).render(self, out)
    }

    fn log_captured(&self, dropped: usize) {
        tracing::debug!(
            dump_id = %Uuid::from_u128(self.id),
            actors = self.actors.len(),
            threads = self.threads.len(),
            dropped,
            "Stack dump captured"
        );
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::new(&Config::default()).write_snapshot(self, f)
    }
}

/// Run `read` on the blocking pool, giving up after `limit`.
async fn bounded<T, F>(limit: Duration, what: &'static str, id: ObjectId, read: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match tokio::time::timeout(limit, tokio::task::spawn_blocking(read)).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            tracing::warn!(unit = what, id = %id, error = %e, "Unit capture failed");
            None
        }
        Err(_) => {
            tracing::warn!(unit = what, id = %id, timeout = ?limit, "Unit capture timed out");
            None
        }
    }
}
