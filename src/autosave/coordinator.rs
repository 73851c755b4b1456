//! The autosave coordinator: a repeating timer that captures the current
//! draft state and submits it to the backend.
//!
//! One coordinator runs per editing session. Each tick captures a fresh
//! snapshot and dispatches a save for the current target. Ticks that fire
//! while a save is still in flight are dropped outright, not queued, and a
//! failed save never stops the timer; the next tick is the retry.

use crate::autosave::events::{AutosaveBroadcaster, AutosaveEvent};
use crate::autosave::types::{FormSnapshot, NoteBackend, SharedTarget, SyncTarget};
use crate::error::SaveResult;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Interval between autosave ticks when none is configured (30 seconds).
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for one autosave session.
#[derive(Debug, Clone)]
pub struct AutosaveConfig {
    /// Time between ticks. Must be non-zero.
    pub interval: Duration,
}

impl AutosaveConfig {
    /// Config with the given tick interval.
    pub fn every(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AUTOSAVE_INTERVAL,
        }
    }
}

type SaveFuture = Pin<Box<dyn Future<Output = SaveResult<()>> + Send>>;

/// A save that has been dispatched and not yet observed to complete.
struct InFlightSave {
    target: SyncTarget,
    started_at: Instant,
    future: SaveFuture,
}

/// Handle to a running autosave coordinator.
///
/// [`stop`](Self::stop) cancels future ticks; dropping the handle does the
/// same. A save already dispatched keeps running either way and is drained
/// before the task exits.
pub struct AutosaveHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    /// Stop the coordinator. Idempotent: extra calls, or calls after the
    /// task has already exited, are no-ops.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Wait for the coordinator task to exit, draining any in-flight save.
    pub async fn join(self) {
        let _ = self.task.await;
    }

    /// Whether the coordinator task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start an autosave coordinator for one editing session.
///
/// `target` is read at tick time, so switching the note being edited (or
/// clearing it) between ticks redirects subsequent saves without a
/// restart. `capture` produces the snapshot to save; it runs on every tick
/// that finds no save in flight and must be infallible. `backend` performs
/// the actual save; its failures are logged and broadcast, never fatal.
///
/// The first tick fires one full interval after this call returns.
///
/// # Panics
///
/// Panics if `config.interval` is zero.
pub fn spawn_autosave<B, C>(
    config: AutosaveConfig,
    target: SharedTarget,
    capture: C,
    backend: Arc<B>,
    events: AutosaveBroadcaster,
) -> AutosaveHandle
where
    B: NoteBackend + 'static,
    C: Fn() -> FormSnapshot + Send + 'static,
{
    assert!(
        !config.interval.is_zero(),
        "autosave interval must be non-zero"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    // First tick one interval from now. The session just opened, so there
    // is nothing worth saving yet.
    let ticker = interval_at(Instant::now() + config.interval, config.interval);
    let task = tokio::spawn(autosave_task(
        ticker,
        target,
        capture,
        backend,
        events,
        shutdown_rx,
    ));

    AutosaveHandle {
        shutdown: shutdown_tx,
        task,
    }
}

async fn autosave_task<B, C>(
    mut ticker: tokio::time::Interval,
    target: SharedTarget,
    capture: C,
    backend: Arc<B>,
    events: AutosaveBroadcaster,
    mut shutdown: watch::Receiver<bool>,
) where
    B: NoteBackend + 'static,
    C: Fn() -> FormSnapshot + Send + 'static,
{
    // A tick that lands while the loop is busy must not replay in a burst
    // afterwards; late ticks are dropped like overlapping ones.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("Autosave started (interval: {:?})", ticker.period());

    // The single-submission invariant lives in this slot: set in the tick
    // arm, cleared in the completion arm, both on this one task.
    let mut in_flight: Option<InFlightSave> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if in_flight.is_some() {
                    debug!("Autosave tick dropped: previous save still in flight");
                    continue;
                }

                let snapshot = capture();

                let Some(current) = target.read().await.clone() else {
                    debug!("Autosave tick skipped: no note open");
                    continue;
                };

                debug!(
                    "Dispatching autosave for {} ({} fields)",
                    current,
                    snapshot.len()
                );
                let future = {
                    let backend = backend.clone();
                    let save_target = current.clone();
                    Box::pin(async move { backend.save_note(&save_target, snapshot).await })
                        as SaveFuture
                };
                in_flight = Some(InFlightSave {
                    target: current,
                    started_at: Instant::now(),
                    future,
                });
            }
            result = async {
                match in_flight.as_mut() {
                    Some(save) => save.future.as_mut().await,
                    None => std::future::pending::<SaveResult<()>>().await,
                }
            } => {
                if let Some(save) = in_flight.take() {
                    report_outcome(&events, save.target, save.started_at.elapsed(), result);
                }
            }
            changed = shutdown.changed() => {
                // A closed channel means the handle was dropped; treat it
                // like an explicit stop.
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    // Future ticks are cancelled at this point, but a dispatched save is
    // not: drive it to completion so its outcome is still reported.
    if let Some(save) = in_flight.take() {
        debug!("Autosave stopping: draining in-flight save for {}", save.target);
        let result = save.future.await;
        report_outcome(&events, save.target, save.started_at.elapsed(), result);
    }

    info!("Autosave stopped");
}

fn report_outcome(
    events: &AutosaveBroadcaster,
    target: SyncTarget,
    elapsed: Duration,
    result: SaveResult<()>,
) {
    match result {
        Ok(()) => {
            debug!("Auto-saved {} in {:?}", target, elapsed);
            events.notify(AutosaveEvent::Saved { target, elapsed });
        }
        Err(error) => {
            warn!("Autosave failed for {}: {}", target, error);
            events.notify(AutosaveEvent::SaveFailed {
                target,
                error: error.to_string(),
            });
        }
    }
}
