//! Debounced, coalescing persistence for rapidly edited state.
//!
//! [`DebouncedSync`] owns a single pending write. Every
//! [`notify_change`](DebouncedSync::notify_change) records the newest
//! snapshot and re-arms one quiescence timer, cancelling the previous one.
//! When the timer runs out without being re-armed, exactly one persistence
//! call is made with the newest snapshot at that moment.
//!
//! ```text
//!            notify_change            timer elapsed          save finished
//!   Idle ───────────────────▶ Armed ─────────────────▶ Firing ────────────▶ Idle
//!                              ▲  │ notify_change
//!                              └──┘ (cancel + re-arm)
//! ```
//!
//! Edits arriving while a save is in flight are never blocked and never
//! cancel that save; they arm a follow-up. Saves are not serialized against
//! each other at the transport level. A failed save is logged and recorded
//! in [`SyncStatus::last_error`]; the local state is kept and nothing is
//! retried until the next edit.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::{sync::watch, task::JoinHandle};

use crate::error::{Result, StrideError};

/// Quiescence window used when none is configured.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(800);

/// Destination of debounced snapshots.
#[async_trait]
pub trait SnapshotSink<S>: Send + Sync {
    /// Persist one snapshot.
    async fn persist(&self, snapshot: S) -> Result<()>;
}

/// Observable state of a [`DebouncedSync`], for UI feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStatus {
    /// A timer is armed and a write will follow
    pub pending: bool,
    /// At least one write is in flight
    pub saving: bool,
    pub saves_completed: u64,
    pub saves_failed: u64,
    /// Message of the most recent failed write, cleared by the next success
    pub last_error: Option<String>,
}

impl SyncStatus {
    /// Nothing armed and nothing in flight.
    pub fn is_settled(&self) -> bool {
        !self.pending && !self.saving
    }
}

struct Slot<S> {
    latest: Option<S>,
    timer: Option<JoinHandle<()>>,
    generation: u64,
    in_flight: usize,
}

struct Shared<S> {
    window: Duration,
    sink: Arc<dyn SnapshotSink<S>>,
    slot: Mutex<Slot<S>>,
    status: watch::Sender<SyncStatus>,
}

/// Coalesces bursts of edits into one write per quiescence window.
pub struct DebouncedSync<S> {
    shared: Arc<Shared<S>>,
}

impl<S: Send + 'static> DebouncedSync<S> {
    pub fn new(sink: Arc<dyn SnapshotSink<S>>) -> Self {
        Self::with_window(sink, DEFAULT_QUIESCENCE)
    }

    pub fn with_window(sink: Arc<dyn SnapshotSink<S>>, window: Duration) -> Self {
        let (status, _) = watch::channel(SyncStatus::default());
        Self {
            shared: Arc::new(Shared {
                window,
                sink,
                slot: Mutex::new(Slot {
                    latest: None,
                    timer: None,
                    generation: 0,
                    in_flight: 0,
                }),
                status,
            }),
        }
    }

    pub fn window(&self) -> Duration {
        self.shared.window
    }

    /// Record `snapshot` as the desired state and re-arm the timer.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn notify_change(&self, snapshot: S) {
        let shared = &self.shared;
        let mut slot = shared.lock_slot();

        slot.latest = Some(snapshot);
        slot.generation += 1;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }

        let generation = slot.generation;
        let task_shared = Arc::clone(shared);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(task_shared.window).await;
            task_shared.fire(generation).await;
        }));

        debug!("Armed save timer (generation {generation})");
        shared.status.send_modify(|status| status.pending = true);
    }

    /// Write the pending snapshot now instead of waiting for the timer.
    ///
    /// Returns `Ok(())` without a write when nothing is pending.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when the write fails.
    pub async fn flush(&self) -> Result<()> {
        let (snapshot, save) = {
            let mut slot = self.shared.lock_slot();
            if let Some(timer) = slot.timer.take() {
                timer.abort();
            }
            slot.generation += 1;
            match slot.latest.take() {
                Some(snapshot) => (snapshot, self.shared.begin_save(&mut slot)),
                None => return Ok(()),
            }
        };

        let result = self.shared.sink.persist(snapshot).await;
        save.finish(&result);
        result
    }

    /// Wait until no write is armed or in flight.
    pub async fn settled(&self) {
        let mut rx = self.shared.status.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting.
        let _ = rx.wait_for(SyncStatus::is_settled).await;
    }

    pub fn status(&self) -> SyncStatus {
        self.shared.status.borrow().clone()
    }

    pub fn is_saving(&self) -> bool {
        self.shared.status.borrow().saving
    }

    /// Receive status changes as they happen.
    pub fn subscribe(&self) -> watch::Receiver<SyncStatus> {
        self.shared.status.subscribe()
    }
}

impl<S> Shared<S> {
    fn lock_slot(&self) -> MutexGuard<'_, Slot<S>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fire(&self, generation: u64) {
        let (snapshot, save) = {
            let mut slot = self.lock_slot();
            if slot.generation != generation {
                debug!("Save timer {generation} superseded");
                return;
            }
            // Detach: later edits must not abort this save.
            slot.timer = None;
            match slot.latest.take() {
                Some(snapshot) => (snapshot, self.begin_save(&mut slot)),
                None => {
                    self.status.send_modify(|status| status.pending = false);
                    return;
                }
            }
        };

        let result = self.sink.persist(snapshot).await;
        save.finish(&result);
    }

    fn begin_save(&self, slot: &mut Slot<S>) -> InFlight<'_, S> {
        slot.in_flight += 1;
        let pending = slot.timer.is_some();
        self.status.send_modify(|status| {
            status.pending = pending;
            status.saving = true;
        });
        InFlight {
            shared: self,
            finished: false,
        }
    }

    fn finish_save(&self, result: &Result<()>) {
        let mut slot = self.lock_slot();
        slot.in_flight = slot.in_flight.saturating_sub(1);
        let in_flight = slot.in_flight;
        let pending = slot.timer.is_some();

        match result {
            Ok(()) => info!("Saved changes"),
            Err(e) => warn!("Saving changes failed: {e}"),
        }

        self.status.send_modify(|status| {
            status.pending = pending;
            status.saving = in_flight > 0;
            match result {
                Ok(()) => {
                    status.saves_completed += 1;
                    status.last_error = None;
                }
                Err(e) => {
                    status.saves_failed += 1;
                    status.last_error = Some(e.to_string());
                }
            }
        });
    }
}

/// One write in flight. Dropping it unfinished (the persisting future was
/// cancelled) still settles the status, recording the write as failed.
struct InFlight<'a, S> {
    shared: &'a Shared<S>,
    finished: bool,
}

impl<S> InFlight<'_, S> {
    fn finish(mut self, result: &Result<()>) {
        self.finished = true;
        self.shared.finish_save(result);
    }
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.finished {
            let cancelled = StrideError::persistence("save changes")
                .with_cause("cancelled before the service answered");
            self.shared.finish_save(&Err(cancelled));
        }
    }
}

impl<S> Drop for DebouncedSync<S> {
    fn drop(&mut self) {
        let mut slot = self.shared.lock_slot();
        if let Some(timer) = slot.timer.take() {
            debug!("Cancelling armed save timer");
            timer.abort();
        }
        slot.generation += 1;
    }
}
