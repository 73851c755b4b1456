//! Save outcome reporting for the autosave coordinator.
//!
//! Outcomes are mirrored onto a broadcast channel so the editing session
//! (status indicator, log task, tests) can observe them without being
//! wired into the coordinator loop. Skipped ticks are not reported; only
//! dispatched saves produce events.

use crate::autosave::types::SyncTarget;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Outcome of one dispatched save.
#[derive(Debug, Clone)]
pub enum AutosaveEvent {
    /// The backend accepted the snapshot.
    Saved {
        target: SyncTarget,
        elapsed: Duration,
    },
    /// The backend reported a failure; the next tick retries with fresh
    /// data, so nothing else needs to act on this.
    SaveFailed { target: SyncTarget, error: String },
}

/// Fan-out sender for autosave events.
#[derive(Clone)]
pub struct AutosaveBroadcaster {
    sender: Arc<broadcast::Sender<AutosaveEvent>>,
}

impl AutosaveBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Get a receiver for autosave events
    pub fn subscribe(&self) -> broadcast::Receiver<AutosaveEvent> {
        self.sender.subscribe()
    }

    /// Notify all subscribers of a save outcome
    pub fn notify(&self, event: AutosaveEvent) {
        // Ignore errors when there are no active subscribers
        let _ = self.sender.send(event);
    }
}

impl Default for AutosaveBroadcaster {
    fn default() -> Self {
        Self::new(64)
    }
}
