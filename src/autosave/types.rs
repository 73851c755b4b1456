//! Core types shared by the autosave coordinator and its backends.

use crate::error::SaveResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identifies the note a save is addressed to: which reporting entity,
/// which period, and which note within the statement. The ids are opaque
/// tokens; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncTarget {
    pub entity_id: String,
    pub period_id: String,
    pub note_id: String,
}

impl SyncTarget {
    pub fn new(
        entity_id: impl Into<String>,
        period_id: impl Into<String>,
        note_id: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            period_id: period_id.into(),
            note_id: note_id.into(),
        }
    }
}

impl fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.entity_id, self.period_id, self.note_id)
    }
}

/// The form state captured at tick time. Opaque to the coordinator:
/// whatever fields the note entry form currently holds.
pub type FormSnapshot = serde_json::Map<String, serde_json::Value>;

/// The note currently being edited, shared between the editing session
/// (which sets and clears it) and the coordinator (which reads it at tick
/// time). `None` means no note is open, so ticks have nowhere to save to.
pub type SharedTarget = Arc<RwLock<Option<SyncTarget>>>;

/// Create a fresh `SharedTarget`, optionally pointing at an initial note.
pub fn shared_target(initial: Option<SyncTarget>) -> SharedTarget {
    Arc::new(RwLock::new(initial))
}

/// Abstraction over the remote save operation.
///
/// The coordinator dispatches at most one `save_note` at a time. Latency
/// is expected to be small relative to the tick interval, but nothing
/// breaks when it is not: ticks that land during a slow save are dropped.
pub trait NoteBackend: Send + Sync {
    /// Submit one snapshot for one note. A clean return means the server
    /// accepted it; any error is reported and retried on the next tick.
    fn save_note(
        &self,
        target: &SyncTarget,
        snapshot: FormSnapshot,
    ) -> impl std::future::Future<Output = SaveResult<()>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_target_display() {
        let target = SyncTarget::new("E1", "FY2025", "ppe");
        assert_eq!(target.to_string(), "E1/FY2025/ppe");
    }

    #[test]
    fn test_sync_target_serialization() {
        let target = SyncTarget::new("E1", "FY2025", "ppe");
        let json = serde_json::to_string(&target).unwrap();
        let back: SyncTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);
    }

    #[tokio::test]
    async fn test_shared_target_starts_empty() {
        let shared = shared_target(None);
        assert!(shared.read().await.is_none());
    }
}
