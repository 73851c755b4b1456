//! Periodic draft autosave for note editing sessions.
//!
//! One coordinator runs per session: every tick captures the current form
//! state and submits it for the note being edited. Overlapping saves are
//! suppressed by dropping the tick, failures are reported and survived,
//! and stopping the session drains whatever save is still in flight.

pub mod coordinator;
pub mod events;
pub mod types;

pub use coordinator::{
    spawn_autosave, AutosaveConfig, AutosaveHandle, DEFAULT_AUTOSAVE_INTERVAL,
};
pub use events::{AutosaveBroadcaster, AutosaveEvent};
pub use types::{shared_target, FormSnapshot, NoteBackend, SharedTarget, SyncTarget};
