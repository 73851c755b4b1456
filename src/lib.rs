//! Client-side layer for LedgerNote, an IPSAS financial statement note
//! preparation tool.
//!
//! The heart of the crate is the [`autosave`] coordinator: a per-session
//! timer task that captures the current draft and pushes it to the
//! server, never overlapping saves and never dying on a failed one.
//! Around it sit the pieces the entry client needs: the HTTP [`client`]
//! for the save endpoint, [`movements`] arithmetic for the PPE
//! roll-forward note, field [`validate`] checks, and display [`format`]
//! helpers for the statement templates.

pub mod autosave;
pub mod cli;
pub mod client;
pub mod draft;
pub mod error;
pub mod format;
pub mod movements;
pub mod validate;

pub use autosave::{
    shared_target, spawn_autosave, AutosaveBroadcaster, AutosaveConfig, AutosaveEvent,
    AutosaveHandle, FormSnapshot, NoteBackend, SharedTarget, SyncTarget,
    DEFAULT_AUTOSAVE_INTERVAL,
};
pub use client::NoteApiClient;
pub use error::{SaveError, SaveResult};
