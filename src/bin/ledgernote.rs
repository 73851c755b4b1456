//! LedgerNote autosave client.
//!
//! Opens an editing session for one note and auto-saves the local draft
//! file to the server on a fixed interval until interrupted.

use clap::Parser;
use ledgernote::autosave::{
    shared_target, spawn_autosave, AutosaveBroadcaster, AutosaveConfig, AutosaveEvent, SyncTarget,
};
use ledgernote::cli::Args;
use ledgernote::client::NoteApiClient;
use ledgernote::draft::DraftFile;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    if args.interval_secs == 0 {
        error!("--interval-secs must be positive");
        return ExitCode::from(1);
    }

    let draft = DraftFile::new(&args.draft);
    if !draft.path().exists() {
        warn!(
            "Draft {} does not exist yet; saves will be empty until it appears",
            draft.path().display()
        );
    }

    let author = args
        .author
        .clone()
        .unwrap_or_else(|| format!("ledgernote-{}", uuid::Uuid::new_v4()));
    let backend = Arc::new(NoteApiClient::new(&args.server).with_author(author));

    let target = SyncTarget::new(&args.entity, &args.period, &args.note);
    info!("Editing session for {} against {}", target, args.server);
    let current = shared_target(Some(target));

    let events = AutosaveBroadcaster::default();
    let mut event_rx = events.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            match event {
                AutosaveEvent::Saved { target, elapsed } => {
                    info!("Auto-saved {} ({:?})", target, elapsed);
                }
                AutosaveEvent::SaveFailed { target, error } => {
                    warn!("Auto-save of {} failed: {}", target, error);
                }
            }
        }
    });

    let handle = spawn_autosave(
        AutosaveConfig::every(Duration::from_secs(args.interval_secs)),
        current,
        move || draft.read_snapshot(),
        backend,
        events,
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        handle.stop();
        handle.join().await;
        return ExitCode::from(1);
    }
    info!("Shutting down...");

    handle.stop();
    handle.join().await;

    info!("Goodbye!");
    ExitCode::SUCCESS
}
