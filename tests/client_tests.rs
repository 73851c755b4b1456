//! HTTP backend tests against an in-process stand-in for the LedgerNote
//! save endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use ledgernote::autosave::{FormSnapshot, NoteBackend, SyncTarget};
use ledgernote::client::NoteApiClient;
use ledgernote::error::SaveError;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Requests seen by the stand-in server: (entity/period/note, body).
type Received = Arc<Mutex<Vec<(String, Value)>>>;

async fn start_test_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    addr
}

fn recording_app(received: Received, revision: u64) -> Router {
    Router::new()
        .route(
            "/entities/:entity/periods/:period/notes/:note",
            post(
                move |Path((entity, period, note)): Path<(String, String, String)>,
                      State(received): State<Received>,
                      Json(body): Json<Value>| async move {
                    received
                        .lock()
                        .unwrap()
                        .push((format!("{}/{}/{}", entity, period, note), body));
                    Json(json!({ "revision": revision }))
                },
            ),
        )
        .with_state(received)
}

fn sample_snapshot() -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    snapshot.insert("opening".to_string(), json!(1000));
    snapshot.insert("additions".to_string(), json!("250.5"));
    snapshot
}

#[tokio::test]
async fn save_posts_snapshot_to_the_note_url() {
    let received: Received = Arc::default();
    let addr = start_test_server(recording_app(received.clone(), 7)).await;

    let client = NoteApiClient::new(format!("http://{}", addr)).with_author("preparer");
    let target = SyncTarget::new("E1", "FY2025", "ppe");
    client
        .save_note(&target, sample_snapshot())
        .await
        .expect("save should succeed");

    let requests = received.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (path, body) = &requests[0];
    assert_eq!(path, "E1/FY2025/ppe");
    assert_eq!(body["note_data"]["opening"], json!(1000));
    assert_eq!(body["note_data"]["additions"], json!("250.5"));
    assert_eq!(body["author"], json!("preparer"));
}

#[tokio::test]
async fn save_without_author_omits_the_field() {
    let received: Received = Arc::default();
    let addr = start_test_server(recording_app(received.clone(), 1)).await;

    let client = NoteApiClient::new(format!("http://{}", addr));
    let target = SyncTarget::new("E1", "FY2025", "ppe");
    client
        .save_note(&target, sample_snapshot())
        .await
        .expect("save should succeed");

    let requests = received.lock().unwrap();
    assert!(requests[0].1.get("author").is_none());
}

#[tokio::test]
async fn rejection_carries_status_and_body() {
    let app = Router::new().route(
        "/entities/:entity/periods/:period/notes/:note",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "period is locked") }),
    );
    let addr = start_test_server(app).await;

    let client = NoteApiClient::new(format!("http://{}", addr));
    let target = SyncTarget::new("E1", "FY2025", "ppe");
    let err = client
        .save_note(&target, sample_snapshot())
        .await
        .expect_err("save should be rejected");

    match err {
        SaveError::Rejected { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("period is locked"));
        }
        other => panic!("expected Rejected, got {}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_an_http_error() {
    let app = Router::new().route(
        "/entities/:entity/periods/:period/notes/:note",
        post(|| async { "ok" }),
    );
    let addr = start_test_server(app).await;

    let client = NoteApiClient::new(format!("http://{}", addr));
    let target = SyncTarget::new("E1", "FY2025", "ppe");
    let err = client
        .save_note(&target, sample_snapshot())
        .await
        .expect_err("response body should not parse");

    assert!(matches!(err, SaveError::Http(_)));
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    // Bind and drop a listener so the port is very likely unused.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let client = NoteApiClient::new(format!("http://{}", addr));
    let target = SyncTarget::new("E1", "FY2025", "ppe");
    let err = client
        .save_note(&target, sample_snapshot())
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, SaveError::Http(_)));
}
