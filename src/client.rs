//! HTTP client for the note-save endpoint.
//!
//! The server side is the existing LedgerNote backend; this module speaks
//! only its save operation: one POST per snapshot, JSON in, the stored
//! revision back.

use crate::autosave::{FormSnapshot, NoteBackend, SyncTarget};
use crate::error::{SaveError, SaveResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for the save endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveNoteRequest {
    pub note_data: FormSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Response from a successful save.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveNoteResponse {
    pub revision: u64,
}

/// URL-encode one path segment. Entity and period ids are usually short
/// codes that need no encoding, but note ids can hold anything.
fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Build the save URL for a target.
pub fn build_save_url(server: &str, target: &SyncTarget) -> String {
    format!(
        "{}/entities/{}/periods/{}/notes/{}",
        server.trim_end_matches('/'),
        encode_id(&target.entity_id),
        encode_id(&target.period_id),
        encode_id(&target.note_id),
    )
}

/// Client for the LedgerNote save API.
#[derive(Debug, Clone)]
pub struct NoteApiClient {
    client: Client,
    server: String,
    author: Option<String>,
}

impl NoteApiClient {
    /// Client for the server at `server` (scheme, host, port; no trailing
    /// path).
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            server: server.into(),
            author: None,
        }
    }

    /// Record `author` with every save.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl NoteBackend for NoteApiClient {
    async fn save_note(&self, target: &SyncTarget, snapshot: FormSnapshot) -> SaveResult<()> {
        let url = build_save_url(&self.server, target);
        let request = SaveNoteRequest {
            note_data: snapshot,
            author: self.author.clone(),
        };

        let resp = self.client.post(&url).json(&request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SaveError::rejected(status, body));
        }

        let saved: SaveNoteResponse = resp.json().await?;
        debug!("Saved {} at revision {}", target, saved.revision);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_save_url() {
        let target = SyncTarget::new("E1", "FY2025", "ppe");
        assert_eq!(
            build_save_url("http://localhost:3000", &target),
            "http://localhost:3000/entities/E1/periods/FY2025/notes/ppe"
        );
    }

    #[test]
    fn test_build_save_url_trims_trailing_slash() {
        let target = SyncTarget::new("E1", "FY2025", "ppe");
        assert_eq!(
            build_save_url("http://localhost:3000/", &target),
            "http://localhost:3000/entities/E1/periods/FY2025/notes/ppe"
        );
    }

    #[test]
    fn test_build_save_url_encodes_ids() {
        let target = SyncTarget::new("E 1", "FY 2025", "ppe/land");
        assert_eq!(
            build_save_url("http://localhost:3000", &target),
            "http://localhost:3000/entities/E%201/periods/FY%202025/notes/ppe%2Fland"
        );
    }

    #[test]
    fn test_save_request_omits_missing_author() {
        let mut snapshot = FormSnapshot::new();
        snapshot.insert("opening".to_string(), json!(1000));
        let request = SaveNoteRequest {
            note_data: snapshot,
            author: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["note_data"]["opening"], json!(1000));
        assert!(value.get("author").is_none());
    }
}
