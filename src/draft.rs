//! Local draft capture for the autosave binary.
//!
//! The entry form proper lives in the web client; on the command line the
//! draft is a JSON object in a file. Reading it stands in for form
//! capture: whatever the file holds at tick time is what gets saved.

use crate::autosave::FormSnapshot;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A draft note on disk: one JSON object of form fields.
#[derive(Debug, Clone)]
pub struct DraftFile {
    path: PathBuf,
}

impl DraftFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot the draft's current fields.
    ///
    /// Capture must never fail, so an unreadable or malformed draft logs a
    /// warning and produces an empty snapshot instead of an error.
    pub fn read_snapshot(&self) -> FormSnapshot {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read draft {}: {}", self.path.display(), e);
                return FormSnapshot::new();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(fields)) => fields,
            Ok(other) => {
                warn!(
                    "Draft {} is not a JSON object (found {}), capturing nothing",
                    self.path.display(),
                    json_type_name(&other),
                );
                FormSnapshot::new()
            }
            Err(e) => {
                warn!("Draft {} is not valid JSON: {}", self.path.display(), e);
                FormSnapshot::new()
            }
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
