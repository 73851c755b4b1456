//! Movement schedule arithmetic for property, plant and equipment.
//!
//! The roll-forward note reconciles the opening balance to the closing
//! balance through the period's movements:
//!
//! ```text
//! closing = opening + additions - disposals + revaluations
//! ```

use crate::autosave::FormSnapshot;
use serde::{Deserialize, Serialize};

/// One period's PPE movement figures, in presentation currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PpeMovement {
    #[serde(default)]
    pub opening: f64,
    #[serde(default)]
    pub additions: f64,
    #[serde(default)]
    pub disposals: f64,
    #[serde(default)]
    pub revaluations: f64,
}

impl PpeMovement {
    /// Closing balance implied by the movements. Disposals reduce the
    /// balance; everything else increases it.
    pub fn closing(&self) -> f64 {
        self.opening + self.additions - self.disposals + self.revaluations
    }

    /// Read the movement fields out of a captured form snapshot.
    ///
    /// Form fields arrive as strings or numbers depending on how the entry
    /// page serialized them. Anything missing or non-numeric counts as
    /// zero rather than failing the whole schedule; a half-filled row
    /// still needs a running closing balance.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            opening: numeric_field(snapshot, "opening"),
            additions: numeric_field(snapshot, "additions"),
            disposals: numeric_field(snapshot, "disposals"),
            revaluations: numeric_field(snapshot, "revaluations"),
        }
    }
}

fn numeric_field(snapshot: &FormSnapshot, key: &str) -> f64 {
    match snapshot.get(key) {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
