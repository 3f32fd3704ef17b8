//! Snapshot error types.

use boxwood_core::LayoutError;
use thiserror::Error;

/// Errors while producing or verifying snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot '{name}' does not match its golden file")]
    Mismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("No golden file for snapshot '{name}'")]
    MissingGolden { name: String },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
