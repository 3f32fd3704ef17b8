//! JSON encoding of snapshots.

use crate::error::SnapshotError;
use crate::snapshot::LayoutSnapshot;

/// Serialize a snapshot as pretty-printed JSON.
pub fn to_json(snapshot: &LayoutSnapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse a snapshot previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<LayoutSnapshot, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
