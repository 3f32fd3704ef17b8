//! Snapshot capture and verification for Boxwood layouts.
//!
//! The layout crates only produce plain geometry. This crate turns that
//! geometry into comparable artifacts:
//! - a deterministic text dump for golden files and inline snapshots
//! - JSON for tooling
//! - SVG, as the stand-in for a pixel renderer
//!
//! It also ships two reference platform backends so the same Box scenarios
//! can be run against each of them and compared.

pub mod backends;
pub mod error;
pub mod golden;
pub mod json;
pub mod snapshot;
pub mod svg;
pub mod text;

pub use backends::{FrameRecorder, PaintedChild, SnapshotBackend, SvgCanvas};
pub use error::SnapshotError;
pub use golden::{GoldenStore, SnapshotOptions};
pub use json::{from_json, to_json};
pub use snapshot::{EntryKind, LayoutSnapshot, SnapshotEntry};
pub use svg::to_svg;
pub use text::to_text;
