//! Core value types for the Boxwood layout engine.
//!
//! This crate provides the foundational types used across all other boxwood crates:
//! - Lengths, sizes, points and rectangles in device-independent units
//! - Logical (start/end) margins and their physical resolution
//! - Colors used by snapshot renderers
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
