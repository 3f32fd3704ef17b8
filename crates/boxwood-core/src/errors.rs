//! Error types for the Boxwood engine.

use crate::types::Axis;
use thiserror::Error;

/// Top-level error type for the Boxwood engine.
#[derive(Debug, Error)]
pub enum BoxwoodError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors constructing geometry values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Length must not be negative, got {value}")]
    NegativeLength { value: f64 },

    #[error("Length must be finite, got {value}")]
    NonFiniteLength { value: f64 },

    #[error("Density must be a positive finite number, got {value}")]
    InvalidDensity { value: f64 },

    #[error("Invalid color format: {value}")]
    InvalidColor { value: String },
}

/// Errors raised by the caller-side preconditions of a layout pass.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("{axis} sizing is Fill but no available size was supplied")]
    MissingAvailableSize { axis: Axis },

    #[error("Unknown layout node: {id}")]
    UnknownNode { id: u64 },

    #[error("Layout node {id} is already in the tree")]
    DuplicateNode { id: u64 },

    #[error("Node {id} is a leaf and cannot hold children")]
    NotAContainer { id: u64 },

    #[error("Child index {index} out of range for node {id} with {len} children")]
    ChildIndexOutOfRange { id: u64, index: usize, len: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
