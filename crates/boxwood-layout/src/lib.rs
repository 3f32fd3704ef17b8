//! Box layout computation for Boxwood widget trees.
//!
//! A Box stacks its children on top of each other: every child is sized and
//! aligned against the container independently, and children never affect
//! each other's position.
//!
//! # Architecture
//!
//! 1. **Request model**: sizing mode and alignment per axis, margins, and the
//!    already-measured children of one Box
//! 2. **Box layout**: a pure function from request to container size and
//!    child offsets
//! 3. **Backends**: platform adapters that measure and place children around
//!    the pure computation
//! 4. **Tree**: a host-side widget tree that walks bottom-up, invoking the
//!    Box layout once per container
//!
//! # Example
//!
//! ```
//! use boxwood_core::{Margin, Point, Size};
//! use boxwood_layout::{compute_box_layout, BoxLayoutRequest, ChildBox, SizingMode};
//!
//! let request = BoxLayoutRequest::default()
//!     .with_constraint(SizingMode::Wrap)
//!     .with_child(ChildBox::new(Size::from_ints(100, 100)).with_margin(Margin::from_ints(10, 20, 30, 40)));
//!
//! let result = compute_box_layout(&request).unwrap();
//! assert_eq!(result.container_size, Size::from_ints(140, 160));
//! assert_eq!(result.child_offsets, vec![Point::new(10.0, 20.0)]);
//! ```

mod backend;
mod compute;
mod request;
mod tree;

pub use backend::{layout_with, LayoutBackend};
pub use compute::compute_box_layout;
pub use request::{Alignment, BoxLayoutRequest, BoxLayoutResult, BoxStyle, ChildBox, SizingMode};
pub use tree::{BoxTree, LayoutNode, LayoutOptions, LeafStyle, NodeId, NodeKind};
