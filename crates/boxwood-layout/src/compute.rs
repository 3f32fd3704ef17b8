//! The Box layout pass.

use boxwood_core::{Axis, Dp, LayoutError, Point, Size};
use tracing::{debug, trace};

use crate::request::{BoxLayoutRequest, BoxLayoutResult, ChildBox, SizingMode};

/// Compute the container size and child offsets of one Box.
///
/// Each axis is solved on its own: the container extent comes from the
/// sizing mode, then every child is aligned inside it using its
/// margin-inflated footprint. Children never influence one another.
///
/// The only error is a `Fill` axis without an available size, which is a
/// caller precondition rather than a layout failure. Undersized containers
/// are not errors: the offending children get negative offsets or overflow.
pub fn compute_box_layout(request: &BoxLayoutRequest) -> Result<BoxLayoutResult, LayoutError> {
    let (width, xs) = layout_axis(request, Axis::Horizontal)?;
    let (height, ys) = layout_axis(request, Axis::Vertical)?;

    let child_offsets: Vec<Point> = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect();

    for (index, offset) in child_offsets.iter().enumerate() {
        trace!(index, x = offset.x, y = offset.y, "Placed box child");
    }

    let container_size = Size::new(width, height);
    debug!(
        "Box layout {:?}x{:?} {:?}/{:?}: {} children -> {}",
        request.width_mode,
        request.height_mode,
        request.horizontal_alignment,
        request.vertical_alignment,
        request.children.len(),
        container_size,
    );

    Ok(BoxLayoutResult {
        container_size,
        container_margin: request.container_margin,
        child_offsets,
    })
}

/// Solve one axis: the container extent and every child's offset on it.
fn layout_axis(request: &BoxLayoutRequest, axis: Axis) -> Result<(Dp, Vec<f64>), LayoutError> {
    let extent = match (request.sizing(axis), request.available_extent(axis)?) {
        (SizingMode::Fill, Some(available)) => available,
        _ => wrap_extent(&request.children, axis),
    };

    let alignment = request.alignment(axis);
    let offsets = request
        .children
        .iter()
        .map(|child| {
            let leftover = extent.signed_sub(child.footprint_on(axis));
            child.margin.leading(axis).value() + alignment.leading_share(leftover)
        })
        .collect();

    Ok((extent, offsets))
}

/// The largest margin-inflated child footprint along `axis`, or zero.
fn wrap_extent(children: &[ChildBox], axis: Axis) -> Dp {
    children
        .iter()
        .map(|child| child.footprint_on(axis))
        .fold(Dp::ZERO, Dp::max)
}
