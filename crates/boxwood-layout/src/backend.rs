//! Platform adapter seam around the pure Box layout.
//!
//! Each rendering platform owns its own child widgets. It only has to say
//! how big they are and where to put them; the geometry itself is computed
//! once, here, so every platform lands on the same numbers.

use boxwood_core::LayoutError;

use crate::compute::compute_box_layout;
use crate::request::{BoxLayoutRequest, BoxLayoutResult, ChildBox};

/// A platform's view of one Box and its children.
pub trait LayoutBackend {
    /// Report the already-measured children, in paint order.
    fn measure_children(&self) -> Vec<ChildBox>;

    /// Apply a computed layout to the platform children.
    ///
    /// `children` is the list returned by `measure_children` for this pass.
    fn place_children(&mut self, result: &BoxLayoutResult, children: &[ChildBox]);
}

/// Run one layout pass through a backend.
///
/// Any children already present on `request` are replaced by the backend's
/// measurements. The backend is not called while the geometry is computed.
pub fn layout_with<B>(backend: &mut B, mut request: BoxLayoutRequest) -> Result<BoxLayoutResult, LayoutError>
where
    B: LayoutBackend + ?Sized,
{
    request.children = backend.measure_children();
    let result = compute_box_layout(&request)?;
    backend.place_children(&result, &request.children);
    Ok(result)
}
