//! Layout request and result types for a single Box.

use boxwood_core::{Axis, Dp, LayoutError, Margin, Point, Rect, Size};

/// How a container sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizingMode {
    /// Shrink to the largest margin-inflated child
    #[default]
    Wrap,
    /// Take all the space offered by the parent
    Fill,
}

/// Where a child sits inside the container along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Align to start (start edge horizontally, top vertically)
    #[default]
    Start,
    /// Split leftover space evenly on both sides
    Center,
    /// Align to end (end edge horizontally, bottom vertically)
    End,
}

impl Alignment {
    /// Portion of the leftover space placed before the child.
    ///
    /// `leftover` is negative when the child overflows the container.
    pub fn leading_share(self, leftover: f64) -> f64 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => leftover / 2.0,
            Alignment::End => leftover,
        }
    }
}

/// A measured child of a Box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildBox {
    /// The child's own layout size, supplied by the host
    pub intrinsic_size: Size,
    /// Space reserved around the child
    pub margin: Margin,
}

impl ChildBox {
    pub fn new(intrinsic_size: Size) -> Self {
        Self {
            intrinsic_size,
            margin: Margin::ZERO,
        }
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Size including margins.
    pub fn footprint(&self) -> Size {
        self.intrinsic_size.inflate(self.margin)
    }

    /// Size including margins along one axis.
    pub fn footprint_on(&self, axis: Axis) -> Dp {
        self.intrinsic_size.get(axis) + self.margin.leading(axis) + self.margin.trailing(axis)
    }
}

/// Container configuration of a Box, independent of its children.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxStyle {
    pub width: SizingMode,
    pub height: SizingMode,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
    /// Reported to the parent; does not shift the inner coordinate system
    pub margin: Margin,
}

impl BoxStyle {
    pub fn sizing(&self, axis: Axis) -> SizingMode {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn alignment(&self, axis: Axis) -> Alignment {
        match axis {
            Axis::Horizontal => self.horizontal_alignment,
            Axis::Vertical => self.vertical_alignment,
        }
    }
}

/// Everything needed to lay out one Box.
///
/// Built fresh for every layout pass and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxLayoutRequest {
    pub width_mode: SizingMode,
    pub height_mode: SizingMode,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
    pub container_margin: Margin,
    /// Children in paint order; later children draw on top
    pub children: Vec<ChildBox>,
    /// Space offered by the parent. Required when either axis is `Fill`.
    pub available_size: Option<Size>,
}

impl BoxLayoutRequest {
    /// Create a request from a container style.
    pub fn from_style(style: BoxStyle, children: Vec<ChildBox>, available_size: Option<Size>) -> Self {
        Self {
            width_mode: style.width,
            height_mode: style.height,
            horizontal_alignment: style.horizontal_alignment,
            vertical_alignment: style.vertical_alignment,
            container_margin: style.margin,
            children,
            available_size,
        }
    }

    /// The container configuration of this request.
    pub fn style(&self) -> BoxStyle {
        BoxStyle {
            width: self.width_mode,
            height: self.height_mode,
            horizontal_alignment: self.horizontal_alignment,
            vertical_alignment: self.vertical_alignment,
            margin: self.container_margin,
        }
    }

    pub fn with_width(mut self, mode: SizingMode) -> Self {
        self.width_mode = mode;
        self
    }

    pub fn with_height(mut self, mode: SizingMode) -> Self {
        self.height_mode = mode;
        self
    }

    /// Set the sizing mode of both axes.
    pub fn with_constraint(self, mode: SizingMode) -> Self {
        self.with_width(mode).with_height(mode)
    }

    pub fn with_horizontal_alignment(mut self, alignment: Alignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: Alignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Set the alignment of both axes.
    pub fn with_alignment(self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.with_horizontal_alignment(horizontal)
            .with_vertical_alignment(vertical)
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.container_margin = margin;
        self
    }

    pub fn with_child(mut self, child: ChildBox) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ChildBox>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_available_size(mut self, size: Size) -> Self {
        self.available_size = Some(size);
        self
    }

    /// The sizing mode along `axis`.
    pub fn sizing(&self, axis: Axis) -> SizingMode {
        match axis {
            Axis::Horizontal => self.width_mode,
            Axis::Vertical => self.height_mode,
        }
    }

    /// The alignment along `axis`.
    pub fn alignment(&self, axis: Axis) -> Alignment {
        match axis {
            Axis::Horizontal => self.horizontal_alignment,
            Axis::Vertical => self.vertical_alignment,
        }
    }

    /// Check the caller-side precondition: every `Fill` axis needs an
    /// available size.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for axis in Axis::ALL {
            self.available_extent(axis)?;
        }
        Ok(())
    }

    /// The available extent along `axis`, if the axis needs one.
    pub(crate) fn available_extent(&self, axis: Axis) -> Result<Option<Dp>, LayoutError> {
        match self.sizing(axis) {
            SizingMode::Wrap => Ok(None),
            SizingMode::Fill => self
                .available_size
                .map(|size| Some(size.get(axis)))
                .ok_or(LayoutError::MissingAvailableSize { axis }),
        }
    }
}

/// Geometry produced by one Box layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxLayoutResult {
    /// Size of the container's content box
    pub container_size: Size,
    /// The container's own margin, for the parent to reserve around it
    pub container_margin: Margin,
    /// One offset per child, in request order, relative to the content origin
    pub child_offsets: Vec<Point>,
}

impl BoxLayoutResult {
    /// The footprint the parent reserves for this Box.
    pub fn outer_size(&self) -> Size {
        self.container_size.inflate(self.container_margin)
    }

    /// Pair each offset with its child's intrinsic size.
    pub fn child_frames(&self, children: &[ChildBox]) -> Vec<Rect> {
        self.child_offsets
            .iter()
            .zip(children)
            .map(|(offset, child)| Rect::new(*offset, child.intrinsic_size))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.child_offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.child_offsets.is_empty()
    }
}
