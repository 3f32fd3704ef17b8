//! Reference platform backends.
//!
//! Two differently shaped hosts for the same Box: one that keeps a retained
//! list of frames like a scene graph, and one that emits markup elements
//! like a DOM. Both only measure and place; neither computes geometry.

use boxwood_core::{Color, Point, Rect, Size};
use boxwood_layout::{BoxLayoutResult, ChildBox, LayoutBackend};

/// A child widget with the paint it renders with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedChild {
    pub child: ChildBox,
    pub color: Color,
}

impl PaintedChild {
    pub fn new(child: ChildBox, color: Color) -> Self {
        Self { child, color }
    }
}

/// A backend whose placements can be read back for comparison.
pub trait SnapshotBackend: LayoutBackend {
    /// Create a backend hosting `children` in paint order.
    fn with_children(children: Vec<PaintedChild>) -> Self
    where
        Self: Sized;

    /// Container size from the last layout pass, if any.
    fn container_size(&self) -> Option<Size>;

    /// Child frames from the last layout pass, in paint order.
    fn placed_frames(&self) -> Vec<Rect>;
}

/// Retained scene-graph style backend: stores one frame per child.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    children: Vec<PaintedChild>,
    container: Option<Size>,
    frames: Vec<Rect>,
}

impl FrameRecorder {
    pub fn colors(&self) -> Vec<Color> {
        self.children.iter().map(|painted| painted.color).collect()
    }
}

impl LayoutBackend for FrameRecorder {
    fn measure_children(&self) -> Vec<ChildBox> {
        self.children.iter().map(|painted| painted.child).collect()
    }

    fn place_children(&mut self, result: &BoxLayoutResult, children: &[ChildBox]) {
        self.container = Some(result.container_size);
        self.frames = result.child_frames(children);
    }
}

impl SnapshotBackend for FrameRecorder {
    fn with_children(children: Vec<PaintedChild>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    fn container_size(&self) -> Option<Size> {
        self.container
    }

    fn placed_frames(&self) -> Vec<Rect> {
        self.frames.clone()
    }
}

/// One absolutely positioned element on an [`SvgCanvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasElement {
    pub left: f64,
    pub top: f64,
    pub size: Size,
    pub color: Color,
}

impl CanvasElement {
    fn to_markup(self) -> String {
        format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" />",
            self.left,
            self.top,
            self.size.width.value(),
            self.size.height.value(),
            self.color.to_hex()
        )
    }
}

/// DOM style backend: every child becomes a positioned element.
#[derive(Debug, Clone, Default)]
pub struct SvgCanvas {
    children: Vec<PaintedChild>,
    container: Option<Size>,
    elements: Vec<CanvasElement>,
}

impl SvgCanvas {
    pub fn elements(&self) -> &[CanvasElement] {
        &self.elements
    }

    /// The canvas as a standalone SVG document.
    pub fn document(&self) -> String {
        let size = self.container.unwrap_or(Size::ZERO);
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            size.width.value(),
            size.height.value()
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(&element.to_markup());
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl LayoutBackend for SvgCanvas {
    fn measure_children(&self) -> Vec<ChildBox> {
        self.children.iter().map(|painted| painted.child).collect()
    }

    fn place_children(&mut self, result: &BoxLayoutResult, children: &[ChildBox]) {
        self.container = Some(result.container_size);
        self.elements = result
            .child_offsets
            .iter()
            .zip(children)
            .zip(&self.children)
            .map(|((offset, child), painted)| CanvasElement {
                left: offset.x,
                top: offset.y,
                size: child.intrinsic_size,
                color: painted.color,
            })
            .collect();
    }
}

impl SnapshotBackend for SvgCanvas {
    fn with_children(children: Vec<PaintedChild>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    fn container_size(&self) -> Option<Size> {
        self.container
    }

    fn placed_frames(&self) -> Vec<Rect> {
        self.elements
            .iter()
            .map(|element| Rect::new(Point::new(element.left, element.top), element.size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxwood_layout::{layout_with, Alignment, BoxLayoutRequest, SizingMode};

    fn painted() -> Vec<PaintedChild> {
        vec![
            PaintedChild::new(ChildBox::new(Size::from_ints(300, 300)), Color::RED),
            PaintedChild::new(ChildBox::new(Size::from_ints(100, 100)), Color::BLUE),
        ]
    }

    #[test]
    fn test_canvas_document() {
        let mut canvas = SvgCanvas::with_children(painted());
        let request = BoxLayoutRequest::default()
            .with_constraint(SizingMode::Fill)
            .with_alignment(Alignment::Center, Alignment::Center)
            .with_available_size(Size::from_ints(400, 400));
        layout_with(&mut canvas, request).unwrap();

        assert_eq!(
            canvas.document(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"400\">\n\
             \x20 <rect x=\"50\" y=\"50\" width=\"300\" height=\"300\" fill=\"#ff0000\" />\n\
             \x20 <rect x=\"150\" y=\"150\" width=\"100\" height=\"100\" fill=\"#0000ff\" />\n\
             </svg>\n"
        );
    }

    #[test]
    fn test_recorder_before_layout_is_empty() {
        let recorder = FrameRecorder::with_children(painted());
        assert_eq!(recorder.container_size(), None);
        assert!(recorder.placed_frames().is_empty());
        assert_eq!(recorder.colors(), vec![Color::RED, Color::BLUE]);
    }
}
