//! Flat, serializable capture of a computed layout.

use boxwood_core::{Color, LayoutDirection, Margin, Point, Rect, Size};
use boxwood_layout::{BoxLayoutRequest, BoxLayoutResult, BoxTree, LayoutOptions, NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// Whether an entry is a Box or a leaf widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Box,
    Leaf,
}

/// One node of a captured layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Nesting depth; roots are 0
    pub depth: usize,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absolute physical frame
    pub frame: Rect,
    pub margin: Margin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A captured layout, in pre-order (parents before their children).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Size,
    pub direction: LayoutDirection,
    pub entries: Vec<SnapshotEntry>,
}

impl LayoutSnapshot {
    /// Capture a tree after [`BoxTree::compute`] has run.
    pub fn capture(tree: &BoxTree, options: &LayoutOptions) -> Self {
        let mut entries = Vec::with_capacity(tree.len());
        for &root_id in tree.roots() {
            capture_node(tree, root_id, 0, &mut entries);
        }
        Self {
            viewport: options.viewport,
            direction: options.direction,
            entries,
        }
    }

    /// Capture a single Box layout, with the container at the origin.
    ///
    /// `colors` paints children by index; children past its end stay unpainted.
    pub fn from_box(request: &BoxLayoutRequest, result: &BoxLayoutResult, colors: &[Color]) -> Self {
        let mut entries = Vec::with_capacity(result.len() + 1);
        entries.push(SnapshotEntry {
            depth: 0,
            kind: EntryKind::Box,
            name: None,
            frame: Rect::new(Point::ORIGIN, result.container_size),
            margin: result.container_margin,
            color: None,
        });
        for (index, (frame, child)) in result
            .child_frames(&request.children)
            .into_iter()
            .zip(&request.children)
            .enumerate()
        {
            entries.push(SnapshotEntry {
                depth: 1,
                kind: EntryKind::Leaf,
                name: None,
                frame,
                margin: child.margin,
                color: colors.get(index).copied(),
            });
        }
        Self {
            viewport: result.container_size,
            direction: LayoutDirection::Ltr,
            entries,
        }
    }

    /// Frames of every leaf entry, in capture order.
    pub fn leaf_frames(&self) -> Vec<Rect> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Leaf)
            .map(|entry| entry.frame)
            .collect()
    }
}

fn capture_node(tree: &BoxTree, id: NodeId, depth: usize, entries: &mut Vec<SnapshotEntry>) {
    let Some(node) = tree.get(id) else {
        return;
    };

    let (kind, color) = match node.kind {
        NodeKind::Leaf(leaf) => (EntryKind::Leaf, leaf.color),
        NodeKind::Container(_) => (EntryKind::Box, None),
    };
    entries.push(SnapshotEntry {
        depth,
        kind,
        name: node.name.clone(),
        frame: node.frame,
        margin: node.margin(),
        color,
    });

    for &child_id in &node.children {
        capture_node(tree, child_id, depth + 1, entries);
    }
}
