//! Host-side widget tree.
//!
//! The Box layout only ever sees one container and its measured children.
//! This tree is the collaborator that owns the mutable widget hierarchy,
//! walks it bottom-up to measure every Box, and then resolves the logical
//! offsets into absolute, physical frames.

use std::collections::HashMap;
use std::fmt;

use boxwood_core::{Color, Density, Dp, LayoutDirection, LayoutError, Margin, Point, Rect, Size};
use tracing::debug;

use crate::compute::compute_box_layout;
use crate::request::{BoxLayoutRequest, BoxStyle, ChildBox};

/// Unique identifier for a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fixed-size widget with no children.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeafStyle {
    pub size: Size,
    pub margin: Margin,
    /// Fill used by snapshot renderers
    pub color: Option<Color>,
}

impl LeafStyle {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// What a node is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    Leaf(LeafStyle),
    Container(BoxStyle),
}

impl NodeKind {
    /// The margin the node asks its parent to reserve.
    pub fn margin(&self) -> Margin {
        match self {
            NodeKind::Leaf(leaf) => leaf.margin,
            NodeKind::Container(style) => style.margin,
        }
    }
}

/// A node in the layout tree.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Unique ID for this node
    pub id: NodeId,
    /// Optional name for debugging and snapshots
    pub name: Option<String>,
    pub kind: NodeKind,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Child node IDs in paint order
    pub children: Vec<NodeId>,
    /// Measured content size
    pub size: Size,
    /// Offset inside the parent's content box, measured from the start edge
    pub offset: Point,
    /// Absolute frame in physical (left-to-right) document coordinates
    pub frame: Rect,
}

impl LayoutNode {
    /// Create a new layout node.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            name: None,
            kind,
            parent: None,
            children: Vec::new(),
            size: Size::ZERO,
            offset: Point::ORIGIN,
            frame: Rect::default(),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn margin(&self) -> Margin {
        self.kind.margin()
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_))
    }
}

/// Options for a tree layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Space offered to every root
    pub viewport: Size,
    /// Reading direction used to resolve start/end
    pub direction: LayoutDirection,
    /// Pixels per dp, for renderers downstream of layout
    pub density: Density,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            viewport: Size::from_ints(800, 600),
            direction: LayoutDirection::Ltr,
            density: Density::DEFAULT,
        }
    }
}

impl LayoutOptions {
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }
}

/// A mutable widget tree of Boxes and leaves.
#[derive(Debug, Clone)]
pub struct BoxTree {
    /// All nodes in the tree, indexed by ID
    nodes: HashMap<NodeId, LayoutNode>,
    /// Root node IDs (top-level widgets)
    roots: Vec<NodeId>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl Default for BoxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxTree {
    /// Create an empty layout tree.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            next_id: 0,
        }
    }

    /// Generate a new unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a root node.
    ///
    /// Any children listed on `node` are ignored; attach them with
    /// [`BoxTree::add_child`].
    pub fn add_root(&mut self, mut node: LayoutNode) -> Result<NodeId, LayoutError> {
        let id = self.vacant(node.id)?;
        node.parent = None;
        node.children.clear();
        self.nodes.insert(id, node);
        self.roots.push(id);
        Ok(id)
    }

    /// Append a child to a container.
    pub fn add_child(&mut self, parent_id: NodeId, node: LayoutNode) -> Result<NodeId, LayoutError> {
        let index = self.container(parent_id)?.children.len();
        self.insert_child(parent_id, index, node)
    }

    /// Insert a child into a container at `index`.
    pub fn insert_child(
        &mut self,
        parent_id: NodeId,
        index: usize,
        mut node: LayoutNode,
    ) -> Result<NodeId, LayoutError> {
        let len = self.container(parent_id)?.children.len();
        if index > len {
            return Err(LayoutError::ChildIndexOutOfRange {
                id: parent_id.0,
                index,
                len,
            });
        }

        let id = self.vacant(node.id)?;
        node.parent = Some(parent_id);
        node.children.clear();
        self.nodes.insert(id, node);
        self.container_mut(parent_id)?.children.insert(index, id);
        Ok(id)
    }

    /// Remove `count` children starting at `index`, along with their subtrees.
    pub fn remove_children(
        &mut self,
        parent_id: NodeId,
        index: usize,
        count: usize,
    ) -> Result<Vec<NodeId>, LayoutError> {
        let parent = self.container_mut(parent_id)?;
        let len = parent.children.len();
        let end = run_end(parent_id, index, count, len)?;

        let removed: Vec<NodeId> = parent.children.drain(index..end).collect();
        for &id in &removed {
            self.drop_subtree(id);
        }
        Ok(removed)
    }

    /// Move `count` children starting at `from` so they land before the
    /// child that was at `to` before the move.
    ///
    /// `to` may not fall strictly inside the moved run.
    pub fn move_children(
        &mut self,
        parent_id: NodeId,
        from: usize,
        to: usize,
        count: usize,
    ) -> Result<(), LayoutError> {
        let parent = self.container_mut(parent_id)?;
        let len = parent.children.len();
        let end = run_end(parent_id, from, count, len)?;
        if to > len || (from < to && to < end) {
            return Err(LayoutError::ChildIndexOutOfRange {
                id: parent_id.0,
                index: to,
                len,
            });
        }

        let moved: Vec<NodeId> = parent.children.drain(from..end).collect();
        let target = if to >= end { to - count } else { to };
        let tail = parent.children.split_off(target);
        parent.children.extend(moved);
        parent.children.extend(tail);
        Ok(())
    }

    fn vacant(&self, id: NodeId) -> Result<NodeId, LayoutError> {
        if self.nodes.contains_key(&id) {
            Err(LayoutError::DuplicateNode { id: id.0 })
        } else {
            Ok(id)
        }
    }

    fn drop_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.drop_subtree(child);
            }
        }
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(&id)
    }

    /// Get the root nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get children of a node, in paint order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &LayoutNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    fn node(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        self.nodes.get(&id).ok_or(LayoutError::UnknownNode { id: id.0 })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, LayoutError> {
        self.nodes.get_mut(&id).ok_or(LayoutError::UnknownNode { id: id.0 })
    }

    fn container(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        let node = self.node(id)?;
        if node.is_container() {
            Ok(node)
        } else {
            Err(LayoutError::NotAContainer { id: id.0 })
        }
    }

    fn container_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, LayoutError> {
        let node = self.node_mut(id)?;
        if node.is_container() {
            Ok(node)
        } else {
            Err(LayoutError::NotAContainer { id: id.0 })
        }
    }

    /// Lay out every root against the viewport.
    ///
    /// Roots are placed at their start/top margin, as if the viewport were a
    /// start-aligned parent.
    pub fn compute(&mut self, options: &LayoutOptions) -> Result<(), LayoutError> {
        for root_id in self.roots.clone() {
            let margin = self.node(root_id)?.margin();
            self.measure(root_id, options.viewport.deflate(margin))?;

            let root = self.node_mut(root_id)?;
            root.offset = Point::new(margin.start.value(), margin.top.value());
            self.place(root_id, Point::ORIGIN, options.viewport.width, options.direction)?;
        }

        debug!(
            "Computed box tree layout: {} nodes, {} roots, viewport {}",
            self.nodes.len(),
            self.roots.len(),
            options.viewport,
        );
        Ok(())
    }

    /// Bottom-up pass: measure children first, then run the Box layout.
    ///
    /// A container hands its whole available size, less each child's
    /// margin, down to that child, whether it fills or wraps itself.
    fn measure(&mut self, id: NodeId, available: Size) -> Result<Size, LayoutError> {
        let (kind, child_ids) = {
            let node = self.node(id)?;
            (node.kind, node.children.clone())
        };

        let size = match kind {
            NodeKind::Leaf(leaf) => leaf.size,
            NodeKind::Container(style) => {
                let mut children = Vec::with_capacity(child_ids.len());
                for &child_id in &child_ids {
                    let margin = self.node(child_id)?.margin();
                    let size = self.measure(child_id, available.deflate(margin))?;
                    children.push(ChildBox::new(size).with_margin(margin));
                }

                let request = BoxLayoutRequest::from_style(style, children, Some(available));
                let result = compute_box_layout(&request)?;
                for (child_id, offset) in child_ids.iter().zip(result.child_offsets) {
                    self.node_mut(*child_id)?.offset = offset;
                }
                result.container_size
            }
        };

        self.node_mut(id)?.size = size;
        Ok(size)
    }

    /// Top-down pass: turn logical offsets into absolute physical frames.
    fn place(
        &mut self,
        id: NodeId,
        parent_origin: Point,
        parent_width: Dp,
        direction: LayoutDirection,
    ) -> Result<(), LayoutError> {
        let (origin, width, children) = {
            let node = self.node_mut(id)?;
            let x = match direction {
                LayoutDirection::Ltr => node.offset.x,
                LayoutDirection::Rtl => {
                    parent_width.value() - node.offset.x - node.size.width.value()
                }
            };
            node.frame = Rect::new(parent_origin + Point::new(x, node.offset.y), node.size);
            (node.frame.origin, node.size.width, node.children.clone())
        };

        for child_id in children {
            self.place(child_id, origin, width, direction)?;
        }
        Ok(())
    }

    /// Get the total bounds of all roots.
    pub fn content_bounds(&self) -> Rect {
        self.roots
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|node| node.frame)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default()
    }
}

/// End of the run `start..start + count`, if it lies within `len` children.
fn run_end(id: NodeId, start: usize, count: usize, len: usize) -> Result<usize, LayoutError> {
    start
        .checked_add(count)
        .filter(|end| *end <= len)
        .ok_or(LayoutError::ChildIndexOutOfRange {
            id: id.0,
            index: start.saturating_add(count),
            len,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Alignment, SizingMode};

    fn fill_box(margin: Margin) -> NodeKind {
        NodeKind::Container(BoxStyle {
            width: SizingMode::Fill,
            height: SizingMode::Fill,
            margin,
            ..Default::default()
        })
    }

    fn leaf(width: u32, height: u32) -> NodeKind {
        NodeKind::Leaf(LeafStyle::new(Size::from_ints(width, height)))
    }

    fn margins_tree() -> (BoxTree, NodeId, NodeId) {
        let asymmetric = Margin::from_ints(10, 20, 30, 40);
        let mut tree = BoxTree::new();

        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(root_id, fill_box(asymmetric)).with_name("root")).unwrap();

        let child_id = tree.next_id();
        let red = LeafStyle::new(Size::from_ints(100, 100))
            .with_margin(asymmetric)
            .with_color(Color::RED);
        tree.add_child(root_id, LayoutNode::new(child_id, NodeKind::Leaf(red)))
            .unwrap();

        (tree, root_id, child_id)
    }

    #[test]
    fn test_margins_ltr() {
        let (mut tree, root_id, child_id) = margins_tree();
        tree.compute(&LayoutOptions::default()).unwrap();

        let root = tree.get(root_id).unwrap();
        assert_eq!(root.size, Size::from_ints(760, 540));
        assert_eq!(root.frame.origin, Point::new(10.0, 20.0));

        let child = tree.get(child_id).unwrap();
        assert_eq!(child.offset, Point::new(10.0, 20.0));
        assert_eq!(child.frame.origin, Point::new(20.0, 40.0));
    }

    #[test]
    fn test_margins_rtl_mirror_start_and_end() {
        let (mut tree, root_id, child_id) = margins_tree();
        let options = LayoutOptions::default().with_direction(LayoutDirection::Rtl);
        tree.compute(&options).unwrap();

        // 800 - 10 - 760
        let root = tree.get(root_id).unwrap();
        assert_eq!(root.frame.origin, Point::new(30.0, 20.0));

        // 30 + (760 - 10 - 100)
        let child = tree.get(child_id).unwrap();
        assert_eq!(child.frame.origin, Point::new(680.0, 40.0));
    }

    #[test]
    fn test_nested_wrap_box_is_centered() {
        let mut tree = BoxTree::new();
        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(
            root_id,
            NodeKind::Container(BoxStyle {
                width: SizingMode::Fill,
                height: SizingMode::Fill,
                horizontal_alignment: Alignment::Center,
                vertical_alignment: Alignment::Center,
                ..Default::default()
            }),
        ))
        .unwrap();

        let inner_id = tree.next_id();
        tree.add_child(
            root_id,
            LayoutNode::new(inner_id, NodeKind::Container(BoxStyle::default())),
        )
        .unwrap();
        for size in [300, 200, 100] {
            let id = tree.next_id();
            tree.add_child(inner_id, LayoutNode::new(id, leaf(size, size)))
                .unwrap();
        }

        tree.compute(&LayoutOptions::default()).unwrap();

        let inner = tree.get(inner_id).unwrap();
        assert_eq!(inner.size, Size::from_ints(300, 300));
        assert_eq!(inner.frame.origin, Point::new(250.0, 150.0));
        let smallest = tree.children(inner_id).last().unwrap();
        assert_eq!(smallest.frame.origin, Point::new(250.0, 150.0));
    }

    #[test]
    fn test_fill_child_inside_wrap_parent_takes_available_space() {
        let mut tree = BoxTree::new();
        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(root_id, NodeKind::Container(BoxStyle::default()))).unwrap();

        let child_id = tree.next_id();
        tree.add_child(root_id, LayoutNode::new(child_id, fill_box(Margin::from_ints(5, 5, 5, 5))))
            .unwrap();

        let options = LayoutOptions::default().with_viewport(Size::from_ints(200, 100));
        tree.compute(&options).unwrap();

        assert_eq!(tree.get(child_id).unwrap().size, Size::from_ints(190, 90));
        assert_eq!(tree.get(root_id).unwrap().size, Size::from_ints(200, 100));
    }

    #[test]
    fn test_insert_move_remove_children() {
        let mut tree = BoxTree::new();
        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(root_id, NodeKind::Container(BoxStyle::default()))).unwrap();

        let a = tree.next_id();
        let b = tree.next_id();
        let c = tree.next_id();
        tree.insert_child(root_id, 0, LayoutNode::new(a, leaf(1, 1))).unwrap();
        tree.insert_child(root_id, 1, LayoutNode::new(c, leaf(3, 3))).unwrap();
        tree.insert_child(root_id, 1, LayoutNode::new(b, leaf(2, 2))).unwrap();
        assert_eq!(tree.get(root_id).unwrap().children, vec![a, b, c]);

        tree.move_children(root_id, 0, 3, 1).unwrap();
        assert_eq!(tree.get(root_id).unwrap().children, vec![b, c, a]);

        tree.move_children(root_id, 2, 0, 1).unwrap();
        assert_eq!(tree.get(root_id).unwrap().children, vec![a, b, c]);

        let removed = tree.remove_children(root_id, 1, 2).unwrap();
        assert_eq!(removed, vec![b, c]);
        assert_eq!(tree.get(root_id).unwrap().children, vec![a]);
        assert!(tree.get(b).is_none());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_drops_subtrees() {
        let mut tree = BoxTree::new();
        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(root_id, NodeKind::Container(BoxStyle::default()))).unwrap();
        let inner_id = tree.next_id();
        tree.add_child(root_id, LayoutNode::new(inner_id, NodeKind::Container(BoxStyle::default())))
            .unwrap();
        let leaf_id = tree.next_id();
        tree.add_child(inner_id, LayoutNode::new(leaf_id, leaf(1, 1))).unwrap();

        tree.remove_children(root_id, 0, 1).unwrap();
        assert!(tree.get(leaf_id).is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_child_errors() {
        let mut tree = BoxTree::new();
        let leaf_id = tree.next_id();
        tree.add_root(LayoutNode::new(leaf_id, leaf(10, 10))).unwrap();

        let orphan = tree.next_id();
        assert_eq!(
            tree.add_child(leaf_id, LayoutNode::new(orphan, leaf(1, 1))),
            Err(LayoutError::NotAContainer { id: leaf_id.0 })
        );
        assert_eq!(
            tree.add_child(NodeId(99), LayoutNode::new(orphan, leaf(1, 1))),
            Err(LayoutError::UnknownNode { id: 99 })
        );

        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(root_id, NodeKind::Container(BoxStyle::default()))).unwrap();
        assert_eq!(
            tree.insert_child(root_id, 1, LayoutNode::new(orphan, leaf(1, 1))),
            Err(LayoutError::ChildIndexOutOfRange { id: root_id.0, index: 1, len: 0 })
        );
        assert!(tree.remove_children(root_id, 0, 1).is_err());
        assert!(tree.move_children(root_id, 0, 0, 1).is_err());
    }

    fn three_children() -> (BoxTree, NodeId, Vec<NodeId>) {
        let mut tree = BoxTree::new();
        let root_id = tree.next_id();
        tree.add_root(LayoutNode::new(root_id, NodeKind::Container(BoxStyle::default())))
            .unwrap();
        let ids = (1..=3)
            .map(|size| {
                let id = tree.next_id();
                tree.add_child(root_id, LayoutNode::new(id, leaf(size, size)))
                    .unwrap()
            })
            .collect();
        (tree, root_id, ids)
    }

    #[test]
    fn test_move_target_inside_run_is_rejected() {
        let (mut tree, root_id, ids) = three_children();

        assert_eq!(
            tree.move_children(root_id, 0, 1, 3),
            Err(LayoutError::ChildIndexOutOfRange { id: root_id.0, index: 1, len: 3 })
        );
        assert!(tree.move_children(root_id, 0, 1, 2).is_err());
        assert_eq!(tree.get(root_id).unwrap().children, ids);

        // Either edge of the run is a no-op.
        tree.move_children(root_id, 0, 0, 3).unwrap();
        tree.move_children(root_id, 0, 3, 3).unwrap();
        tree.move_children(root_id, 1, 3, 2).unwrap();
        assert_eq!(tree.get(root_id).unwrap().children, ids);

        tree.move_children(root_id, 1, 0, 2).unwrap();
        assert_eq!(tree.get(root_id).unwrap().children, vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_oversized_run_is_an_error() {
        let (mut tree, root_id, ids) = three_children();

        assert_eq!(
            tree.remove_children(root_id, 1, usize::MAX),
            Err(LayoutError::ChildIndexOutOfRange { id: root_id.0, index: usize::MAX, len: 3 })
        );
        assert!(tree.move_children(root_id, usize::MAX, 0, 1).is_err());
        assert!(tree.move_children(root_id, 1, 0, usize::MAX).is_err());
        assert_eq!(tree.get(root_id).unwrap().children, ids);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let (mut tree, root_id, ids) = three_children();

        assert_eq!(
            tree.add_child(root_id, LayoutNode::new(ids[0], leaf(99, 99))),
            Err(LayoutError::DuplicateNode { id: ids[0].0 })
        );
        assert_eq!(
            tree.insert_child(root_id, 0, LayoutNode::new(root_id, leaf(1, 1))),
            Err(LayoutError::DuplicateNode { id: root_id.0 })
        );
        assert_eq!(
            tree.add_root(LayoutNode::new(ids[2], leaf(1, 1))),
            Err(LayoutError::DuplicateNode { id: ids[2].0 })
        );
        assert_eq!(tree.get(root_id).unwrap().children, ids);
        assert_eq!(tree.roots(), &[root_id]);

        tree.compute(&LayoutOptions::default()).unwrap();
        assert_eq!(tree.get(ids[0]).unwrap().size, Size::from_ints(1, 1));
    }

    #[test]
    fn test_children_on_inserted_node_are_ignored() {
        let (mut tree, root_id, _) = three_children();
        let mut looped = LayoutNode::new(tree.next_id(), NodeKind::Container(BoxStyle::default()));
        looped.children = vec![looped.id, root_id];

        let id = tree.add_child(root_id, looped).unwrap();
        assert!(tree.get(id).unwrap().children.is_empty());
        tree.compute(&LayoutOptions::default()).unwrap();
    }

    #[test]
    fn test_content_bounds() {
        let mut tree = BoxTree::new();
        let a = tree.next_id();
        tree.add_root(LayoutNode::new(
            a,
            NodeKind::Leaf(LeafStyle::new(Size::from_ints(100, 50)).with_margin(Margin::from_ints(10, 10, 0, 0))),
        ))
        .unwrap();
        let b = tree.next_id();
        tree.add_root(LayoutNode::new(b, leaf(50, 200))).unwrap();

        tree.compute(&LayoutOptions::default()).unwrap();

        let bounds = tree.content_bounds();
        assert_eq!(bounds.origin, Point::ORIGIN);
        assert_eq!(bounds.size, Size::from_ints(110, 200));
    }
}
