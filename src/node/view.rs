//! Node type - one element of the view tree
//!
//! A node owns its children and, while a skeleton is shown, its
//! [`NodeState`].

use compact_str::CompactString;
use kurbo::Rect;

use crate::config::Rgba;
use crate::error::SkeletonResult;
use crate::id::NodeId;

use super::{Children, NodeState};

// =============================================================================
// Appearance
// =============================================================================

/// Visual properties an overlay replaces while it is shown.
///
/// These are what a snapshot captures and what a restore puts back.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Background color, `None` for transparent.
    pub background: Option<Rgba>,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
    pub corner_radius: f64,
    /// Whether the node accepts user interaction.
    pub interactive: bool,
    /// Whether the node's own content (text, image) is drawn.
    pub content_visible: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: None,
            alpha: 1.0,
            corner_radius: 0.0,
            interactive: true,
            content_visible: true,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

/// Visual node with children and overlay state.
///
/// Cloning copies the description of the subtree (flags, appearance,
/// frame, children) under the same ids, but never overlay state: a clone
/// starts Inactive everywhere and shares no overlay or snapshot with the
/// original.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    /// Debug name (type or accessibility label)
    pub name: CompactString,
    /// May host an overlay directly
    pub skeletonable: bool,
    /// Manages a homogeneous set of repeated children (list, grid)
    pub container: bool,
    /// Hide the node itself while the skeleton is active
    pub hide_when_active: bool,
    /// Current visibility
    pub hidden: bool,
    pub appearance: Appearance,
    /// Child nodes
    pub children: Children,
    frame: Rect,
    layout_stale: bool,
    pub(crate) state: Option<NodeState>,
}

impl Node {
    /// Create a structural node: not skeletonable, not a container.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self::with_id(NodeId::next(), name)
    }

    /// Create a node with an id supplied by the host.
    pub fn with_id(id: NodeId, name: impl Into<CompactString>) -> Self {
        Self {
            id,
            name: name.into(),
            skeletonable: false,
            container: false,
            hide_when_active: false,
            hidden: false,
            appearance: Appearance::default(),
            children: Children::new(),
            frame: Rect::ZERO,
            layout_stale: true,
            state: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark as able to host an overlay.
    pub fn skeletonable(mut self) -> Self {
        self.skeletonable = true;
        self
    }

    /// Mark as container-specialized.
    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }

    /// Hide the node while the skeleton is active.
    pub fn hidden_when_active(mut self) -> Self {
        self.hide_when_active = true;
        self
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.set_frame(frame);
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the node. Marks its layout stale if the frame changed.
    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame != frame {
            self.frame = frame;
            self.layout_stale = true;
        }
    }

    /// Force the next layout pass to re-lay this node's overlay.
    pub fn invalidate_layout(&mut self) {
        self.layout_stale = true;
    }

    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.layout_stale
    }

    pub(crate) fn mark_laid_out(&mut self) {
        self.layout_stale = false;
    }

    /// Eligible to host an overlay itself: skeletonable and not a container.
    #[inline]
    pub fn hosts_overlay(&self) -> bool {
        self.skeletonable && !self.container
    }

    /// Overlay state, `None` while no skeleton has touched this node.
    #[inline]
    pub fn state(&self) -> Option<&NodeState> {
        self.state.as_ref()
    }

    pub(crate) fn state_mut(&mut self) -> Option<&mut NodeState> {
        self.state.as_mut()
    }

    /// State for this node, created on first use.
    pub(crate) fn state_or_default(&mut self) -> &mut NodeState {
        self.state.get_or_insert_with(NodeState::default)
    }

    /// Whether a skeleton is currently active on this node.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.as_ref().is_some_and(NodeState::is_active)
    }

    /// Check every node state in this subtree against the activation
    /// invariants, reporting the first violation in depth-first order.
    pub fn check_consistency(&self) -> SkeletonResult<()> {
        if let Some(state) = &self.state {
            state.check(self.id, self.hosts_overlay())?;
        }
        self.children.iter().try_for_each(Node::check_consistency)
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            skeletonable: self.skeletonable,
            container: self.container,
            hide_when_active: self.hide_when_active,
            hidden: self.hidden,
            appearance: self.appearance.clone(),
            children: self.children.clone(),
            frame: self.frame,
            layout_stale: self.layout_stale,
            state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = Node::new("card")
            .skeletonable()
            .hidden_when_active()
            .child(Node::new("title").skeletonable())
            .child(Node::new("rows").container());

        assert_eq!(node.name, "card");
        assert!(node.hosts_overlay());
        assert!(node.hide_when_active);
        assert_eq!(node.children.len(), 2);
        assert!(!node.children[1].hosts_overlay());
        assert!(node.state().is_none());
        assert!(!node.is_active());
    }

    #[test]
    fn test_frame_marks_layout_stale() {
        let mut node = Node::new("label").with_frame(Rect::new(0.0, 0.0, 10.0, 10.0));
        node.mark_laid_out();
        assert!(!node.needs_layout());

        node.set_frame(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!node.needs_layout());

        node.set_frame(Rect::new(0.0, 0.0, 20.0, 10.0));
        assert!(node.needs_layout());
    }

    #[test]
    fn test_container_is_not_overlay_host() {
        let node = Node::new("list").skeletonable().container();
        assert!(node.skeletonable);
        assert!(!node.hosts_overlay());
    }

    #[test]
    fn test_clone_drops_overlay_state() {
        let mut node = Node::new("card").skeletonable().child(Node::new("title").skeletonable());
        node.state_or_default().status = crate::node::Status::Active;
        node.children[0].state_or_default().status = crate::node::Status::Active;

        let copy = node.clone();
        assert_eq!(copy.id(), node.id());
        assert_eq!(copy.children.len(), 1);
        assert!(copy.state().is_none());
        assert!(copy.children[0].state().is_none());
        assert!(node.is_active());
    }
}
