//! Tree queries over a node subtree.
//!
//! Depth-first search, iteration and counting, in the same pre-order the
//! traversals visit nodes.

use crate::id::NodeId;

use super::Node;

impl Node {
    /// Find first node matching predicate (depth-first search)
    pub fn find<F>(&self, predicate: F) -> Option<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        Self::find_in(self, &predicate)
    }

    fn find_in<'a, F>(node: &'a Node, predicate: &F) -> Option<&'a Node>
    where
        F: Fn(&Node) -> bool,
    {
        if predicate(node) {
            return Some(node);
        }
        node.children
            .iter()
            .find_map(|child| Self::find_in(child, predicate))
    }

    /// Find first node matching predicate (mutable)
    pub fn find_mut<F>(&mut self, predicate: F) -> Option<&mut Node>
    where
        F: Fn(&Node) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(predicate))
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.find(|n| n.id() == id)
    }

    /// Look up a node by id (mutable).
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.find_mut(move |n| n.id() == id)
    }

    /// Look up the first node with this name.
    pub fn named(&self, name: &str) -> Option<&Node> {
        self.find(|n| n.name == name)
    }

    /// Iterate over all nodes (depth-first, pre-order)
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// Count nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Count Active nodes in this subtree.
    pub fn active_count(&self) -> usize {
        self.iter().filter(|n| n.is_active()).count()
    }

    /// Count nodes carrying any overlay state in this subtree.
    pub fn state_count(&self) -> usize {
        self.iter().filter(|n| n.state().is_some()).count()
    }
}

// =============================================================================
// NodeIter - depth-first traversal
// =============================================================================

/// Depth-first iterator over a subtree
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
