//! Opaque identities for nodes and the handles collaborators hand back.
//!
//! - [`NodeId`]: identity of a node in the view tree, used to scope flow
//!   notifications and route hook events.
//! - [`OverlayRef`]: handle to an installed overlay, owned by exactly one node.
//! - [`SnapshotRef`]: handle to a captured pre-overlay visual state.
//!
//! All three are `Copy` and 8-16 bytes; none of them owns a resource on its
//! own. Ownership is expressed by *where* the handle is stored (the node's
//! [`NodeState`](crate::node::NodeState)).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::SkeletonType;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// NodeId
// =============================================================================

/// Identity of a node in a view tree.
///
/// Ids produced by [`NodeId::next`] are unique within the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a NodeId from a raw value.
    ///
    /// Intended for hosts that already have their own view identities.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(#{})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// OverlayRef
// =============================================================================

/// Handle to an overlay created by an [`OverlayLayers`](crate::backend::OverlayLayers)
/// collaborator.
///
/// Carries the overlay's [`SkeletonType`] so the update traversal can decide
/// between refreshing in place and replacing without asking the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayRef {
    id: u64,
    kind: SkeletonType,
}

impl OverlayRef {
    /// Create a handle for an overlay of the given type.
    #[inline]
    pub const fn new(id: u64, kind: SkeletonType) -> Self {
        Self { id, kind }
    }

    /// Collaborator-assigned identity.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Overlay type this handle was created with.
    #[inline]
    pub const fn kind(&self) -> SkeletonType {
        self.kind
    }
}

// =============================================================================
// SnapshotRef
// =============================================================================

/// Handle to a captured pre-overlay visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotRef(pub(crate) u64);

impl SnapshotRef {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        let a = NodeId::next();
        let b = NodeId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_node_id_display() {
        let id = NodeId::from_raw(42);
        assert_eq!(id.to_string(), "#42");
        assert_eq!(format!("{:?}", id), "NodeId(#42)");
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn test_overlay_ref_carries_kind() {
        let overlay = OverlayRef::new(7, SkeletonType::Gradient);
        assert_eq!(overlay.id(), 7);
        assert_eq!(overlay.kind(), SkeletonType::Gradient);
    }
}
