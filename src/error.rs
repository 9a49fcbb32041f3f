//! Error types for skeleton-overlay.
//!
//! Traversals themselves are total: they never fail, and a call whose
//! preconditions do not hold is a no-op. Errors only come from looking up
//! nodes by id and from consistency checks over a tree's [`NodeState`]s.
//!
//! [`NodeState`]: crate::node::NodeState

use thiserror::Error;

use crate::id::NodeId;

/// A violated per-node invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// Hooks are installed on a node that is not Active.
    HooksWithoutActive,
    /// An Active node has no hooks installed.
    ActiveWithoutHooks,
    /// An overlay handle is held by a node that is not Active.
    OverlayWithoutActive,
    /// An Active overlay host owns no overlay.
    HostWithoutOverlay,
    /// A structural or container node owns an overlay.
    OverlayOnStructural,
    /// A configuration is recorded on a node that is not Active.
    ConfigWithoutActive,
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::HooksWithoutActive => "hooks installed on inactive node",
            Self::ActiveWithoutHooks => "active node without hooks",
            Self::OverlayWithoutActive => "overlay owned by inactive node",
            Self::HostWithoutOverlay => "active overlay host without overlay",
            Self::OverlayOnStructural => "overlay owned by structural node",
            Self::ConfigWithoutActive => "configuration recorded on inactive node",
        };
        f.write_str(msg)
    }
}

/// Errors that can occur during skeleton operations.
#[derive(Debug, Error)]
pub enum SkeletonError {
    /// No node with this id exists in the searched subtree.
    #[error("node {0} not found in subtree")]
    NodeNotFound(NodeId),

    /// A node's state violates an invariant.
    #[error("inconsistent state on node {node}: {kind}")]
    Inconsistent {
        /// Offending node
        node: NodeId,
        /// Which invariant failed
        kind: Inconsistency,
    },
}

/// Result type alias for skeleton operations.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

impl SkeletonError {
    /// Create an inconsistency error.
    pub fn inconsistent(node: NodeId, kind: Inconsistency) -> Self {
        Self::Inconsistent { node, kind }
    }
}
