//! skeleton-overlay - Loading skeletons over a view tree
//!
//! Shows placeholder shapes in place of real content while it loads, keeps
//! them in sync with layout and configuration changes, and tears them down
//! to restore the original content.
//!
//! ## Core Concepts
//!
//! **Traversals**: [`Skeleton`] walks a [`Node`] tree with four root-level
//! calls (`show`, `update`, `hide`, `layout_if_needed`). Show and update stop
//! at nodes that host an overlay or stand for a set of repeated children;
//! hide and layout reach every node.
//!
//! **Node state**: each visited node carries a [`NodeState`] that moves
//! `Inactive → Active → TearingDown` and owns at most one overlay and one
//! snapshot.
//!
//! **Collaborators**: drawing, snapshots, native hooks and placeholder data
//! live behind the traits in [`backend`]. Phase notifications go to a
//! per-root [`FlowObserver`].
//!
//! ## Modules
//! - `node`: Node, NodeState and tree queries
//! - `traverse`: the traversal engine
//! - `backend`: collaborator traits
//! - `overlay`: per-node overlay bookkeeping
//! - `flow`: phase notifications
//! - `config`: overlay configuration
//!
//! ## Usage
//!
//! ```ignore
//! use skeleton_overlay::prelude::*;
//!
//! let mut skeleton = Skeleton::new(host).with_flow_observer(|_| Box::new(TracingFlow));
//!
//! skeleton.show(&mut screen, Configuration::GRADIENT.animated(), true);
//! skeleton.layout_if_needed(&mut screen); // animation starts here
//! skeleton.hide(&mut screen, true, Transition::CrossDissolve(Duration::from_millis(250)));
//! ```

/// Collaborator traits
pub mod backend;

/// Overlay configuration
pub mod config;

/// Error types
pub mod error;

/// Phase notifications
pub mod flow;

/// Node and handle identities
pub mod id;

/// View tree types: Node, NodeState
pub mod node;

/// Per-node overlay bookkeeping
mod overlay;

/// Prelude for common imports
pub mod prelude;

/// Snapshot store for node appearance
pub mod snapshot;

/// Traversal engine
pub mod traverse;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{Backend, HookInstaller, OverlayLayers, PlaceholderProvider, SnapshotStore};
pub use config::{Animation, Configuration, SharedConfig, SkeletonType, SlideDirection, Transition};
pub use error::{Inconsistency, SkeletonError, SkeletonResult};
pub use flow::{FlowEvent, FlowObserver, TracingFlow};
pub use id::{NodeId, OverlayRef, SnapshotRef};
pub use node::{Appearance, Children, Node, NodeState, Status};
pub use snapshot::AppearanceSnapshots;
pub use traverse::{HookEvent, Skeleton};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, observed_skeleton};

    /// Checks the activation invariants after every phase of a full cycle.
    #[test]
    fn test_full_cycle_keeps_state_consistent() {
        let (mut skeleton, log) = observed_skeleton();
        let mut root = Node::new("screen")
            .child(Node::new("avatar").skeletonable().hidden_when_active())
            .child(
                Node::new("feed")
                    .skeletonable()
                    .container()
                    .child(Node::new("post").skeletonable()),
            )
            .child(Node::new("bio").child(Node::new("line").skeletonable()));
        let id = root.id();

        skeleton.show(&mut root, Configuration::SOLID.animated(), true);
        root.check_consistency().unwrap();

        skeleton.layout_if_needed(&mut root);
        root.check_consistency().unwrap();

        skeleton.update(&mut root, Configuration::GRADIENT, true);
        root.check_consistency().unwrap();

        skeleton.hide(&mut root, true, Transition::None);
        root.check_consistency().unwrap();

        assert_eq!(root.state_count(), 0);
        assert_eq!(
            log.events(),
            vec![
                FlowEvent::WillBeginShowing,
                FlowEvent::DidShow,
                FlowEvent::WillBeginLayingOut,
                FlowEvent::DidLayoutIfNeeded,
                FlowEvent::WillBeginUpdating,
                FlowEvent::DidUpdate,
                FlowEvent::WillBeginHiding,
                FlowEvent::DidHide,
            ]
        );
        assert!(log.entries().iter().all(|(root, _)| *root == id));

        let backend = skeleton.into_backend();
        let installs = backend.count(|c| matches!(c, Call::Install(_)));
        let uninstalls = backend.count(|c| matches!(c, Call::Uninstall(_)));
        assert_eq!(installs, uninstalls);
        let creates = backend.count(|c| matches!(c, Call::Create(..)));
        let destroys = backend.count(|c| matches!(c, Call::Destroy(..)));
        assert_eq!(creates, destroys);
    }

    #[test]
    fn test_notification_count_is_independent_of_tree_size() {
        let (mut skeleton, log) = observed_skeleton();
        let mut root = Node::new("root");
        for i in 0..50 {
            let mut group = Node::new(format!("group-{i}"));
            for _ in 0..4 {
                group = group.child(Node::new("label").skeletonable());
            }
            root = root.child(group);
        }

        skeleton.show(&mut root, Configuration::SOLID, true);
        assert_eq!(log.count(FlowEvent::DidShow), 1);
        assert_eq!(root.active_count(), 251);
    }

    #[test]
    fn test_public_types_are_send_sync() {
        static_assertions::assert_impl_all!(Node: Send, Sync, Clone);
        static_assertions::assert_impl_all!(NodeState: Send, Sync);
        static_assertions::assert_impl_all!(SkeletonError: Send, Sync);
    }
}
