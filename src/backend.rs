//! Collaborator interfaces.
//!
//! The traversal engine decides *which* node gets *what*; everything that
//! touches pixels, native hooks or placeholder datasets goes through these
//! traits. A host implements all four on one type and hands it to
//! [`Skeleton`](crate::Skeleton) as its [`Backend`].
//!
//! | Trait | Concern |
//! |---|---|
//! | [`SnapshotStore`] | capture/restore pre-overlay visual state |
//! | [`HookInstaller`] | layout and trait-change interception |
//! | [`OverlayLayers`] | creating, updating, laying out and removing overlays |
//! | [`PlaceholderProvider`] | placeholder datasets for container nodes |

use crate::config::{Animation, Configuration, Transition};
use crate::id::{OverlayRef, SnapshotRef};
use crate::node::Node;

/// Capture and restore of a node's pre-overlay visual state.
pub trait SnapshotStore {
    /// Capture the node's current visual state.
    ///
    /// Capturing a node that already has a live snapshot returns the
    /// existing handle without capturing again.
    fn capture(&mut self, node: &Node) -> SnapshotRef;

    /// Put a captured state back on the node and release the snapshot.
    ///
    /// `forced` restores immediately, without any transition. Restoring an
    /// unknown or already released snapshot does nothing.
    fn restore(&mut self, node: &mut Node, snapshot: SnapshotRef, forced: bool);
}

/// Installation of layout- and trait-change interception on a node.
///
/// Installed hooks report back through
/// [`Skeleton::handle_hook`](crate::Skeleton::handle_hook).
pub trait HookInstaller {
    fn install_hooks(&mut self, node: &Node);

    /// Remove hooks. Must be safe on a node without hooks.
    fn uninstall_hooks(&mut self, node: &Node);
}

/// Overlay drawing for single nodes.
pub trait OverlayLayers {
    /// Get the node ready to be covered (clear content, disable interaction).
    fn prepare(&mut self, node: &mut Node);

    fn create_overlay(&mut self, node: &Node, config: &Configuration) -> OverlayRef;

    /// Refresh colors and shape of an existing overlay in place.
    fn update_overlay(&mut self, node: &Node, overlay: OverlayRef, config: &Configuration);

    /// Remove an overlay, animating it out with `transition`.
    fn destroy_overlay(&mut self, node: &Node, overlay: OverlayRef, transition: Transition);

    /// Fit the overlay to the node's current frame.
    fn layout_overlay(&mut self, node: &Node, overlay: OverlayRef);

    fn start_animation(&mut self, node: &Node, overlay: OverlayRef, animation: Animation);

    fn stop_animation(&mut self, node: &Node, overlay: OverlayRef);
}

/// Placeholder datasets for container-specialized nodes.
///
/// Only called for nodes with [`Node::container`] set. The defaults do
/// nothing, for hosts without list or grid views.
pub trait PlaceholderProvider {
    fn add_placeholders(&mut self, _node: &Node) {}

    fn update_placeholders(&mut self, _node: &Node) {}

    /// Drop the placeholder dataset, reloading real data if `reload_after`.
    fn remove_placeholders(&mut self, _node: &Node, _reload_after: bool) {}
}

/// Everything the traversal engine needs from its host.
pub trait Backend: SnapshotStore + HookInstaller + OverlayLayers + PlaceholderProvider {}

impl<T> Backend for T where T: SnapshotStore + HookInstaller + OverlayLayers + PlaceholderProvider {}
