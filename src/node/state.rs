//! Per-node overlay state.
//!
//! A [`NodeState`] is created the first time a show traversal visits a node
//! and dropped once a hide traversal has torn the node down.

use crate::config::SharedConfig;
use crate::error::{Inconsistency, SkeletonError, SkeletonResult};
use crate::id::{NodeId, OverlayRef, SnapshotRef};

// =============================================================================
// Status
// =============================================================================

/// Activation status of a node.
///
/// `Inactive → Active` on show, `Active → TearingDown` when hide reaches the
/// node, and the state is dropped when hide has finished the node's subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Inactive,
    Active,
    TearingDown,
}

// =============================================================================
// NodeState
// =============================================================================

/// Overlay bookkeeping for one node.
#[derive(Debug, Clone, Default)]
pub struct NodeState {
    pub(crate) status: Status,
    pub(crate) config: Option<SharedConfig>,
    pub(crate) animated: bool,
    pub(crate) overlay: Option<OverlayRef>,
    pub(crate) snapshot: Option<SnapshotRef>,
    pub(crate) hooks_installed: bool,
    /// Show turned `hidden` on; hide turns it back off.
    pub(crate) hid_for_overlay: bool,
}

impl NodeState {
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Configuration of the last show or update.
    #[inline]
    pub fn config(&self) -> Option<&SharedConfig> {
        self.config.as_ref()
    }

    /// Whether the overlay animation is running.
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    #[inline]
    pub fn overlay(&self) -> Option<OverlayRef> {
        self.overlay
    }

    #[inline]
    pub fn snapshot(&self) -> Option<SnapshotRef> {
        self.snapshot
    }

    #[inline]
    pub fn hooks_installed(&self) -> bool {
        self.hooks_installed
    }

    /// Whether the node was visible until show hid it.
    #[inline]
    pub fn hid_for_overlay(&self) -> bool {
        self.hid_for_overlay
    }

    /// Check this state against the activation invariants.
    ///
    /// `hosts_overlay` is whether the owning node is an overlay host
    /// (eligible and not container-specialized).
    pub fn check(&self, node: NodeId, hosts_overlay: bool) -> SkeletonResult<()> {
        let active = self.is_active();
        let fail = |kind| Err(SkeletonError::inconsistent(node, kind));

        if self.hooks_installed && !active {
            return fail(Inconsistency::HooksWithoutActive);
        }
        if active && !self.hooks_installed {
            return fail(Inconsistency::ActiveWithoutHooks);
        }
        if self.overlay.is_some() && !hosts_overlay {
            return fail(Inconsistency::OverlayOnStructural);
        }
        if self.overlay.is_some() && !active {
            return fail(Inconsistency::OverlayWithoutActive);
        }
        if active && hosts_overlay && self.overlay.is_none() {
            return fail(Inconsistency::HostWithoutOverlay);
        }
        if self.config.is_some() && !active {
            return fail(Inconsistency::ConfigWithoutActive);
        }
        Ok(())
    }
}
