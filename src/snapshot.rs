//! Snapshot store for [`Appearance`].
//!
//! Hosts whose pre-overlay state is fully described by a node's
//! [`Appearance`] can use [`AppearanceSnapshots`] as their
//! [`SnapshotStore`] and [`prepare_appearance`] from their
//! [`OverlayLayers::prepare`](crate::backend::OverlayLayers::prepare).

use rustc_hash::FxHashMap;

use crate::backend::SnapshotStore;
use crate::id::{NodeId, SnapshotRef};
use crate::node::{Appearance, Node};

/// In-memory snapshots, at most one per node.
#[derive(Debug, Default)]
pub struct AppearanceSnapshots {
    saved: FxHashMap<NodeId, (SnapshotRef, Appearance)>,
    next: u64,
}

impl AppearanceSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live snapshots.
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Captured appearance of a node, if any.
    pub fn get(&self, node: NodeId) -> Option<&Appearance> {
        self.saved.get(&node).map(|(_, appearance)| appearance)
    }
}

impl SnapshotStore for AppearanceSnapshots {
    fn capture(&mut self, node: &Node) -> SnapshotRef {
        if let Some((snapshot, _)) = self.saved.get(&node.id()) {
            return *snapshot;
        }
        self.next += 1;
        let snapshot = SnapshotRef(self.next);
        self.saved
            .insert(node.id(), (snapshot, node.appearance.clone()));
        tracing::trace!(node = %node.id(), snapshot = snapshot.as_raw(), "captured appearance");
        snapshot
    }

    fn restore(&mut self, node: &mut Node, snapshot: SnapshotRef, forced: bool) {
        match self.saved.remove(&node.id()) {
            Some((saved, appearance)) if saved == snapshot => {
                node.appearance = appearance;
                tracing::trace!(node = %node.id(), forced, "restored appearance");
            }
            Some(other) => {
                // Stale handle: keep the live snapshot.
                self.saved.insert(node.id(), other);
            }
            None => {}
        }
    }
}

/// Clear what an overlay covers: content, background and interaction.
///
/// Corner radius is kept so the overlay follows the node's shape.
pub fn prepare_appearance(node: &mut Node) {
    let appearance = &mut node.appearance;
    appearance.background = None;
    appearance.content_visible = false;
    appearance.interactive = false;
}
