//! Hide traversal.
//!
//! Teardown is top-down (a node drops its hooks and overlay before its
//! children are visited) while the root notification is bottom-up (sent
//! after the whole subtree is done). Every real child is visited, including
//! the children of containers and overlay hosts.

use std::sync::Arc;

use crate::backend::Backend;
use crate::config::Transition;
use crate::flow::FlowEvent;
use crate::node::{Node, Status};
use crate::overlay;

use super::Skeleton;

impl<B: Backend> Skeleton<B> {
    /// Tear the skeleton down on `root` and its whole subtree.
    ///
    /// `reload_data_after` is passed to container placeholder removal;
    /// `transition` animates overlays out. If `root` was Active, the root's
    /// observer gets `did_hide_skeletons` and is then released.
    pub fn hide(&mut self, root: &mut Node, reload_data_after: bool, transition: Transition) {
        let id = root.id();
        tracing::debug!(root = %id, reload_data_after, ?transition, "hide skeleton");

        self.flows.emit(id, FlowEvent::WillBeginHiding);
        if self.hide_node(root, reload_data_after, transition) {
            self.flows.emit(id, FlowEvent::DidHide);
            self.flows.end(id);
        }
    }

    /// Returns whether the node was Active on entry.
    fn hide_node(&mut self, node: &mut Node, reload_data_after: bool, transition: Transition) -> bool {
        let was_active = node.is_active();

        if was_active {
            if node.state().is_some_and(|s| s.hid_for_overlay()) {
                node.hidden = false;
            }
            if let Some(state) = node.state_mut() {
                state.status = Status::TearingDown;
                if let Some(config) = state.config.as_mut() {
                    Arc::make_mut(config).transition = transition;
                }
            }
            self.backend.uninstall_hooks(node);
            if let Some(state) = node.state_mut() {
                state.hooks_installed = false;
            }
        }

        // Checked apart from `was_active` so a half-built state still gets cleaned up.
        if node.state().and_then(|s| s.overlay()).is_some() {
            if let Some(snapshot) = node.state_mut().and_then(|s| s.snapshot.take()) {
                self.backend.restore(node, snapshot, true);
            }
            let transition = node
                .state()
                .and_then(|s| s.config())
                .map_or(transition, |c| c.transition);
            overlay::remove(&mut self.backend, node, transition);
        }

        for child in node.children.iter_mut() {
            self.hide_node(child, reload_data_after, transition);
        }

        if was_active && node.container {
            self.backend.remove_placeholders(node, reload_data_after);
        }
        node.state = None;
        was_active
    }
}
