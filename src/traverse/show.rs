//! Show traversal.

use crate::backend::Backend;
use crate::config::SharedConfig;
use crate::flow::FlowEvent;
use crate::node::{Node, Status};
use crate::overlay;

use super::Skeleton;
use super::step::ShowStep;

impl<B: Backend> Skeleton<B> {
    /// Show the skeleton on `root` and its subtree.
    ///
    /// With `notify`, a fresh flow observer is attached to the root and told
    /// `will_begin_showing` first. `did_show_skeletons` goes to the root's
    /// observer once the whole subtree is done. Showing an already Active
    /// root only re-applies `hide_when_active` and sends no `did_show`.
    pub fn show(&mut self, root: &mut Node, config: impl Into<SharedConfig>, notify: bool) {
        let config = config.into();
        let id = root.id();
        tracing::debug!(root = %id, kind = ?config.kind, animated = config.animated, "show skeleton");

        if notify {
            self.flows.begin(id);
            self.flows.emit(id, FlowEvent::WillBeginShowing);
        }
        if self.show_node(root, &config) {
            self.flows.emit(id, FlowEvent::DidShow);
        }
    }

    /// Returns false if the node was already Active.
    fn show_node(&mut self, node: &mut Node, config: &SharedConfig) -> bool {
        let hid_now = node.hide_when_active && !node.hidden;
        if node.hide_when_active {
            node.hidden = true;
        }

        let step = ShowStep::decide(node);
        if step == ShowStep::Stop {
            if hid_now {
                if let Some(state) = node.state_mut() {
                    state.hid_for_overlay = true;
                }
            }
            return false;
        }

        let state = node.state_or_default();
        state.hid_for_overlay |= hid_now;
        state.status = Status::Active;
        state.config = Some(SharedConfig::clone(config));
        self.backend.install_hooks(node);
        node.state_or_default().hooks_installed = true;

        match step {
            ShowStep::Stop => {}
            ShowStep::Placeholders => {
                tracing::trace!(node = %node.id(), "substituting placeholders");
                self.backend.add_placeholders(node);
            }
            ShowStep::Overlay => {
                if node.state().and_then(|s| s.snapshot()).is_none() {
                    let snapshot = self.backend.capture(node);
                    node.state_or_default().snapshot = Some(snapshot);
                }
                self.backend.prepare(node);
                overlay::add(&mut self.backend, node, config);
            }
            ShowStep::Recurse => {
                for child in node.children.iter_mut() {
                    self.show_node(child, config);
                }
            }
        }
        true
    }
}
