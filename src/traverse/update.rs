//! Update traversal.

use crate::backend::Backend;
use crate::config::SharedConfig;
use crate::flow::FlowEvent;
use crate::node::Node;
use crate::overlay;

use super::Skeleton;
use super::step::UpdateStep;

impl<B: Backend> Skeleton<B> {
    /// Re-apply a configuration to an already shown subtree.
    ///
    /// Overlays whose type changes are replaced; all others are refreshed in
    /// place. Does nothing (and sends no `did_update`) if `root` is not
    /// Active. `notify` controls `will_begin_updating` only.
    pub fn update(&mut self, root: &mut Node, config: impl Into<SharedConfig>, notify: bool) {
        let config = config.into();
        let id = root.id();
        tracing::debug!(root = %id, kind = ?config.kind, animated = config.animated, "update skeleton");

        if notify {
            self.flows.emit(id, FlowEvent::WillBeginUpdating);
        }
        if self.update_node(root, &config) {
            self.flows.emit(id, FlowEvent::DidUpdate);
        }
    }

    /// Returns false if the node was not Active.
    fn update_node(&mut self, node: &mut Node, config: &SharedConfig) -> bool {
        let step = UpdateStep::decide(node, config);
        if step == UpdateStep::Stop {
            return false;
        }
        if let Some(state) = node.state_mut() {
            state.config = Some(SharedConfig::clone(config));
        }

        match step {
            UpdateStep::Stop => {}
            UpdateStep::Placeholders => self.backend.update_placeholders(node),
            UpdateStep::Replace(_) => overlay::replace(&mut self.backend, node, config),
            UpdateStep::Refresh => overlay::refresh(&mut self.backend, node, config),
            UpdateStep::Recurse => {
                for child in node.children.iter_mut() {
                    self.update_node(child, config);
                }
            }
        }
        true
    }
}
