//! Layout re-application and overlay animation.

use crate::backend::Backend;
use crate::config::Animation;
use crate::flow::FlowEvent;
use crate::node::Node;
use crate::overlay;

use super::Skeleton;

impl<B: Backend> Skeleton<B> {
    /// Re-fit stale overlays in the subtree and start pending animations.
    ///
    /// Overlays that should animate start here rather than in
    /// [`show`](Self::show), once their geometry is final. Always sends
    /// `will_begin_laying_out` / `did_layout_skeletons_if_needed` to the
    /// root's observer, if it has one.
    pub fn layout_if_needed(&mut self, root: &mut Node) {
        let id = root.id();
        tracing::debug!(root = %id, "layout skeleton if needed");

        self.flows.emit(id, FlowEvent::WillBeginLayingOut);
        self.layout_node(root);
        self.flows.emit(id, FlowEvent::DidLayoutIfNeeded);
    }

    fn layout_node(&mut self, node: &mut Node) {
        if node.skeletonable && node.is_active() {
            overlay::layout_if_needed(&mut self.backend, node);
            let wants_animation = node
                .state()
                .and_then(|s| s.config())
                .is_some_and(|c| c.animated);
            if wants_animation {
                overlay::start_animation(&mut self.backend, node, None);
            }
        }
        for child in node.children.iter_mut() {
            self.layout_node(child);
        }
    }

    /// Start overlay animations across the subtree.
    ///
    /// `animation` overrides each node's configured animation. Overlays that
    /// already run are left alone.
    pub fn start_animation(&mut self, root: &mut Node, animation: Option<Animation>) {
        tracing::debug!(root = %root.id(), ?animation, "start skeleton animation");
        self.animate_node(root, Some(animation));
    }

    /// Stop overlay animations across the subtree.
    pub fn stop_animation(&mut self, root: &mut Node) {
        tracing::debug!(root = %root.id(), "stop skeleton animation");
        self.animate_node(root, None);
    }

    /// `Some(override)` starts, `None` stops.
    fn animate_node(&mut self, node: &mut Node, start: Option<Option<Animation>>) {
        if node.is_active() {
            match start {
                Some(animation) => overlay::start_animation(&mut self.backend, node, animation),
                None => overlay::stop_animation(&mut self.backend, node),
            }
        }
        for child in node.children.iter_mut() {
            self.animate_node(child, start);
        }
    }
}
