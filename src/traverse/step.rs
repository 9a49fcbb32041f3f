//! Per-node traversal decisions.
//!
//! Each traversal asks one question per node and gets back exactly one
//! step. Hosting an overlay, substituting placeholders and descending into
//! children are separate variants, so a node can never take two of them.

use crate::config::Configuration;
use crate::id::OverlayRef;
use crate::node::Node;

/// What `show` does at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShowStep {
    /// Already Active: leave state and overlay untouched.
    Stop,
    /// Container: substitute placeholder data, do not descend.
    Placeholders,
    /// Overlay host: snapshot, prepare and cover the node itself.
    Overlay,
    /// Structural: descend into every child.
    Recurse,
}

impl ShowStep {
    pub(crate) fn decide(node: &Node) -> Self {
        if node.is_active() {
            Self::Stop
        } else if node.container {
            Self::Placeholders
        } else if node.skeletonable {
            Self::Overlay
        } else {
            Self::Recurse
        }
    }
}

/// What `update` does at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateStep {
    /// Not Active: nothing was shown here.
    Stop,
    /// Container: refresh placeholder data, do not descend.
    Placeholders,
    /// Overlay host whose overlay type differs from the new configuration.
    Replace(OverlayRef),
    /// Overlay host: refresh its overlay in place.
    Refresh,
    /// Structural: descend into every child.
    Recurse,
}

impl UpdateStep {
    pub(crate) fn decide(node: &Node, config: &Configuration) -> Self {
        if !node.is_active() {
            return Self::Stop;
        }
        if node.container {
            return Self::Placeholders;
        }
        if !node.skeletonable {
            return Self::Recurse;
        }
        match node.state().and_then(|s| s.overlay()) {
            Some(overlay) if overlay.kind() != config.kind => Self::Replace(overlay),
            _ => Self::Refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkeletonType;
    use crate::node::Status;
    use std::sync::Arc;

    fn activate(node: &mut Node, overlay: Option<OverlayRef>) {
        let state = node.state_or_default();
        state.status = Status::Active;
        state.hooks_installed = true;
        state.overlay = overlay;
    }

    #[test]
    fn test_show_steps_are_exclusive() {
        assert_eq!(ShowStep::decide(&Node::new("div")), ShowStep::Recurse);
        assert_eq!(ShowStep::decide(&Node::new("label").skeletonable()), ShowStep::Overlay);
        assert_eq!(ShowStep::decide(&Node::new("list").container()), ShowStep::Placeholders);
        assert_eq!(
            ShowStep::decide(&Node::new("grid").skeletonable().container()),
            ShowStep::Placeholders
        );

        let mut active = Node::new("label").skeletonable();
        activate(&mut active, Some(OverlayRef::new(1, SkeletonType::Solid)));
        assert_eq!(ShowStep::decide(&active), ShowStep::Stop);
    }

    #[test]
    fn test_update_steps() {
        let solid = OverlayRef::new(1, SkeletonType::Solid);
        let gradient = Configuration::GRADIENT;

        assert_eq!(UpdateStep::decide(&Node::new("label").skeletonable(), &gradient), UpdateStep::Stop);

        let mut host = Node::new("label").skeletonable();
        activate(&mut host, Some(solid));
        assert_eq!(UpdateStep::decide(&host, &gradient), UpdateStep::Replace(solid));
        assert_eq!(UpdateStep::decide(&host, &Configuration::SOLID), UpdateStep::Refresh);

        let mut list = Node::new("list").skeletonable().container();
        activate(&mut list, None);
        assert_eq!(UpdateStep::decide(&list, &gradient), UpdateStep::Placeholders);

        let mut div = Node::new("div");
        activate(&mut div, None);
        div.state_or_default().config = Some(Arc::new(Configuration::SOLID));
        assert_eq!(UpdateStep::decide(&div, &gradient), UpdateStep::Recurse);
    }
}
