//! Dispatch of intercepted layout and trait-change events.
//!
//! A [`HookInstaller`](crate::backend::HookInstaller) only registers
//! interest; when the host later sees a layout pass or a trait change on a
//! hooked node it reports it here with the node's id.

use crate::backend::Backend;
use crate::error::{SkeletonError, SkeletonResult};
use crate::id::NodeId;
use crate::node::Node;

use super::Skeleton;

/// Event reported by an installed hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// The node laid out its children.
    LayoutChanged,
    /// Appearance traits (color scheme, contrast) changed.
    TraitChanged,
}

impl<B: Backend> Skeleton<B> {
    /// Handle a hook event for `target`, a node somewhere under `root`.
    ///
    /// Events for nodes without installed hooks are ignored. A layout event
    /// re-lays the target's subtree; a trait change re-applies the target's
    /// current configuration without notifying.
    pub fn handle_hook(&mut self, root: &mut Node, target: NodeId, event: HookEvent) -> SkeletonResult<()> {
        let node = root
            .get_mut(target)
            .ok_or(SkeletonError::NodeNotFound(target))?;

        let Some(state) = node.state() else {
            return Ok(());
        };
        if !state.hooks_installed() {
            return Ok(());
        }
        tracing::trace!(node = %target, ?event, "hook event");

        match event {
            HookEvent::LayoutChanged => self.layout_if_needed(node),
            HookEvent::TraitChanged => {
                if let Some(config) = state.config().cloned() {
                    self.update(node, config, false);
                }
            }
        }
        Ok(())
    }
}
