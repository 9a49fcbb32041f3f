//! Overlay layer management for single nodes.
//!
//! Keeps a node's [`NodeState`](crate::node::NodeState) and the overlay the
//! [`OverlayLayers`] collaborator drew for it in step: the state owns at most
//! one [`OverlayRef`](crate::id::OverlayRef), and every create, replace or
//! destroy goes through here.

use crate::backend::OverlayLayers;
use crate::config::{SharedConfig, Transition};
use crate::node::{Node, Status};

/// Create the node's overlay and mark it Active.
///
/// The new overlay is not animated; animation starts on the next layout pass.
pub(crate) fn add<L: OverlayLayers>(layers: &mut L, node: &mut Node, config: &SharedConfig) {
    let overlay = layers.create_overlay(node, config);
    tracing::trace!(node = %node.id(), kind = ?overlay.kind(), "overlay created");

    let state = node.state_or_default();
    state.overlay = Some(overlay);
    state.status = Status::Active;
    state.animated = false;
    node.invalidate_layout();
}

/// Swap the node's overlay for one of `config`'s type.
pub(crate) fn replace<L: OverlayLayers>(layers: &mut L, node: &mut Node, config: &SharedConfig) {
    if let Some(old) = node.state_mut().and_then(|s| s.overlay.take()) {
        tracing::trace!(node = %node.id(), from = ?old.kind(), to = ?config.kind, "overlay replaced");
        layers.destroy_overlay(node, old, Transition::None);
    }
    add(layers, node, config);
}

/// Refresh the node's overlay in place and reconcile its animation.
///
/// A stopped overlay whose configuration asks for animation is started right
/// away only when the node is already laid out; otherwise the next layout
/// pass starts it.
pub(crate) fn refresh<L: OverlayLayers>(layers: &mut L, node: &mut Node, config: &SharedConfig) {
    let Some(state) = node.state() else {
        return;
    };
    let Some(overlay) = state.overlay else {
        return;
    };
    let running = state.animated;

    layers.update_overlay(node, overlay, config);
    tracing::trace!(node = %node.id(), "overlay refreshed");

    let animated = if config.animated && !running && !node.needs_layout() {
        layers.start_animation(node, overlay, config.animation);
        true
    } else if !config.animated && running {
        layers.stop_animation(node, overlay);
        false
    } else {
        running
    };
    if let Some(state) = node.state_mut() {
        state.animated = animated;
    }
}

/// Destroy the node's overlay, if it owns one.
pub(crate) fn remove<L: OverlayLayers>(layers: &mut L, node: &mut Node, transition: Transition) {
    let Some(overlay) = node.state_mut().and_then(|s| s.overlay.take()) else {
        return;
    };
    layers.destroy_overlay(node, overlay, transition);
    tracing::trace!(node = %node.id(), ?transition, "overlay destroyed");
    if let Some(state) = node.state_mut() {
        state.animated = false;
    }
}

/// Re-fit the overlay if the node's geometry changed since the last pass.
pub(crate) fn layout_if_needed<L: OverlayLayers>(layers: &mut L, node: &mut Node) {
    let Some(overlay) = node.state().and_then(|s| s.overlay) else {
        return;
    };
    if node.needs_layout() {
        layers.layout_overlay(node, overlay);
        node.mark_laid_out();
    }
}

/// Start the overlay animation unless it is already running.
///
/// `animation` overrides the node's configured animation.
pub(crate) fn start_animation<L: OverlayLayers>(
    layers: &mut L,
    node: &mut Node,
    animation: Option<crate::config::Animation>,
) {
    let Some(state) = node.state() else {
        return;
    };
    let (Some(overlay), false) = (state.overlay, state.animated) else {
        return;
    };
    let Some(animation) = animation.or_else(|| state.config.as_ref().map(|c| c.animation)) else {
        return;
    };
    layers.start_animation(node, overlay, animation);
    if let Some(state) = node.state_mut() {
        state.animated = true;
    }
}

/// Stop the overlay animation if it is running.
pub(crate) fn stop_animation<L: OverlayLayers>(layers: &mut L, node: &mut Node) {
    let Some(state) = node.state() else {
        return;
    };
    let (Some(overlay), true) = (state.overlay, state.animated) else {
        return;
    };
    layers.stop_animation(node, overlay);
    if let Some(state) = node.state_mut() {
        state.animated = false;
    }
}
