//! Skeleton flow notifications.
//!
//! A [`FlowObserver`] hears about each phase of a root-level call: once
//! before the traversal starts and once after the whole subtree is done,
//! never per node. Observers are scoped to a root: a notifying `show`
//! creates a fresh one, later `update`/`hide`/layout calls on the same root
//! reuse it, and it is dropped once the root is fully hidden.

use rustc_hash::FxHashMap;

use crate::id::NodeId;

/// Phase notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowEvent {
    WillBeginShowing,
    DidShow,
    WillBeginUpdating,
    DidUpdate,
    WillBeginHiding,
    DidHide,
    WillBeginLayingOut,
    DidLayoutIfNeeded,
}

/// Listener for skeleton phases on one root.
///
/// Every method defaults to [`on_event`](FlowObserver::on_event), so
/// implementors can either override single phases or handle all of them in
/// one place.
pub trait FlowObserver {
    fn on_event(&mut self, _root: NodeId, _event: FlowEvent) {}

    fn will_begin_showing(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::WillBeginShowing);
    }

    fn did_show_skeletons(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::DidShow);
    }

    fn will_begin_updating(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::WillBeginUpdating);
    }

    fn did_update_skeletons(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::DidUpdate);
    }

    fn will_begin_hiding(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::WillBeginHiding);
    }

    fn did_hide_skeletons(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::DidHide);
    }

    fn will_begin_laying_out(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::WillBeginLayingOut);
    }

    fn did_layout_skeletons_if_needed(&mut self, root: NodeId) {
        self.on_event(root, FlowEvent::DidLayoutIfNeeded);
    }
}

/// Observer that reports every phase as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFlow;

impl FlowObserver for TracingFlow {
    fn on_event(&mut self, root: NodeId, event: FlowEvent) {
        tracing::debug!(root = %root, ?event, "skeleton flow");
    }
}

/// Creates the observer for a notifying `show` on a root.
pub type ObserverFactory = Box<dyn FnMut(NodeId) -> Box<dyn FlowObserver>>;

// =============================================================================
// FlowRegistry
// =============================================================================

/// Live observers keyed by root.
#[derive(Default)]
pub(crate) struct FlowRegistry {
    factory: Option<ObserverFactory>,
    observers: FxHashMap<NodeId, Box<dyn FlowObserver>>,
}

impl FlowRegistry {
    pub(crate) fn set_factory(&mut self, factory: ObserverFactory) {
        self.factory = Some(factory);
    }

    /// Replace the root's observer with a fresh one from the factory.
    pub(crate) fn begin(&mut self, root: NodeId) {
        if let Some(factory) = self.factory.as_mut() {
            self.observers.insert(root, factory(root));
        }
    }

    /// Drop the root's observer.
    pub(crate) fn end(&mut self, root: NodeId) {
        self.observers.remove(&root);
    }

    pub(crate) fn is_observed(&self, root: NodeId) -> bool {
        self.observers.contains_key(&root)
    }

    /// Deliver an event to the root's observer, if it has one.
    pub(crate) fn emit(&mut self, root: NodeId, event: FlowEvent) {
        let Some(observer) = self.observers.get_mut(&root) else {
            return;
        };
        match event {
            FlowEvent::WillBeginShowing => observer.will_begin_showing(root),
            FlowEvent::DidShow => observer.did_show_skeletons(root),
            FlowEvent::WillBeginUpdating => observer.will_begin_updating(root),
            FlowEvent::DidUpdate => observer.did_update_skeletons(root),
            FlowEvent::WillBeginHiding => observer.will_begin_hiding(root),
            FlowEvent::DidHide => observer.did_hide_skeletons(root),
            FlowEvent::WillBeginLayingOut => observer.will_begin_laying_out(root),
            FlowEvent::DidLayoutIfNeeded => observer.did_layout_skeletons_if_needed(root),
        }
    }
}

impl std::fmt::Debug for FlowRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowRegistry")
            .field("has_factory", &self.factory.is_some())
            .field("observed_roots", &self.observers.len())
            .finish()
    }
}
