//! Traversal engine.
//!
//! [`Skeleton`] walks a view tree depth-first and drives the host's
//! [`Backend`] per node. Every public entry point is a root-level call: it
//! runs one internal recursive walk (which never notifies) and then fires
//! the phase-end notification for the root exactly once.
//!
//! | Entry point | Walk |
//! |---|---|
//! | [`show`](Skeleton::show) | stops at overlay hosts, containers and Active nodes |
//! | [`update`](Skeleton::update) | Active nodes only, same boundaries as show |
//! | [`hide`](Skeleton::hide) | every node, teardown before descending |
//! | [`layout_if_needed`](Skeleton::layout_if_needed) | every node |
//! | [`start_animation`](Skeleton::start_animation) / [`stop_animation`](Skeleton::stop_animation) | every node |
//!
//! All calls are synchronous and run to completion. Calls on overlapping
//! subtrees must be serialized by the caller.

mod hide;
mod hooks;
mod layout;
mod show;
mod step;
mod update;

pub use hooks::HookEvent;

use crate::backend::Backend;
use crate::flow::{FlowObserver, FlowRegistry};
use crate::id::NodeId;

/// Skeleton traversal engine over a host backend.
#[derive(Debug)]
pub struct Skeleton<B> {
    backend: B,
    flows: FlowRegistry,
}

impl<B: Backend> Skeleton<B> {
    /// Create an engine without flow observers.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            flows: FlowRegistry::default(),
        }
    }

    /// Create a fresh observer for every notifying [`show`](Self::show).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let skeleton = Skeleton::new(host)
    ///     .with_flow_observer(|_root| Box::new(TracingFlow));
    /// ```
    pub fn with_flow_observer<F>(mut self, factory: F) -> Self
    where
        F: FnMut(NodeId) -> Box<dyn FlowObserver> + 'static,
    {
        self.flows.set_factory(Box::new(factory));
        self
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Whether a flow observer is attached to this root.
    pub fn is_observed(&self, root: NodeId) -> bool {
        self.flows.is_observed(root)
    }
}
