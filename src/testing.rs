//! Test doubles: a recording backend and a recording flow observer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{HookInstaller, OverlayLayers, PlaceholderProvider, SnapshotStore};
use crate::config::{Animation, Configuration, SkeletonType, Transition};
use crate::flow::{FlowEvent, FlowObserver};
use crate::id::{NodeId, OverlayRef, SnapshotRef};
use crate::node::Node;
use crate::snapshot::{AppearanceSnapshots, prepare_appearance};
use crate::traverse::Skeleton;

/// One collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Capture(NodeId),
    Restore(NodeId, bool),
    Prepare(NodeId),
    Create(NodeId, SkeletonType),
    Update(NodeId, SkeletonType),
    Destroy(NodeId, Transition),
    Layout(NodeId),
    StartAnimation(NodeId),
    StopAnimation(NodeId),
    Install(NodeId),
    Uninstall(NodeId),
    AddPlaceholders(NodeId),
    UpdatePlaceholders(NodeId),
    RemovePlaceholders(NodeId, bool),
}

impl Call {
    pub(crate) fn node(&self) -> NodeId {
        match self {
            Call::Capture(id)
            | Call::Restore(id, _)
            | Call::Prepare(id)
            | Call::Create(id, _)
            | Call::Update(id, _)
            | Call::Destroy(id, _)
            | Call::Layout(id)
            | Call::StartAnimation(id)
            | Call::StopAnimation(id)
            | Call::Install(id)
            | Call::Uninstall(id)
            | Call::AddPlaceholders(id)
            | Call::UpdatePlaceholders(id)
            | Call::RemovePlaceholders(id, _) => *id,
        }
    }
}

/// Backend that records every call and keeps real appearance snapshots.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub calls: Vec<Call>,
    pub snapshots: AppearanceSnapshots,
    next_overlay: u64,
}

impl Recorder {
    pub(crate) fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(c)).count()
    }

    pub(crate) fn calls_for(&self, node: NodeId) -> Vec<Call> {
        self.calls.iter().filter(|c| c.node() == node).cloned().collect()
    }
}

impl SnapshotStore for Recorder {
    fn capture(&mut self, node: &Node) -> SnapshotRef {
        self.calls.push(Call::Capture(node.id()));
        self.snapshots.capture(node)
    }

    fn restore(&mut self, node: &mut Node, snapshot: SnapshotRef, forced: bool) {
        self.calls.push(Call::Restore(node.id(), forced));
        self.snapshots.restore(node, snapshot, forced);
    }
}

impl HookInstaller for Recorder {
    fn install_hooks(&mut self, node: &Node) {
        self.calls.push(Call::Install(node.id()));
    }

    fn uninstall_hooks(&mut self, node: &Node) {
        self.calls.push(Call::Uninstall(node.id()));
    }
}

impl OverlayLayers for Recorder {
    fn prepare(&mut self, node: &mut Node) {
        self.calls.push(Call::Prepare(node.id()));
        prepare_appearance(node);
    }

    fn create_overlay(&mut self, node: &Node, config: &Configuration) -> OverlayRef {
        self.calls.push(Call::Create(node.id(), config.kind));
        self.next_overlay += 1;
        OverlayRef::new(self.next_overlay, config.kind)
    }

    fn update_overlay(&mut self, node: &Node, _overlay: OverlayRef, config: &Configuration) {
        self.calls.push(Call::Update(node.id(), config.kind));
    }

    fn destroy_overlay(&mut self, node: &Node, _overlay: OverlayRef, transition: Transition) {
        self.calls.push(Call::Destroy(node.id(), transition));
    }

    fn layout_overlay(&mut self, node: &Node, _overlay: OverlayRef) {
        self.calls.push(Call::Layout(node.id()));
    }

    fn start_animation(&mut self, node: &Node, _overlay: OverlayRef, _animation: Animation) {
        self.calls.push(Call::StartAnimation(node.id()));
    }

    fn stop_animation(&mut self, node: &Node, _overlay: OverlayRef) {
        self.calls.push(Call::StopAnimation(node.id()));
    }
}

impl PlaceholderProvider for Recorder {
    fn add_placeholders(&mut self, node: &Node) {
        self.calls.push(Call::AddPlaceholders(node.id()));
    }

    fn update_placeholders(&mut self, node: &Node) {
        self.calls.push(Call::UpdatePlaceholders(node.id()));
    }

    fn remove_placeholders(&mut self, node: &Node, reload_after: bool) {
        self.calls.push(Call::RemovePlaceholders(node.id(), reload_after));
    }
}

/// Shared log of flow events. Clones append to the same log; `tagged`
/// marks which observer instance delivered each entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct FlowLog {
    entries: Rc<RefCell<Vec<(NodeId, FlowEvent, u32)>>>,
    tag: u32,
}

impl FlowLog {
    pub(crate) fn tagged(&self, tag: u32) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            tag,
        }
    }

    pub(crate) fn entries(&self) -> Vec<(NodeId, FlowEvent)> {
        self.entries.borrow().iter().map(|(r, e, _)| (*r, *e)).collect()
    }

    pub(crate) fn events(&self) -> Vec<FlowEvent> {
        self.entries.borrow().iter().map(|(_, e, _)| *e).collect()
    }

    pub(crate) fn tags(&self) -> Vec<u32> {
        self.entries.borrow().iter().map(|(_, _, t)| *t).collect()
    }

    pub(crate) fn count(&self, event: FlowEvent) -> usize {
        self.entries.borrow().iter().filter(|(_, e, _)| *e == event).count()
    }

    pub(crate) fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl FlowObserver for FlowLog {
    fn on_event(&mut self, root: NodeId, event: FlowEvent) {
        self.entries.borrow_mut().push((root, event, self.tag));
    }
}

/// Engine over a [`Recorder`] whose notifying shows log into the returned
/// [`FlowLog`], tagging each observer with its creation order.
pub(crate) fn observed_skeleton() -> (Skeleton<Recorder>, FlowLog) {
    let log = FlowLog::default();
    let factory_log = log.clone();
    let mut created = 0;
    let skeleton = Skeleton::new(Recorder::default()).with_flow_observer(move |_| {
        created += 1;
        Box::new(factory_log.tagged(created))
    });
    (skeleton, log)
}
