//! Prelude for common imports.
//!
//! ```ignore
//! use skeleton_overlay::prelude::*;
//! ```

// Engine
pub use crate::traverse::{HookEvent, Skeleton};

// Collaborators
pub use crate::backend::{Backend, HookInstaller, OverlayLayers, PlaceholderProvider, SnapshotStore};
pub use crate::snapshot::{AppearanceSnapshots, prepare_appearance};

// Node types
pub use crate::node::{Appearance, Children, Node, NodeState, Status};

// Configuration
pub use crate::config::{Animation, Configuration, SharedConfig, SkeletonType, SlideDirection, Transition};

// Flow
pub use crate::flow::{FlowEvent, FlowObserver, TracingFlow};

// Identity
pub use crate::id::{NodeId, OverlayRef, SnapshotRef};

// Error
pub use crate::error::{Inconsistency, SkeletonError, SkeletonResult};
