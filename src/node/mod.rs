//! View tree types.
//!
//! - [`Node`]: one element of the tree, owning its children
//! - [`NodeState`]: overlay bookkeeping attached to a node while a skeleton
//!   is shown
//! - [`Appearance`]: the visual properties snapshots capture and restore

mod query;
mod state;
mod view;

pub use query::NodeIter;
pub use state::{NodeState, Status};
pub use view::{Appearance, Node};

/// Type alias for children collection.
///
/// Heap-backed: inline storage would make `Node` infinitely sized.
pub type Children = Vec<Node>;
