//! Transform Graph Settings
//!
//! ```rust,ignore
//! use orrery::scene::{GraphSettings, ReparentPolicy, TransformGraph};
//!
//! let settings = GraphSettings {
//!     reparent_policy: ReparentPolicy::Reattach,
//!     ..Default::default()
//! };
//! let graph = TransformGraph::with_settings(&mut registry, settings);
//! ```

use serde::{Deserialize, Serialize};

/// What `add_child` does when the child already has a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReparentPolicy {
    /// Fail with [`OrreryError::AlreadyParented`](crate::errors::OrreryError::AlreadyParented).
    /// Callers detach with `remove_parent` first.
    #[default]
    Reject,
    /// Detach from the previous parent, then attach to the new one.
    Reattach,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSettings {
    pub reparent_policy: ReparentPolicy,
    /// Number of nodes to reserve storage for up front.
    pub initial_capacity: usize,
}
