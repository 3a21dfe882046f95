//! Math Types
//!
//! Vector and quaternion types come straight from `glam`; this module only
//! adds the rigid [`Pose`] used by the transform graph.

pub mod pose;

pub use glam::{Affine3A, Quat, Vec3};
pub use pose::Pose;
