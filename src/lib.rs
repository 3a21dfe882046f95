//! Orrery
//!
//! An entity-component runtime whose centrepiece is a hierarchical transform
//! graph:
//!
//! - [`core`]: entity ids, component type tags, the system registry and the
//!   [`World`] orchestrator
//! - [`scene`]: the [`TransformGraph`] system and its per-entity records
//! - [`math`]: the rigid [`Pose`] type
//!
//! ```rust,ignore
//! use orrery::prelude::*;
//!
//! let mut world = World::new();
//! world.register_system(TransformGraph::new);
//!
//! let root = world.create_entity();
//! let child = world.create_entity();
//!
//! let graph = world.system_mut::<TransformGraph>().unwrap();
//! graph.create(root, Pose::from_translation(Vec3::Y), Vec3::ONE)?;
//! graph.create(child, Pose::from_translation(Vec3::Z), Vec3::ONE)?;
//! graph.add_child(root, child)?;
//! ```

pub mod core;
pub mod errors;
pub mod math;
pub mod scene;

pub use crate::core::{
    Component, ComponentSystem, ComponentTypeTag, Entity, EntityAllocator, SystemId,
    SystemRegistry, World,
};
pub use errors::{OrreryError, Result};
pub use math::Pose;
pub use scene::{GraphSettings, ReparentPolicy, SceneNode, TransformGraph, WorldTransform};

pub mod prelude {
    pub use crate::core::{
        Component, ComponentSystem, ComponentTypeTag, Entity, EntityAllocator, SystemId,
        SystemRegistry, World,
    };
    pub use crate::errors::{OrreryError, Result};
    pub use crate::math::{Affine3A, Pose, Quat, Vec3};
    pub use crate::scene::{GraphSettings, ReparentPolicy, SceneNode, TransformGraph, WorldTransform};
}
