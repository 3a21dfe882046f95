use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::Entity;
use crate::core::type_tag::Component;
use crate::math::Pose;

/// Child list storage. Most nodes have only a handful of children.
pub type ChildList = SmallVec<[Entity; 4]>;

/// The local half of an entity's transform record.
///
/// # Hierarchy
///
/// Nodes form a forest through weak, identity-only references:
/// - `parent`: the parent entity, or [`Entity::INVALID`] for roots
/// - `children`: child entities in insertion order, which is also the
///   order recomputation visits them
///
/// Neither reference owns anything; the [`TransformGraph`](super::TransformGraph)
/// keeps the two sides consistent across every structural edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub local_pose: Pose,
    pub local_scale: Vec3,
    pub(crate) parent: Entity,
    pub(crate) children: ChildList,
}

impl SceneNode {
    /// A root node with the given local pose and scale.
    #[must_use]
    pub fn new(local_pose: Pose, local_scale: Vec3) -> Self {
        Self {
            local_pose,
            local_scale,
            parent: Entity::INVALID,
            children: ChildList::new(),
        }
    }

    #[must_use]
    pub fn from_pose(local_pose: Pose) -> Self {
        Self::new(local_pose, Vec3::ONE)
    }

    /// Parent entity, [`Entity::INVALID`] for roots.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Entity {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent.is_valid()
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    /// Local TRS matrix, scale included.
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        self.local_pose.to_affine_with_scale(self.local_scale)
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new(Pose::IDENTITY, Vec3::ONE)
    }
}

impl Component for SceneNode {}

/// The cached world-space pose of an entity.
///
/// Derived data: written only by the transform graph whenever the entity's
/// local pose or any ancestor changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldTransform {
    pub(crate) world_pose: Pose,
}

impl WorldTransform {
    #[must_use]
    pub fn new(world_pose: Pose) -> Self {
        Self { world_pose }
    }

    #[inline]
    #[must_use]
    pub fn world_pose(&self) -> &Pose {
        &self.world_pose
    }

    /// World matrix for renderers and physics.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> Affine3A {
        self.world_pose.to_affine()
    }
}

impl Component for WorldTransform {}
