use std::ops::Mul;

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A rigid transform: rotation followed by translation.
///
/// Poses compose like matrices: `parent * child` maps points from the
/// child's frame into the parent's frame's parent, i.e. the child pose is
/// applied first and the parent pose after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
    };

    #[inline]
    #[must_use]
    pub const fn new(orientation: Quat, position: Vec3) -> Self {
        Self {
            orientation,
            position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_translation(position: Vec3) -> Self {
        Self::new(Quat::IDENTITY, position)
    }

    #[inline]
    #[must_use]
    pub const fn from_rotation(orientation: Quat) -> Self {
        Self::new(orientation, Vec3::ZERO)
    }

    /// Extracts the rigid part of an affine transform, discarding scale.
    ///
    /// Shear is lost as well.
    #[must_use]
    pub fn from_affine(affine: &Affine3A) -> Self {
        let (_, orientation, position) = affine.to_scale_rotation_translation();
        Self::new(orientation, position)
    }

    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.orientation * point
    }

    #[inline]
    #[must_use]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.orientation * vector
    }

    /// Returns the pose that undoes `self`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let orientation = self.orientation.inverse();
        Self::new(orientation, orientation * -self.position)
    }

    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.orientation, self.position)
    }

    /// Affine transform with `scale` applied before this pose.
    #[must_use]
    pub fn to_affine_with_scale(&self, scale: Vec3) -> Affine3A {
        Affine3A::from_scale_rotation_translation(scale, self.orientation, self.position)
    }

    /// Component-wise comparison within `max_abs_diff`.
    ///
    /// `q` and `-q` describe the same rotation, so both are accepted.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Pose, max_abs_diff: f32) -> bool {
        let same_rotation = self.orientation.abs_diff_eq(other.orientation, max_abs_diff)
            || self.orientation.abs_diff_eq(-other.orientation, max_abs_diff);
        same_rotation && self.position.abs_diff_eq(other.position, max_abs_diff)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Pose {
    type Output = Pose;

    #[inline]
    fn mul(self, child: Pose) -> Pose {
        Pose::new(
            self.orientation * child.orientation,
            self.transform_point(child.position),
        )
    }
}

impl Mul<Vec3> for Pose {
    type Output = Vec3;

    #[inline]
    fn mul(self, point: Vec3) -> Vec3 {
        self.transform_point(point)
    }
}
