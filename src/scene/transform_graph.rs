//! Transform Graph
//!
//! Owns the per-entity [`SceneNode`] / [`WorldTransform`] pair and keeps the
//! cached world poses in sync with the hierarchy.
//!
//! # Recomputation
//!
//! World poses are recomputed eagerly and synchronously whenever a local
//! pose changes or the tree is edited. Only the affected subtree is visited:
//!
//! 1. The subtree root reads its parent's cached world pose (already correct,
//!    since it lies outside the edited subtree).
//! 2. Each node composes `parent_world * local` and caches the result.
//! 3. Children are visited after their parent, in child-list order, so every
//!    level reads a world pose that was refreshed in this pass.
//!
//! The walk uses an explicit stack instead of recursion, so arbitrarily deep
//! chains do not grow the call stack.

use std::any::Any;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::core::entity::Entity;
use crate::core::registry::SystemRegistry;
use crate::core::system::ComponentSystem;
use crate::core::type_tag::{Component, ComponentTypeTag, SystemId};
use crate::errors::{OrreryError, Result};
use crate::math::Pose;
use crate::scene::node::{SceneNode, WorldTransform};
use crate::scene::settings::{GraphSettings, ReparentPolicy};

/// The scene-graph system.
///
/// Parent/child links are entity ids, never owning references: the two maps
/// below are the only owners of node data, and a stale id simply fails to
/// resolve.
pub struct TransformGraph {
    nodes: FxHashMap<Entity, SceneNode>,
    world_transforms: FxHashMap<Entity, WorldTransform>,
    settings: GraphSettings,
    owned_types: [ComponentTypeTag; 2],
}

impl TransformGraph {
    /// Creates the graph with default settings and registers it as owner of
    /// [`SceneNode`] and [`WorldTransform`].
    pub fn new(registry: &mut SystemRegistry) -> Self {
        Self::with_settings(registry, GraphSettings::default())
    }

    pub fn with_settings(registry: &mut SystemRegistry, settings: GraphSettings) -> Self {
        let owned_types = [SceneNode::type_tag(), WorldTransform::type_tag()];
        let id = SystemId::of::<Self>();
        for tag in owned_types {
            registry.register_owner(tag, id);
        }

        let capacity = settings.initial_capacity;
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            world_transforms: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            settings,
            owned_types,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Creation & Queries
    // ========================================================================

    /// Gives `entity` a root-level transform and caches its world pose.
    ///
    /// If the entity already has a node it is replaced by a clean one: it is
    /// detached from its old parent and its old children become roots.
    pub fn create(&mut self, entity: Entity, local_pose: Pose, local_scale: Vec3) -> Result<()> {
        if !entity.is_valid() {
            return Err(OrreryError::InvalidEntity { context: "entity" });
        }

        if self.nodes.contains_key(&entity) {
            log::debug!("Resetting transform of entity {entity}");
            self.unlink_from_parent(entity);
            self.orphan_children(entity);
        }

        self.nodes.insert(entity, SceneNode::new(local_pose, local_scale));
        self.world_transforms.insert(entity, WorldTransform::new(local_pose));
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn has_transform(&self, entity: Entity) -> bool {
        entity.is_valid() && self.nodes.contains_key(&entity)
    }

    #[must_use]
    pub fn get_local_transform(&self, entity: Entity) -> Option<&SceneNode> {
        if !entity.is_valid() {
            return None;
        }
        self.nodes.get(&entity)
    }

    #[must_use]
    pub fn get_world_transform(&self, entity: Entity) -> Option<&WorldTransform> {
        if !entity.is_valid() {
            return None;
        }
        self.world_transforms.get(&entity)
    }

    /// Parent of `entity`, or [`Entity::INVALID`] if it is a root or unknown.
    #[must_use]
    pub fn get_parent(&self, entity: Entity) -> Entity {
        self.get_local_transform(entity)
            .map_or(Entity::INVALID, SceneNode::parent)
    }

    /// Children of `entity` in insertion order; empty if unknown.
    #[must_use]
    pub fn children(&self, entity: Entity) -> &[Entity] {
        match self.get_local_transform(entity) {
            Some(node) => node.children(),
            None => &[],
        }
    }

    /// Entities without a parent.
    pub fn roots(&self) -> impl Iterator<Item = Entity> + '_ {
        self.nodes
            .iter()
            .filter(|(_, node)| !node.has_parent())
            .map(|(&entity, _)| entity)
    }

    /// Returns `true` if `ancestor` appears on the parent chain of `entity`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: Entity, entity: Entity) -> bool {
        let mut current = self.get_parent(entity);
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get_parent(current);
        }
        false
    }

    // ========================================================================
    // Local Edits
    // ========================================================================

    /// Replaces the local pose and refreshes the entity's subtree.
    ///
    /// Returns `false` if the entity has no node.
    pub fn set_local_transform(&mut self, entity: Entity, pose: Pose) -> bool {
        let Some(node) = self.get_local_node_mut(entity) else {
            return false;
        };
        node.local_pose = pose;
        self.recompute_subtree(entity);
        true
    }

    /// Replaces the local scale. World poses are rigid, so nothing is
    /// recomputed.
    pub fn set_local_scale(&mut self, entity: Entity, scale: Vec3) -> bool {
        let Some(node) = self.get_local_node_mut(entity) else {
            return false;
        };
        node.local_scale = scale;
        true
    }

    // ========================================================================
    // Structural Edits
    // ========================================================================

    /// Attaches `child` under `parent` and refreshes `parent`'s subtree.
    ///
    /// A child that already has a parent is handled according to
    /// [`GraphSettings::reparent_policy`].
    ///
    /// # Errors
    ///
    /// Fails without touching the graph when either entity has no node,
    /// when `parent == child` ([`OrreryError::SelfParenting`]), or when
    /// `child` is an ancestor of `parent` ([`OrreryError::CyclicParenting`]).
    pub fn add_child(&mut self, parent: Entity, child: Entity) -> Result<()> {
        self.require_node(parent, "parent")?;
        self.require_node(child, "child")?;
        if parent == child {
            return Err(OrreryError::SelfParenting(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(OrreryError::CyclicParenting { parent, child });
        }

        let current_parent = self.get_parent(child);
        if current_parent.is_valid() {
            match self.settings.reparent_policy {
                ReparentPolicy::Reject => {
                    return Err(OrreryError::AlreadyParented {
                        child,
                        parent: current_parent,
                    });
                }
                ReparentPolicy::Reattach => {
                    self.unlink_from_parent(child);
                }
            }
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = parent;
        }
        log::debug!("Attached entity {child} to {parent}");

        self.recompute_subtree(parent);
        Ok(())
    }

    /// Detaches `child` from its parent, leaving it a root in world space.
    ///
    /// No-op if it has no parent.
    pub fn remove_parent(&mut self, child: Entity) -> Result<()> {
        self.require_node(child, "child")?;
        if self.unlink_from_parent(child).is_valid() {
            log::debug!("Detached entity {child}");
            self.recompute_subtree(child);
        }
        Ok(())
    }

    /// Destroys `entity` and all of its descendants, children first.
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        self.require_node(entity, "entity")?;
        self.unlink_from_parent(entity);

        let doomed = self.collect_subtree(entity);
        for &e in doomed.iter().rev() {
            self.world_transforms.remove(&e);
            self.nodes.remove(&e);
        }
        log::debug!("Destroyed entity {entity} ({} transforms removed)", doomed.len());
        Ok(())
    }

    // ========================================================================
    // Recomputation
    // ========================================================================

    /// Recomputes the world poses of `entity`'s subtree.
    ///
    /// Edits already do this; call it after modifying nodes out of band.
    pub fn refresh(&mut self, entity: Entity) -> Result<()> {
        self.require_node(entity, "entity")?;
        self.recompute_subtree(entity);
        Ok(())
    }

    /// Recomputes every world pose in the graph.
    pub fn refresh_all(&mut self) {
        let roots: Vec<Entity> = self.roots().collect();
        for root in roots {
            self.recompute_subtree(root);
        }
    }

    fn recompute_subtree(&mut self, root: Entity) {
        let Some(root_node) = self.nodes.get(&root) else {
            return;
        };
        let parent_world = if root_node.has_parent() {
            self.world_transforms
                .get(&root_node.parent)
                .map(|parent| parent.world_pose)
        } else {
            None
        };

        // (entity, parent world pose); `None` marks a root.
        let mut stack: Vec<(Entity, Option<Pose>)> = Vec::with_capacity(64);
        stack.push((root, parent_world));

        while let Some((entity, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(&entity) else {
                continue;
            };

            let world_pose = match parent_world {
                Some(parent_world) => parent_world * node.local_pose,
                None => node.local_pose,
            };
            self.world_transforms
                .entry(entity)
                .or_default()
                .world_pose = world_pose;
            log::trace!("Entity {entity} world pose {world_pose:?}");

            // Reverse so children pop in child-list order.
            for &child in node.children.iter().rev() {
                stack.push((child, Some(world_pose)));
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn require_node(&self, entity: Entity, context: &'static str) -> Result<()> {
        if !entity.is_valid() {
            return Err(OrreryError::InvalidEntity { context });
        }
        if !self.nodes.contains_key(&entity) {
            return Err(OrreryError::MissingTransform { entity, context });
        }
        Ok(())
    }

    fn get_local_node_mut(&mut self, entity: Entity) -> Option<&mut SceneNode> {
        if !entity.is_valid() {
            return None;
        }
        self.nodes.get_mut(&entity)
    }

    /// Severs the edge to `child`'s parent on both sides. Returns the former
    /// parent. World poses are left stale.
    fn unlink_from_parent(&mut self, child: Entity) -> Entity {
        let Some(child_node) = self.nodes.get_mut(&child) else {
            return Entity::INVALID;
        };
        let parent = std::mem::take(&mut child_node.parent);
        if parent.is_valid()
            && let Some(parent_node) = self.nodes.get_mut(&parent)
        {
            parent_node.children.retain(|c| *c != child);
        }
        parent
    }

    /// Turns every child of `entity` into a root and refreshes it.
    fn orphan_children(&mut self, entity: Entity) {
        let children = match self.nodes.get_mut(&entity) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            if let Some(child_node) = self.nodes.get_mut(&child) {
                child_node.parent = Entity::INVALID;
            }
            self.recompute_subtree(child);
        }
    }

    /// Pre-order listing of `root` and its descendants. Reversed, every
    /// node comes after all of its descendants.
    fn collect_subtree(&self, root: Entity) -> Vec<Entity> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(entity) = stack.pop() {
            order.push(entity);
            if let Some(node) = self.nodes.get(&entity) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }
}

impl ComponentSystem for TransformGraph {
    fn system_id(&self) -> SystemId {
        SystemId::of::<Self>()
    }

    fn owned_types(&self) -> &[ComponentTypeTag] {
        &self.owned_types
    }

    /// Accepts a [`SceneNode`] (its pose and scale seed a new root; its
    /// hierarchy fields are ignored) or a [`WorldTransform`] (the entity
    /// becomes a root whose local pose is that world pose).
    fn try_create(&mut self, entity: Entity, component_type: ComponentTypeTag, data: &dyn Any) -> bool {
        if !self.owns(component_type) {
            return false;
        }

        let (pose, scale) = if component_type == SceneNode::type_tag() {
            match data.downcast_ref::<SceneNode>() {
                Some(node) => (node.local_pose, node.local_scale),
                None => {
                    log::warn!("SceneNode tag offered with a payload of another type");
                    return false;
                }
            }
        } else {
            match data.downcast_ref::<WorldTransform>() {
                Some(world) => (world.world_pose, Vec3::ONE),
                None => {
                    log::warn!("WorldTransform tag offered with a payload of another type");
                    return false;
                }
            }
        };

        self.create(entity, pose, scale).is_ok()
    }

    fn destroy(&mut self, entity: Entity) -> Result<bool> {
        if !entity.is_valid() {
            return Err(OrreryError::InvalidEntity { context: "entity" });
        }
        if !self.nodes.contains_key(&entity) {
            return Ok(false);
        }
        TransformGraph::destroy(self, entity).map(|()| true)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
