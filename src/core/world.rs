use std::any::Any;

use rustc_hash::FxHashMap;

use crate::core::entity::{Entity, EntityAllocator};
use crate::core::registry::SystemRegistry;
use crate::core::system::ComponentSystem;
use crate::core::type_tag::{ComponentTypeTag, SystemId};
use crate::errors::{OrreryError, Result};

/// Owns the entity allocator, the system registry and the active systems.
///
/// `World` is the orchestrator: it hands out entities, routes type-erased
/// component data to the owning system and tears entities down across every
/// system. It performs no per-frame work of its own.
///
/// ```rust,ignore
/// let mut world = World::new();
/// world.register_system(TransformGraph::new);
///
/// let e = world.create_entity();
/// world.create_component(e, SceneNode::type_tag(), &SceneNode::from_pose(pose))?;
/// let graph = world.system::<TransformGraph>().unwrap();
/// ```
#[derive(Default)]
pub struct World {
    allocator: EntityAllocator,
    registry: SystemRegistry,
    /// Systems in insertion order; dispatch fallbacks walk this order.
    systems: Vec<Box<dyn ComponentSystem>>,
    system_index: FxHashMap<SystemId, usize>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh entity.
    pub fn create_entity(&self) -> Entity {
        self.allocator.allocate()
    }

    #[must_use]
    pub fn allocator(&self) -> &EntityAllocator {
        &self.allocator
    }

    #[must_use]
    pub fn registry(&self) -> &SystemRegistry {
        &self.registry
    }

    /// Constructs a system against this world's registry and adds it.
    ///
    /// Returns `false` if a system with the same id was already present.
    pub fn register_system<S, F>(&mut self, construct: F) -> bool
    where
        S: ComponentSystem,
        F: FnOnce(&mut SystemRegistry) -> S,
    {
        let system = construct(&mut self.registry);
        self.add_system(Box::new(system))
    }

    /// Adds an already-constructed system and registers its owned types.
    ///
    /// The first system added under a given id wins; later duplicates are
    /// dropped and `false` is returned.
    pub fn add_system(&mut self, system: Box<dyn ComponentSystem>) -> bool {
        let id = system.system_id();
        if self.system_index.contains_key(&id) {
            log::warn!("System {id} is already registered; ignoring duplicate");
            return false;
        }

        for &tag in system.owned_types() {
            self.registry.register_owner(tag, id);
        }

        self.system_index.insert(id, self.systems.len());
        self.systems.push(system);
        log::debug!("Added system {id} ({} total)", self.systems.len());
        true
    }

    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    #[must_use]
    pub fn system_by_id(&self, id: SystemId) -> Option<&dyn ComponentSystem> {
        let &index = self.system_index.get(&id)?;
        self.systems.get(index).map(|system| &**system)
    }

    /// Typed access to a system.
    ///
    /// Systems registered under [`SystemId::of::<S>()`](SystemId::of) are
    /// found by index; a system reporting some other id costs a scan.
    #[must_use]
    pub fn system<S: ComponentSystem>(&self) -> Option<&S> {
        if let Some(system) = self
            .typed_index::<S>()
            .and_then(|index| self.systems[index].as_any().downcast_ref::<S>())
        {
            return Some(system);
        }
        self.systems
            .iter()
            .find_map(|system| system.as_any().downcast_ref::<S>())
    }

    /// Typed mutable access to a system.
    pub fn system_mut<S: ComponentSystem>(&mut self) -> Option<&mut S> {
        let index = self
            .typed_index::<S>()
            .filter(|&index| self.systems[index].as_any().is::<S>())
            .or_else(|| {
                self.systems
                    .iter()
                    .position(|system| system.as_any().is::<S>())
            })?;
        self.systems[index].as_any_mut().downcast_mut::<S>()
    }

    fn typed_index<S: ComponentSystem>(&self) -> Option<usize> {
        self.system_index.get(&SystemId::of::<S>()).copied()
    }

    /// Offers component data to the system that owns `component_type`.
    ///
    /// When the registry names an owner that system is tried first; if it
    /// declines (or no owner is registered) every system is offered the data
    /// in insertion order. Returns the id of the accepting system.
    pub fn create_component(
        &mut self,
        entity: Entity,
        component_type: ComponentTypeTag,
        data: &dyn Any,
    ) -> Result<SystemId> {
        if !entity.is_valid() {
            return Err(OrreryError::InvalidEntity { context: "entity" });
        }

        let owner_index = self
            .registry
            .lookup_owner(component_type)
            .and_then(|id| self.system_index.get(&id).copied());

        if let Some(index) = owner_index {
            let system = &mut self.systems[index];
            if system.try_create(entity, component_type, data) {
                return Ok(system.system_id());
            }
        }

        for (index, system) in self.systems.iter_mut().enumerate() {
            if Some(index) == owner_index {
                continue;
            }
            if system.try_create(entity, component_type, data) {
                return Ok(system.system_id());
            }
        }

        Err(OrreryError::UnknownComponentType(component_type))
    }

    /// Removes everything every system owns for `entity`.
    ///
    /// An entity no system holds data for is not an error, only logged.
    pub fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
        if !entity.is_valid() {
            return Err(OrreryError::InvalidEntity { context: "entity" });
        }
        let mut removed = false;
        for system in &mut self.systems {
            removed |= system.destroy(entity)?;
        }
        if !removed {
            log::warn!("Entity {entity} has no data in any system");
        }
        Ok(())
    }
}
