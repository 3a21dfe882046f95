use rustc_hash::FxHashMap;

use crate::core::type_tag::{ComponentTypeTag, SystemId};

/// Maps each component type to the system that owns it.
///
/// The registry is plain state owned by the [`World`](crate::core::World)
/// (or whatever orchestrates the systems) and handed by reference to systems
/// while they are constructed, so ownership is declared before first use.
/// Entries live for the lifetime of the registry; there is no removal.
#[derive(Debug, Default)]
pub struct SystemRegistry {
    owners: FxHashMap<ComponentTypeTag, SystemId>,
}

impl SystemRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `system` as the owner of `component_type`.
    ///
    /// Re-registering a type overwrites the previous owner (last write wins).
    pub fn register_owner(&mut self, component_type: ComponentTypeTag, system: SystemId) {
        match self.owners.insert(component_type, system) {
            Some(previous) if previous != system => {
                log::warn!(
                    "Component type {component_type} moved from system {previous} to {system}"
                );
            }
            Some(_) => {}
            None => log::debug!("Component type {component_type} owned by system {system}"),
        }
    }

    #[must_use]
    pub fn lookup_owner(&self, component_type: ComponentTypeTag) -> Option<SystemId> {
        self.owners.get(&component_type).copied()
    }

    /// All component types currently owned by `system`.
    pub fn owned_by(&self, system: SystemId) -> impl Iterator<Item = ComponentTypeTag> + '_ {
        self.owners
            .iter()
            .filter(move |(_, owner)| **owner == system)
            .map(|(tag, _)| *tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
