use std::any::Any;

use crate::core::entity::Entity;
use crate::core::type_tag::{ComponentTypeTag, SystemId};
use crate::errors::Result;

/// The capability every data-owning system exposes.
///
/// Systems store the component data attached to entities and own all logic
/// over it. A dispatcher holding only a [`ComponentTypeTag`] and a
/// type-erased payload can offer that payload to systems without knowing
/// which one accepts it.
pub trait ComponentSystem: Any {
    /// Identity under which this system is registered.
    fn system_id(&self) -> SystemId;

    /// Component types this system owns.
    fn owned_types(&self) -> &[ComponentTypeTag];

    /// Attaches `data` to `entity` if `component_type` is owned by this
    /// system.
    ///
    /// Returns `false`, without touching any state, when the type is not
    /// owned or the payload is not of the type the tag names.
    fn try_create(&mut self, entity: Entity, component_type: ComponentTypeTag, data: &dyn Any) -> bool;

    /// Removes all data this system owns for `entity`.
    ///
    /// Returns `true` if anything was removed. Entities this system knows
    /// nothing about are a no-op returning `false`; the invalid sentinel is
    /// an error.
    fn destroy(&mut self, entity: Entity) -> Result<bool>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns `true` if `component_type` is one of [`owned_types`](Self::owned_types).
    #[inline]
    fn owns(&self, component_type: ComponentTypeTag) -> bool {
        self.owned_types().contains(&component_type)
    }
}
