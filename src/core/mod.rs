//! Entity/System Core
//!
//! - [`Entity`] / [`EntityAllocator`]: opaque ids, issued thread-safely
//! - [`ComponentTypeTag`] / [`SystemId`]: runtime type tags for dispatch
//! - [`SystemRegistry`]: which system owns which component type
//! - [`ComponentSystem`]: the capability shared by all data-owning systems
//! - [`World`]: the orchestrator tying the above together

pub mod entity;
pub mod registry;
pub mod system;
pub mod type_tag;
pub mod world;

pub use entity::{Entity, EntityAllocator};
pub use registry::SystemRegistry;
pub use system::ComponentSystem;
pub use type_tag::{Component, ComponentTypeTag, SystemId};
pub use world::World;
