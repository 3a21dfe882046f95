//! SystemRegistry tests
//!
//! Tests for:
//! - Owner registration and lookup
//! - Last-write-wins re-registration
//! - Registration performed by system constructors

use orrery::core::{Component, ComponentTypeTag, SystemId, SystemRegistry};
use orrery::scene::{SceneNode, TransformGraph, WorldTransform};

struct Health;
impl Component for Health {}

struct PhysicsSystem;
struct CombatSystem;

#[test]
fn lookup_unknown_type_is_none() {
    let registry = SystemRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.lookup_owner(Health::type_tag()), None);
}

#[test]
fn register_then_lookup() {
    let mut registry = SystemRegistry::new();
    registry.register_owner(Health::type_tag(), SystemId::of::<CombatSystem>());

    assert_eq!(
        registry.lookup_owner(Health::type_tag()),
        Some(SystemId::of::<CombatSystem>())
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn reregistration_overwrites_owner() {
    let mut registry = SystemRegistry::new();
    let tag = ComponentTypeTag::from_name("game::Health");

    registry.register_owner(tag, SystemId::of::<CombatSystem>());
    registry.register_owner(tag, SystemId::of::<PhysicsSystem>());

    assert_eq!(registry.lookup_owner(tag), Some(SystemId::of::<PhysicsSystem>()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn transform_graph_registers_its_types_on_construction() {
    let mut registry = SystemRegistry::new();
    let _graph = TransformGraph::new(&mut registry);

    let id = SystemId::of::<TransformGraph>();
    assert_eq!(registry.lookup_owner(SceneNode::type_tag()), Some(id));
    assert_eq!(registry.lookup_owner(WorldTransform::type_tag()), Some(id));

    let mut owned: Vec<_> = registry.owned_by(id).collect();
    owned.sort();
    let mut expected = vec![SceneNode::type_tag(), WorldTransform::type_tag()];
    expected.sort();
    assert_eq!(owned, expected);
}
