//! Builds a small hierarchy through the `World`, then walks through the
//! structural edits: attach, detach, destroy.
//!
//! Run with `RUST_LOG=debug` to see the graph's own logging.

use std::f32::consts::FRAC_PI_2;

use orrery::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut world = World::new();
    world.register_system(TransformGraph::new);

    let root = world.create_entity();
    let child1 = world.create_entity();
    let child2 = world.create_entity();

    // Component data can also be routed by type tag alone.
    let root_node = SceneNode::from_pose(Pose::new(
        Quat::from_rotation_y(FRAC_PI_2),
        Vec3::new(0.0, 5.0, 0.0),
    ));
    world.create_component(root, SceneNode::type_tag(), &root_node)?;

    let graph = world
        .system_mut::<TransformGraph>()
        .ok_or_else(|| anyhow::anyhow!("transform graph is not registered"))?;

    graph.create(
        child1,
        Pose::new(Quat::from_rotation_y(-FRAC_PI_2), Vec3::new(0.0, 0.0, 3.0)),
        Vec3::ONE,
    )?;
    graph.create(child2, Pose::from_translation(Vec3::new(4.0, 0.0, 0.0)), Vec3::ONE)?;

    graph.add_child(root, child1)?;
    graph.add_child(root, child2)?;

    for (label, e) in [("Root", root), ("First child", child1), ("Second child", child2)] {
        if let Some(world_transform) = graph.get_world_transform(e) {
            println!("{label} world pose: {:?}", world_transform.world_pose());
        }
        println!("Parent of {label} is {}", graph.get_parent(e));
    }

    graph.remove_parent(child1)?;
    println!("First child detached, parent is now {}", graph.get_parent(child1));
    if let Some(world_transform) = graph.get_world_transform(child1) {
        println!("First child world pose: {:?}", world_transform.world_pose());
    }

    world.destroy_entity(child1)?;
    let graph = world
        .system::<TransformGraph>()
        .ok_or_else(|| anyhow::anyhow!("transform graph is not registered"))?;
    println!(
        "First child destroyed, transform present: {}",
        graph.get_local_transform(child1).is_some()
    );

    Ok(())
}
