//! Collider generation for static farm pieces.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_cropland_core::events::{
    BoundarySpawned, DecorationSpawned, ObstructionSpawned, RockSpawned, SpotSpawned,
};

use crate::config::FieldPhysicsConfig;

/// Observer that gives planting spots a static sensor collider.
pub fn on_spot_spawned(
    trigger: On<SpotSpawned>,
    config: Res<FieldPhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    insert_sensor(&mut commands, event.entity, event.size, &config);
}

/// Observer that gives rocks a static sensor collider.
pub fn on_rock_spawned(
    trigger: On<RockSpawned>,
    config: Res<FieldPhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    insert_sensor(&mut commands, event.entity, event.size, &config);
}

/// Observer that gives obstructions a static sensor collider.
pub fn on_obstruction_spawned(
    trigger: On<ObstructionSpawned>,
    config: Res<FieldPhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    insert_sensor(&mut commands, event.entity, event.size, &config);
}

/// Observer that gives decorations a static sensor collider.
pub fn on_decoration_spawned(
    trigger: On<DecorationSpawned>,
    config: Res<FieldPhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    insert_sensor(&mut commands, event.entity, event.size, &config);
}

/// Observer that walls off the level edge with solid static colliders.
pub fn on_boundary_spawned(
    trigger: On<BoundarySpawned>,
    config: Res<FieldPhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let size = event.rect.size();

    commands.entity(event.entity).insert((
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(config.default_friction).with_combine_rule(CoefficientCombine::Average),
        Restitution::new(config.default_restitution).with_combine_rule(CoefficientCombine::Average),
    ));
}

/// Attach a pass-through collider that still reports overlaps.
fn insert_sensor(
    commands: &mut Commands,
    entity: Entity,
    size: Vec2,
    config: &FieldPhysicsConfig,
) {
    commands.entity(entity).insert((
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Sensor,
        ColliderDensity(config.default_density),
        Friction::new(config.default_friction).with_combine_rule(CoefficientCombine::Average),
        Restitution::new(config.default_restitution).with_combine_rule(CoefficientCombine::Average),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_become_static_sensors() {
        let mut world = World::new();
        world.insert_resource(FieldPhysicsConfig::default());
        world.add_observer(on_spot_spawned);

        let level = world.spawn_empty().id();
        let spot = world.spawn(Transform::default()).id();
        world.trigger(SpotSpawned {
            entity: spot,
            level_entity: level,
            index: 0,
            image: None,
            center: Vec2::new(1.5, 4.5),
            size: Vec2::ONE,
        });

        assert_eq!(world.get::<RigidBody>(spot), Some(&RigidBody::Static));
        assert!(world.get::<Sensor>(spot).is_some());
        assert!(world.get::<Collider>(spot).is_some());
        assert_eq!(world.get::<ColliderDensity>(spot).map(|d| d.0), Some(0.0));
    }

    #[test]
    fn test_boundaries_are_solid() {
        let mut world = World::new();
        world.insert_resource(FieldPhysicsConfig::default());
        world.add_observer(on_boundary_spawned);

        let level = world.spawn_empty().id();
        let wall = world.spawn(Transform::default()).id();
        world.trigger(BoundarySpawned {
            entity: wall,
            level_entity: level,
            rect: Rect::from_center_size(Vec2::new(-0.5, 9.0), Vec2::new(1.0, 18.0)),
        });

        assert_eq!(world.get::<RigidBody>(wall), Some(&RigidBody::Static));
        assert!(world.get::<Sensor>(wall).is_none());
        assert!(world.get::<Collider>(wall).is_some());
    }
}
