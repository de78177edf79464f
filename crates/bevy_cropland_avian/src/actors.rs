//! Dynamic bodies for farm actors and the speed feed for render layers.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_cropland_core::components::TrackedSpeed;
use bevy_cropland_core::events::ActorSpawned;

use crate::config::FieldPhysicsConfig;

/// Observer that gives actors dynamic rotation-locked bodies.
///
/// The collider covers a shrunken fraction of the actor's footprint, per
/// [`FieldPhysicsConfig::actor_shrink`].
pub fn on_actor_spawned(
    trigger: On<ActorSpawned>,
    config: Res<FieldPhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let size = event.size * config.actor_shrink;

    commands.entity(event.entity).insert((
        RigidBody::Dynamic,
        Collider::rectangle(size.x, size.y),
        ColliderDensity(config.actor_density),
        Friction::new(config.actor_friction).with_combine_rule(CoefficientCombine::Average),
        Restitution::new(config.actor_restitution).with_combine_rule(CoefficientCombine::Average),
        LockedAxes::ROTATION_LOCKED,
        TrackedSpeed::default(),
    ));

    debug!("Actor {:?} ({:?}) got a dynamic body", event.entity, event.actor);
}

/// System that mirrors the magnitude of Avian's linear velocity into
/// [`TrackedSpeed`] for layers that cannot depend on the physics backend.
pub fn track_actor_speeds(mut actors: Query<(&LinearVelocity, &mut TrackedSpeed)>) {
    for (velocity, mut speed) in &mut actors {
        let magnitude = velocity.length();
        if (speed.0 - magnitude).abs() > f32::EPSILON {
            speed.0 = magnitude;
        }
    }
}
