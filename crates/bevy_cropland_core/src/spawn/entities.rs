//! Spawning for the entities layer: farmers, baby carrots and carrot
//! spawn points.

use bevy::prelude::*;
use tiled::LayerType;

use crate::components::actors::{ActorKind, BabyCarrot, Farmer};
use crate::components::level::FarmPieceOf;
use crate::components::pieces::PieceExtent;
use crate::events::ActorSpawned;
use crate::spawn::object_extent;
use crate::systems::context::SpawnContext;

/// Spawn actors from the entities layer.
///
/// Farmers and baby carrots become entities right away. Carrot objects only
/// record their centered position into `spawn_points`; the level spawns no
/// carrot entities until a
/// [`PopulateCarrots`](crate::events::PopulateCarrots) event asks for them.
pub fn spawn_entities_layer(
    commands: &mut Commands,
    level_entity: Entity,
    context: &SpawnContext,
    layer: &tiled::Layer<'_>,
    pieces: &mut Vec<Entity>,
    spawn_points: &mut Vec<Vec2>,
) {
    let LayerType::Objects(object_layer) = layer.layer_type() else {
        warn!("Entities layer '{}' is not an object layer", layer.name);
        return;
    };

    let mut baby_count = 0u32;
    for object in object_layer.objects() {
        let tag = actor_tag(&object);
        let Some(kind) = ActorKind::from_tag(tag) else {
            warn!(
                "Entities object {} in '{}' has unknown class '{tag}'",
                object.id(),
                layer.name
            );
            continue;
        };
        let Some(extent) = object_extent(&object) else {
            warn!(
                "Entities object {} in '{}' has no rectangular extent",
                object.id(),
                layer.name
            );
            continue;
        };

        let center = context
            .geometry
            .object_center(Vec2::new(object.x, object.y), extent);
        let size = context.geometry.size_to_world(extent);

        match kind {
            ActorKind::Carrot => {
                spawn_points.push(center);
            }
            ActorKind::Farmer => {
                let entity = commands
                    .spawn((
                        Farmer,
                        PieceExtent(size),
                        FarmPieceOf(level_entity),
                        Name::new(format!("Farmer: {}", object.id())),
                        Transform::from_xyz(center.x, center.y, 0.0),
                    ))
                    .id();
                pieces.push(entity);
                commands.trigger(ActorSpawned {
                    entity,
                    level_entity,
                    actor: ActorKind::Farmer,
                    center,
                    size,
                });
            }
            ActorKind::BabyCarrot => {
                let index = baby_count;
                baby_count += 1;
                let entity = commands
                    .spawn((
                        BabyCarrot { index },
                        PieceExtent(size),
                        FarmPieceOf(level_entity),
                        Name::new(format!("Baby Carrot {index}")),
                        Transform::from_xyz(center.x, center.y, 0.0),
                    ))
                    .id();
                pieces.push(entity);
                commands.trigger(ActorSpawned {
                    entity,
                    level_entity,
                    actor: ActorKind::BabyCarrot,
                    center,
                    size,
                });
            }
        }
    }
}

/// Class tag of an entities-layer object.
///
/// The object's own class attribute wins; objects placed without one fall
/// back to their name.
fn actor_tag<'obj>(object: &'obj tiled::Object<'_>) -> &'obj str {
    if object.user_type.is_empty() {
        &object.name
    } else {
        &object.user_type
    }
}
