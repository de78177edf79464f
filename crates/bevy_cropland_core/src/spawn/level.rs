//! Top-level layer walk for a farm level.

use bevy::prelude::*;

use crate::components::level::{CarrotSpawnPoints, FarmPieceOf, FarmPieces};
use crate::components::pieces::{Boundary, PieceExtent};
use crate::events::BoundarySpawned;
use crate::spawn::{entities, environment, wheat};
use crate::systems::context::SpawnContext;

/// Spawn every piece of a level as children of `level_entity`.
///
/// Layers are dispatched by name against the configured wheat, environment
/// and entities layers; anything else is skipped with a warning. Afterwards
/// the boundary walls are added (unless disabled) and the level entity
/// receives its [`FarmPieces`], [`CarrotSpawnPoints`] and
/// [`LevelGeometry`](crate::components::level::LevelGeometry).
pub fn spawn_level(commands: &mut Commands, level_entity: Entity, context: &SpawnContext) {
    let mut pieces = Vec::new();
    let mut spawn_points = Vec::new();

    for layer in context.level.map.layers() {
        if !layer.visible {
            debug!("Skipping hidden layer '{}'", layer.name);
            continue;
        }
        if layer.name == context.config.wheat_layer {
            wheat::spawn_wheat_layer(commands, level_entity, context, &layer, &mut pieces);
        } else if layer.name == context.config.environment_layer {
            environment::spawn_environment_layer(commands, level_entity, context, &layer, &mut pieces);
        } else if layer.name == context.config.entities_layer {
            entities::spawn_entities_layer(
                commands,
                level_entity,
                context,
                &layer,
                &mut pieces,
                &mut spawn_points,
            );
        } else {
            warn!("Skipping unrecognized layer '{}'", layer.name);
        }
    }

    if context.config.auto_boundaries {
        spawn_boundaries(commands, level_entity, context, &mut pieces);
    }

    debug!("Spawned {} pieces for level entity {:?}", pieces.len(), level_entity);

    commands
        .entity(level_entity)
        .insert((
            FarmPieces(pieces.clone()),
            CarrotSpawnPoints(spawn_points),
            context.geometry.clone(),
        ))
        .add_children(&pieces);
}

/// Spawn the four walls enclosing the playable area.
fn spawn_boundaries(
    commands: &mut Commands,
    level_entity: Entity,
    context: &SpawnContext,
    pieces: &mut Vec<Entity>,
) {
    let labels = ["left", "right", "bottom", "top"];
    for (rect, label) in context.geometry.boundary_rects().into_iter().zip(labels) {
        let center = rect.center();
        let entity = commands
            .spawn((
                Boundary,
                PieceExtent(rect.size()),
                FarmPieceOf(level_entity),
                Name::new(format!("Boundary: {label}")),
                Transform::from_xyz(center.x, center.y, 0.0),
            ))
            .id();
        pieces.push(entity);
        commands.trigger(BoundarySpawned {
            entity,
            level_entity,
            rect,
        });
    }
}
