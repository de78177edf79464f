//! Spawning for the environment layer: spots, rocks, obstructions and
//! decorations.

use bevy::prelude::*;
use tiled::LayerType;

use bevy_cropland_schema::TileKind;

use crate::components::level::FarmPieceOf;
use crate::components::pieces::{Decoration, Obstruction, PieceExtent, PlantingSpot, Rock};
use crate::events::{DecorationSpawned, ObstructionSpawned, RockSpawned, SpotSpawned};
use crate::spawn::object_extent;
use crate::systems::context::SpawnContext;

/// Spawn one piece entity per typed object in the environment layer.
///
/// Objects are processed in document order. Planting spots get an index from
/// a running count, so the same level always produces the same numbering.
/// Objects whose tile reference is missing, untyped or unknown are skipped
/// with a warning rather than aborting the level.
pub fn spawn_environment_layer(
    commands: &mut Commands,
    level_entity: Entity,
    context: &SpawnContext,
    layer: &tiled::Layer<'_>,
    pieces: &mut Vec<Entity>,
) {
    let LayerType::Objects(object_layer) = layer.layer_type() else {
        warn!("Environment layer '{}' is not an object layer", layer.name);
        return;
    };

    let mut spot_count = 0u32;
    for object in object_layer.objects() {
        let Some((catalog, tile_id)) = context.object_tile(&object) else {
            warn!(
                "Environment object {} in '{}' has no usable tile reference",
                object.id(),
                layer.name
            );
            continue;
        };
        let Some(kind) = catalog.tile_kind(tile_id) else {
            warn!(
                "Environment object {} references untyped tile {tile_id} in '{}'",
                object.id(),
                catalog.tileset.name
            );
            continue;
        };
        let Some(extent) = object_extent(&object) else {
            warn!(
                "Environment object {} in '{}' has no rectangular extent",
                object.id(),
                layer.name
            );
            continue;
        };

        let center = context
            .geometry
            .object_center(Vec2::new(object.x, object.y), extent);
        let size = context.geometry.size_to_world(extent);
        let transform = Transform::from_xyz(center.x, center.y, 0.0);

        match kind {
            TileKind::PlantingSpot => {
                let index = spot_count;
                spot_count += 1;
                let entity = commands
                    .spawn((
                        PlantingSpot { index },
                        PieceExtent(size),
                        FarmPieceOf(level_entity),
                        Name::new(format!("Planting Spot {index}")),
                        transform,
                    ))
                    .id();
                pieces.push(entity);
                commands.trigger(SpotSpawned {
                    entity,
                    level_entity,
                    index,
                    image: catalog.tile_image(tile_id).cloned(),
                    center,
                    size,
                });
            }
            TileKind::Rock => {
                let entity = commands
                    .spawn((
                        Rock,
                        PieceExtent(size),
                        FarmPieceOf(level_entity),
                        Name::new(format!("Rock: {}", object.id())),
                        transform,
                    ))
                    .id();
                pieces.push(entity);
                commands.trigger(RockSpawned {
                    entity,
                    level_entity,
                    image: catalog.tile_image(tile_id).cloned(),
                    center,
                    size,
                });
            }
            TileKind::Obstacle => {
                let entity = commands
                    .spawn((
                        Obstruction,
                        PieceExtent(size),
                        FarmPieceOf(level_entity),
                        Name::new(format!("Obstruction: {}", object.id())),
                        transform,
                    ))
                    .id();
                pieces.push(entity);
                commands.trigger(ObstructionSpawned {
                    entity,
                    level_entity,
                    image: catalog.tile_image(tile_id).cloned(),
                    center,
                    size,
                });
            }
            TileKind::Decoration => {
                let (Some(image), Some(image_size)) = (
                    catalog.tile_image(tile_id),
                    catalog.tile_image_size(tile_id),
                ) else {
                    warn!(
                        "Decoration tile {tile_id} in '{}' has no image",
                        catalog.tileset.name
                    );
                    continue;
                };
                let sheet = catalog.decoration(tile_id).unwrap_or_default();
                let label = sheet
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("object {}", object.id()));
                let entity = commands
                    .spawn((
                        Decoration {
                            sheet: sheet.clone(),
                            image: image.clone(),
                            image_size,
                        },
                        PieceExtent(size),
                        FarmPieceOf(level_entity),
                        Name::new(format!("Decoration: {label}")),
                        transform,
                    ))
                    .id();
                pieces.push(entity);
                commands.trigger(DecorationSpawned {
                    entity,
                    level_entity,
                    sheet,
                    image: image.clone(),
                    image_size,
                    center,
                    size,
                });
            }
            TileKind::Map => {
                warn!(
                    "Environment object {} references a map tile; map tiles belong in the wheat layer",
                    object.id()
                );
            }
        }
    }
}
