//! Spawning for the wheat layer.

use bevy::prelude::*;
use tiled::LayerType;

use crate::components::level::FarmPieceOf;
use crate::components::pieces::{PieceExtent, WheatField};
use crate::events::WheatFieldSpawned;
use crate::systems::context::SpawnContext;

/// Spawn the wheat field described by the first object in the wheat layer.
///
/// The field always covers the whole level; the object exists only to pick
/// the map entry (and with it the distribution texture and blade tint) out
/// of a catalog. Extra objects in the layer are ignored.
pub fn spawn_wheat_layer(
    commands: &mut Commands,
    level_entity: Entity,
    context: &SpawnContext,
    layer: &tiled::Layer<'_>,
    pieces: &mut Vec<Entity>,
) {
    let LayerType::Objects(object_layer) = layer.layer_type() else {
        warn!("Wheat layer '{}' is not an object layer", layer.name);
        return;
    };

    let mut objects = object_layer.objects();
    let Some(object) = objects.next() else {
        warn!("Wheat layer '{}' has no objects", layer.name);
        return;
    };
    let extra = objects.count();
    if extra > 0 {
        debug!("Ignoring {extra} extra objects in wheat layer '{}'", layer.name);
    }

    let Some((catalog, tile_id)) = context.object_tile(&object) else {
        warn!(
            "Wheat object {} in '{}' has no usable tile reference",
            object.id(),
            layer.name
        );
        return;
    };
    let Some(entry) = catalog.map_entry(tile_id) else {
        warn!(
            "Wheat object {} references tile {tile_id} in '{}' which has no map entry",
            object.id(),
            catalog.tileset.name
        );
        return;
    };
    let Some(texture) = catalog.tile_image(tile_id) else {
        warn!(
            "Map tile {tile_id} in '{}' has no distribution image",
            catalog.tileset.name
        );
        return;
    };

    let center = context.geometry.bounds.center();
    let size = context.geometry.bounds.size();
    let entity = commands
        .spawn((
            WheatField {
                map_name: entry.name.clone(),
                blade_color_scale: entry.blade_color_scale,
                texture: texture.clone(),
            },
            PieceExtent(size),
            FarmPieceOf(level_entity),
            Name::new(format!("Wheat Field: {}", entry.name)),
            Transform::from_xyz(center.x, center.y, 0.0),
        ))
        .id();
    pieces.push(entity);
    commands.trigger(WheatFieldSpawned {
        entity,
        level_entity,
        map_name: entry.name,
        blade_color_scale: entry.blade_color_scale,
        texture: texture.clone(),
    });
}
