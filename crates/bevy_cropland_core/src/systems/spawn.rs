//! Reactive systems that spawn, respawn and populate farm levels.

use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;

use bevy_cropland_assets::prelude::{LevelMap, TilesetCatalog};

use crate::components::actors::{ActorKind, Carrot};
use crate::components::level::{
    CarrotSpawnPoints, FarmLevel, FarmPieceOf, FarmPieces, LevelGeometry,
};
use crate::components::pieces::PieceExtent;
use crate::events::{ActorSpawned, LevelSpawned, PopulateCarrots};
use crate::plugin::CroplandCoreConfig;
use crate::spawn::spawn_level;
use crate::systems::context::SpawnContext;

/// Marker component to trigger level respawning.
///
/// Add this component to force the level to be respawned even if its asset
/// hasn't changed.
#[derive(Component)]
pub struct RespawnFarmLevel;

/// Reactive system that spawns a level once its asset tree finishes loading.
///
/// Matches level entities that have never spawned (no [`FarmPieces`]) or
/// that carry [`RespawnFarmLevel`]. A respawn first despawns every piece
/// from the previous pass, so hot reloads never leave stale entities
/// behind.
pub fn process_loaded_levels(
    asset_server: Res<AssetServer>,
    level_assets: Res<Assets<LevelMap>>,
    catalog_assets: Res<Assets<TilesetCatalog>>,
    config: Res<CroplandCoreConfig>,
    mut commands: Commands,
    mut level_query: Query<
        (Entity, &FarmLevel, Option<&FarmPieces>),
        Or<(Without<FarmPieces>, With<RespawnFarmLevel>)>,
    >,
) {
    for (level_entity, level, existing_pieces) in level_query.iter_mut() {
        // Wait until the map and every catalog and image below it are in
        let load_state = asset_server.get_recursive_dependency_load_state(&level.handle);
        let Some(RecursiveDependencyLoadState::Loaded) = load_state else {
            continue;
        };

        let Some(level_asset) = level_assets.get(&level.handle) else {
            warn!("Level asset loaded but not found in Assets resource");
            continue;
        };

        // Tear down pieces from a previous spawn before rebuilding
        if let Some(pieces) = existing_pieces {
            info!(
                "Despawning {} stale pieces for level entity {:?}",
                pieces.0.len(),
                level_entity
            );
            for piece in pieces.0.iter().copied() {
                commands.entity(piece).despawn();
            }
            commands
                .entity(level_entity)
                .remove::<(FarmPieces, CarrotSpawnPoints, LevelGeometry)>();
        }

        let level_name = asset_server
            .get_path(&level.handle)
            .map(|p| {
                p.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Level")
                    .to_string()
            })
            .unwrap_or_else(|| "Level".to_string());

        info!("Spawning level hierarchy for '{}'", level_name);

        commands
            .entity(level_entity)
            .insert(Name::new(format!("Level: {}", level_name)));

        let context = SpawnContext::new(level_asset, &catalog_assets, &config);
        spawn_level(&mut commands, level_entity, &context);

        // Trigger LevelSpawned on the entity for observers
        commands
            .entity(level_entity)
            .trigger(|entity| LevelSpawned { entity });

        commands.entity(level_entity).remove::<RespawnFarmLevel>();
    }
}

/// Queue a respawn for every level whose map asset was modified on disk.
pub fn respawn_changed_levels(
    mut asset_events: MessageReader<AssetEvent<LevelMap>>,
    level_query: Query<(Entity, &FarmLevel)>,
    mut commands: Commands,
) {
    for event in asset_events.read() {
        let AssetEvent::Modified { id } = event else {
            continue;
        };
        for (level_entity, level) in &level_query {
            if level.handle.id() == *id {
                info!("Level asset changed, respawning level entity {:?}", level_entity);
                commands.entity(level_entity).insert(RespawnFarmLevel);
            }
        }
    }
}

/// Observer for [`PopulateCarrots`]: spawn carrots at the recorded points.
pub fn on_populate_carrots(
    trigger: On<PopulateCarrots>,
    mut commands: Commands,
    mut level_query: Query<(&CarrotSpawnPoints, &mut FarmPieces)>,
) {
    let event = trigger.event();
    let level_entity = event.level;
    let Ok((points, mut pieces)) = level_query.get_mut(level_entity) else {
        warn!(
            "PopulateCarrots target {:?} is not a spawned level",
            level_entity
        );
        return;
    };

    let available = points.0.len();
    if event.count > available {
        warn!(
            "Asked for {} carrots but level {:?} recorded only {available} spawn points",
            event.count, level_entity
        );
    }

    let count = event.count.min(available);
    let mut spawned = Vec::with_capacity(count);
    for (index, center) in points.0.iter().take(count).copied().enumerate() {
        let entity = commands
            .spawn((
                Carrot {
                    index: index as u32,
                },
                PieceExtent(Carrot::EXTENT),
                FarmPieceOf(level_entity),
                Name::new(format!("Carrot {index}")),
                Transform::from_xyz(center.x, center.y, 0.0),
            ))
            .id();
        spawned.push(entity);
        commands.trigger(ActorSpawned {
            entity,
            level_entity,
            actor: ActorKind::Carrot,
            center,
            size: Carrot::EXTENT,
        });
    }

    pieces.0.extend(spawned.iter().copied());
    commands.entity(level_entity).add_children(&spawned);
}
