//! Wheat shader feed: scrolling clocks and per-frame entity uniforms.
//!
//! The wheat and ground shaders are the game's own; this module keeps a
//! [`WheatShaderInput`] component on each wheat field entity filled with
//! everything those shaders need per frame, so the game's material code only
//! has to copy it into uniforms.

use bevy::prelude::*;
use bevy_cropland_core::components::{
    BabyCarrot, Carrot, FarmPieceOf, Farmer, LevelGeometry, PieceExtent, PlayerAvatar,
    TrackedSpeed, WheatField,
};
use bevy_cropland_core::events::WheatFieldSpawned;

use crate::config::FieldRenderConfig;

/// Seconds after which the wind clock snaps back to zero.
pub const WIND_WRAP_SECONDS: f32 = 12.53;

/// Seconds after which the cloud clock snaps back to zero.
pub const CLOUD_WRAP_SECONDS: f32 = 28.3;

/// Cloud clock rate relative to real time.
pub const CLOUD_RATE: f32 = 0.25;

/// Tallest wheat blade in shader units.
pub const MAX_WHEAT_HEIGHT: f32 = 15.0;

/// Scrolling clocks for the wind and cloud shader channels.
///
/// Both snap back to zero on reaching their wrap point rather than taking a
/// remainder. The cloud clock runs at a quarter of real time.
#[derive(Resource, Debug, Clone, Default)]
pub struct FieldClocks {
    /// Seconds into the wind cycle (`0.0..WIND_WRAP_SECONDS`).
    pub wind_time: f32,
    /// Seconds into the cloud cycle (`0.0..CLOUD_WRAP_SECONDS`).
    pub cloud_time: f32,
}

impl FieldClocks {
    /// Advance both clocks by one frame's delta.
    pub fn advance(&mut self, delta_seconds: f32) {
        self.wind_time += delta_seconds;
        if self.wind_time >= WIND_WRAP_SECONDS {
            self.wind_time = 0.0;
        }
        self.cloud_time += delta_seconds * CLOUD_RATE;
        if self.cloud_time >= CLOUD_WRAP_SECONDS {
            self.cloud_time = 0.0;
        }
    }
}

/// System that drives [`FieldClocks`] from frame time.
pub fn advance_field_clocks(time: Res<Time>, mut clocks: ResMut<FieldClocks>) {
    clocks.advance(time.delta_secs());
}

/// Per-frame uniform feed for the wheat and ground shaders.
///
/// Positions are UV coordinates into the wheat texture: x normalized by
/// level columns, y flipped so the texture's top row is v = 0 and anchored
/// at the entity's bottom edge, where its blades part. The tracked set is
/// every carrot, then every farmer, then every baby carrot.
#[derive(Component, Debug, Clone, Default)]
pub struct WheatShaderInput {
    /// UV position per tracked entity.
    pub positions: Vec<Vec2>,
    /// Speed per tracked entity in world units per second. Zero without a
    /// physics layer.
    pub speeds: Vec<f32>,
    /// Player avatar position, normalized but not flipped.
    pub player_position: Vec2,
    /// Tint scale from the map's catalog entry.
    pub blade_color_scale: f32,
    /// Level columns over rows.
    pub aspect_ratio: f32,
    /// Tallest wheat blade in shader units.
    pub max_height: f32,
}

impl WheatShaderInput {
    /// Number of tracked entities this frame.
    pub fn entity_count(&self) -> usize {
        self.positions.len()
    }
}

/// Observer that prepares a spawned wheat field for the shader feed.
pub fn on_wheat_field_spawned(
    trigger: On<WheatFieldSpawned>,
    config: Res<FieldRenderConfig>,
    mut transform_query: Query<&mut Transform>,
    mut commands: Commands,
) {
    let event = trigger.event();

    if let Ok(mut transform) = transform_query.get_mut(event.entity) {
        transform.translation.z = config.wheat_z;
    }

    commands.entity(event.entity).insert(WheatShaderInput {
        blade_color_scale: event.blade_color_scale,
        max_height: config.max_wheat_height,
        ..default()
    });
}

/// System that rebuilds every wheat field's shader input.
///
/// Runs every frame. Carrots come first ordered by spawn index, then farmers,
/// then baby carrots by index; speeds read [`TrackedSpeed`] where the physics
/// layer maintains one, else zero.
pub fn update_wheat_shader_input(
    config: Res<FieldRenderConfig>,
    level_query: Query<&LevelGeometry>,
    mut field_query: Query<(&WheatField, &FarmPieceOf, &mut WheatShaderInput)>,
    carrot_query: Query<(
        &Carrot,
        &Transform,
        &PieceExtent,
        Option<&TrackedSpeed>,
        &FarmPieceOf,
    )>,
    farmer_query: Query<
        (
            Entity,
            &Transform,
            &PieceExtent,
            Option<&TrackedSpeed>,
            &FarmPieceOf,
        ),
        With<Farmer>,
    >,
    baby_query: Query<(
        &BabyCarrot,
        &Transform,
        &PieceExtent,
        Option<&TrackedSpeed>,
        &FarmPieceOf,
    )>,
    player_query: Query<&Transform, With<PlayerAvatar>>,
) {
    for (field, field_of, mut input) in &mut field_query {
        let level_entity = field_of.0;
        let Ok(geometry) = level_query.get(level_entity) else {
            continue;
        };
        let columns = geometry.columns() as f32;
        let rows = geometry.rows() as f32;
        if columns <= 0.0 || rows <= 0.0 {
            continue;
        }

        input.positions.clear();
        input.speeds.clear();

        let mut carrots: Vec<_> = carrot_query
            .iter()
            .filter(|(.., of)| of.0 == level_entity)
            .collect();
        carrots.sort_by_key(|(carrot, ..)| carrot.index);
        for (_, transform, extent, speed, _) in carrots {
            input
                .positions
                .push(tracked_uv(transform, extent, columns, rows));
            input.speeds.push(speed.map_or(0.0, |s| s.0));
        }

        let mut farmers: Vec<_> = farmer_query
            .iter()
            .filter(|(.., of)| of.0 == level_entity)
            .collect();
        farmers.sort_by_key(|(entity, ..)| *entity);
        for (_, transform, extent, speed, _) in farmers {
            input
                .positions
                .push(tracked_uv(transform, extent, columns, rows));
            input.speeds.push(speed.map_or(0.0, |s| s.0));
        }

        let mut babies: Vec<_> = baby_query
            .iter()
            .filter(|(.., of)| of.0 == level_entity)
            .collect();
        babies.sort_by_key(|(baby, ..)| baby.index);
        for (_, transform, extent, speed, _) in babies {
            input
                .positions
                .push(tracked_uv(transform, extent, columns, rows));
            input.speeds.push(speed.map_or(0.0, |s| s.0));
        }

        input.player_position = player_query
            .iter()
            .next()
            .map(|transform| {
                Vec2::new(
                    transform.translation.x / columns,
                    transform.translation.y / rows,
                )
            })
            .unwrap_or_default();

        input.blade_color_scale = field.blade_color_scale;
        input.aspect_ratio = columns / rows;
        input.max_height = config.max_wheat_height;
    }
}

/// Map a tracked entity's bottom edge into wheat texture UV space.
fn tracked_uv(transform: &Transform, extent: &PieceExtent, columns: f32, rows: f32) -> Vec2 {
    let bottom = transform.translation.y - extent.0.y / 2.0;
    Vec2::new(transform.translation.x / columns, 1.0 - bottom / rows)
}
