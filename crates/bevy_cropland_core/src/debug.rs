//! Debug visualization for farm levels.

use bevy::prelude::*;

use crate::components::level::LevelGeometry;
use crate::components::pieces::{Boundary, PieceExtent, PlantingSpot};

/// Resource to enable level layout debug visualization.
///
/// Insert this resource (or set
/// [`CroplandCoreConfig::debug_draw`](crate::plugin::CroplandCoreConfig)) to
/// draw rectangles around the level bounds, every planting spot and every
/// boundary wall.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_cropland_core::debug::DebugLevelLayout;
/// fn enable_debug(mut commands: Commands) {
///     commands.insert_resource(DebugLevelLayout::default());
/// }
/// ```
#[derive(Resource, Debug, Clone)]
pub struct DebugLevelLayout {
    /// Color for the level bounds rectangle
    pub bounds_color: Color,
    /// Color for planting spot rectangles
    pub spot_color: Color,
    /// Color for boundary wall rectangles
    pub boundary_color: Color,
}

impl Default for DebugLevelLayout {
    fn default() -> Self {
        Self {
            bounds_color: Color::srgba(0.0, 1.0, 0.0, 0.8), // Green
            spot_color: Color::srgba(1.0, 0.8, 0.0, 0.8),   // Amber
            boundary_color: Color::srgba(1.0, 0.0, 0.0, 0.8), // Red
        }
    }
}

/// System that draws debug rectangles for each level's layout.
///
/// Only runs when the `DebugLevelLayout` resource is present.
pub fn draw_level_layout_debug(
    config: Res<DebugLevelLayout>,
    level_query: Query<(&LevelGeometry, &GlobalTransform)>,
    spot_query: Query<(&PieceExtent, &GlobalTransform), With<PlantingSpot>>,
    boundary_query: Query<(&PieceExtent, &GlobalTransform), With<Boundary>>,
    mut gizmos: Gizmos,
) {
    for (geometry, global_transform) in &level_query {
        let level_pos = global_transform.translation().truncate();
        let min = level_pos + geometry.bounds.min;
        let max = level_pos + geometry.bounds.max;
        let center = (min + max) / 2.0;

        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            max - min,
            config.bounds_color,
        );
    }

    for (extent, global_transform) in &spot_query {
        gizmos.rect_2d(
            Isometry2d::from_translation(global_transform.translation().truncate()),
            extent.0,
            config.spot_color,
        );
    }

    for (extent, global_transform) in &boundary_query {
        gizmos.rect_2d(
            Isometry2d::from_translation(global_transform.translation().truncate()),
            extent.0,
            config.boundary_color,
        );
    }
}
