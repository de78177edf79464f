//! Plugin for `bevy_cropland_core`.

use bevy::prelude::*;

use crate::debug::{draw_level_layout_debug, DebugLevelLayout};
use crate::systems::{on_populate_carrots, process_loaded_levels, respawn_changed_levels};

/// Configuration for `CroplandCorePlugin`.
///
/// Inserted as a resource so the spawn systems can read it; replace the
/// resource to retarget layer names at runtime before a level spawns.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_cropland_core::{CroplandCoreConfig, CroplandCorePlugin};
///
/// App::new()
///     .add_plugins(CroplandCorePlugin::new(CroplandCoreConfig {
///         drawscale: 48.0,
///         ..default()
///     }));
/// ```
#[derive(Resource, Debug, Clone)]
pub struct CroplandCoreConfig {
    /// Name of the object layer holding the wheat map object.
    pub wheat_layer: String,
    /// Name of the object layer holding spots, rocks, obstructions and
    /// decorations.
    pub environment_layer: String,
    /// Name of the object layer holding farmers, babies and carrot points.
    pub entities_layer: String,
    /// Pixels per world unit for render layers.
    pub drawscale: f32,
    /// Spawn the four boundary walls around each level.
    pub auto_boundaries: bool,
    /// Insert [`DebugLevelLayout`] so level layouts are drawn with gizmos.
    pub debug_draw: bool,
}

impl Default for CroplandCoreConfig {
    fn default() -> Self {
        Self {
            wheat_layer: "wheat".to_string(),
            environment_layer: "environment".to_string(),
            entities_layer: "entities".to_string(),
            drawscale: 32.0,
            auto_boundaries: true,
            debug_draw: false,
        }
    }
}

/// Plugin for the `bevy_cropland_core` entity spawning system.
///
/// Add this plugin after `CroplandAssetsPlugin` to enable automatic level
/// spawning.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_cropland_assets::CroplandAssetsPlugin;
/// use bevy_cropland_core::CroplandCorePlugin;
///
/// fn app() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(CroplandAssetsPlugin)
///         .add_plugins(CroplandCorePlugin::default())
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct CroplandCorePlugin {
    config: CroplandCoreConfig,
}

impl CroplandCorePlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: CroplandCoreConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CroplandCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        // Reactive spawning runs in PreUpdate before user systems; respawn
        // marking runs first so a changed asset respawns in the same frame
        app.add_systems(
            PreUpdate,
            (respawn_changed_levels, process_loaded_levels).chain(),
        );

        app.add_observer(on_populate_carrots);

        if self.config.debug_draw {
            app.init_resource::<DebugLevelLayout>();
        }

        // Debug visualization only runs when DebugLevelLayout is present
        app.add_systems(
            PostUpdate,
            draw_level_layout_debug.run_if(resource_exists::<DebugLevelLayout>),
        );
    }
}
