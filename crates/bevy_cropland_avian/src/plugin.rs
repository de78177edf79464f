//! Plugin for `Avian2D` physics integration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actors;
use crate::config::FieldPhysicsConfig;
use crate::pieces;

/// Plugin that integrates `Avian2D` physics with `bevy_cropland`.
///
/// This plugin:
/// - Registers the [`FieldPhysicsConfig`] resource for global configuration
/// - Adds observers turning spawned pieces into sensors, walls and bodies
/// - Inserts a zero [`Gravity`] resource for the top-down world (if enabled)
///
/// The Avian `PhysicsPlugins` themselves stay the game's responsibility, so
/// the game controls the physics length unit and schedule.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_cropland_avian::{CroplandAvianPlugin, FieldPhysicsConfig};
/// use avian2d::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PhysicsPlugins::default())
///     .add_plugins(CroplandAvianPlugin::default())
///     .run();
/// ```
#[derive(Default)]
pub struct CroplandAvianPlugin {
    /// Physics configuration
    pub config: FieldPhysicsConfig,
}

impl CroplandAvianPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: FieldPhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CroplandAvianPlugin {
    fn build(&self, app: &mut App) {
        // Insert resources
        app.insert_resource(self.config.clone());

        if self.config.zero_gravity {
            app.insert_resource(Gravity(Vec2::ZERO));
        }

        // Add observers for piece colliders
        app.add_observer(pieces::on_spot_spawned);
        app.add_observer(pieces::on_rock_spawned);
        app.add_observer(pieces::on_obstruction_spawned);
        app.add_observer(pieces::on_decoration_spawned);
        app.add_observer(pieces::on_boundary_spawned);

        // Add observer for actor bodies
        app.add_observer(actors::on_actor_spawned);

        // Keep the render-facing speed mirror current
        app.add_systems(Update, actors::track_actor_speeds);

        info!("CroplandAvianPlugin initialized");
    }
}
