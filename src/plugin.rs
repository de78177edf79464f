//! Unified plugin for `bevy_cropland`.

use bevy::prelude::*;

use bevy_cropland_assets::CroplandAssetsPlugin;
use bevy_cropland_core::{CroplandCoreConfig, CroplandCorePlugin};

#[cfg(feature = "field")]
use bevy_cropland_field::{CroplandFieldPlugin, FieldRenderConfig};

#[cfg(feature = "avian")]
use bevy_cropland_avian::{CroplandAvianPlugin, FieldPhysicsConfig};

/// Unified plugin that adds all enabled `bevy_cropland` functionality.
///
/// This plugin automatically includes:
/// - Asset loading ([`CroplandAssetsPlugin`])
/// - Level spawning ([`CroplandCorePlugin`])
/// - Enabled Layer 3 integrations based on feature flags
///
/// # Features
///
/// - `field` (default): Adds [`CroplandFieldPlugin`] for sprites and the
///   wheat shader feed
/// - `avian` (default): Adds [`CroplandAvianPlugin`] for Avian2D physics
///
/// # Example
///
/// The Avian `PhysicsPlugins` are not added here, so the game stays in
/// charge of the physics length unit and schedule:
///
/// ```rust,no_run
/// use avian2d::prelude::*;
/// use bevy::prelude::*;
/// use bevy_cropland::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PhysicsPlugins::default())
///     .add_plugins(BevyCroplandPlugin::default())
///     .run();
/// ```
///
/// # With Custom Configuration
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_cropland::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         BevyCroplandPlugin::default()
///             .with_core(CroplandCoreConfig {
///                 debug_draw: true,
///                 ..default()
///             })
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct BevyCroplandPlugin {
    /// Core spawning configuration
    pub core: CroplandCoreConfig,

    /// Field rendering configuration (if feature enabled)
    #[cfg(feature = "field")]
    pub field: FieldRenderConfig,

    /// Avian physics configuration (if feature enabled)
    #[cfg(feature = "avian")]
    pub avian: FieldPhysicsConfig,
}

impl BevyCroplandPlugin {
    /// Create with custom core configuration
    pub fn with_core(mut self, config: CroplandCoreConfig) -> Self {
        self.core = config;
        self
    }

    /// Create with custom field rendering configuration
    #[cfg(feature = "field")]
    pub fn with_field(mut self, config: FieldRenderConfig) -> Self {
        self.field = config;
        self
    }

    /// Create with custom Avian physics configuration
    #[cfg(feature = "avian")]
    pub fn with_avian(mut self, config: FieldPhysicsConfig) -> Self {
        self.avian = config;
        self
    }
}

impl Plugin for BevyCroplandPlugin {
    fn build(&self, app: &mut App) {
        // Layer 1: Assets (always required)
        app.add_plugins(CroplandAssetsPlugin);

        // Layer 2: Spawning (always required)
        app.add_plugins(CroplandCorePlugin::new(self.core.clone()));

        // Layer 3: Rendering (feature-gated)
        #[cfg(feature = "field")]
        app.add_plugins(CroplandFieldPlugin::new(self.field.clone()));

        // Layer 3: Physics (feature-gated)
        #[cfg(feature = "avian")]
        app.add_plugins(CroplandAvianPlugin::new(self.avian.clone()));

        info!("BevyCroplandPlugin initialized");
    }
}
