//! Main plugin for `bevy_cropland_field`.

use bevy::prelude::*;

use crate::config::FieldRenderConfig;
use crate::mask;
use crate::sprites;
use crate::wheat;
use crate::wheat::FieldClocks;

#[cfg(feature = "animations")]
use crate::animation;

/// Plugin for rendering spawned farm levels.
///
/// This Layer 3 plugin observes events from `bevy_cropland_core` and adds
/// render components to piece entities, then keeps the wheat shader feed
/// current every frame.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_cropland_field::CroplandFieldPlugin;
/// App::new()
///     .add_plugins(CroplandFieldPlugin::default());
/// ```
#[derive(Default)]
pub struct CroplandFieldPlugin {
    /// Configuration for rendering
    pub config: FieldRenderConfig,
}

impl CroplandFieldPlugin {
    /// Create plugin with custom configuration.
    pub fn new(config: FieldRenderConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CroplandFieldPlugin {
    fn build(&self, app: &mut App) {
        // Insert config resource
        app.insert_resource(self.config.clone());

        // Shared channel clocks
        app.init_resource::<FieldClocks>();

        // Register piece rendering observers
        app.add_observer(sprites::on_spot_spawned);
        app.add_observer(sprites::on_rock_spawned);
        app.add_observer(sprites::on_obstruction_spawned);
        app.add_observer(sprites::on_decoration_spawned);
        app.add_observer(sprites::on_actor_spawned);
        app.add_observer(wheat::on_wheat_field_spawned);

        // Per-frame wheat feed: clocks first, then the uniform rebuild
        app.add_systems(
            Update,
            (wheat::advance_field_clocks, wheat::update_wheat_shader_input).chain(),
        );

        // Coverage mask: build once the texture is readable, then tag actors
        app.add_systems(
            Update,
            (mask::build_wheat_masks, mask::update_in_wheat).chain(),
        );

        // Add animation system if enabled
        #[cfg(feature = "animations")]
        if self.config.enable_animations {
            app.add_systems(Update, animation::update_decoration_animations);
        }

        info!("CroplandFieldPlugin initialized");
    }
}
