//! Configuration for field rendering.

use bevy::prelude::*;

use crate::wheat::MAX_WHEAT_HEIGHT;

/// Configuration for the field render plugin.
///
/// The z values form the draw-layer ladder: ground below spots, spots below
/// entities, entities below the wheat overlay, clouds on top. `ground_z` and
/// `cloud_z` are for layers the game draws itself; the plugin only assigns
/// the three in between.
#[derive(Resource, Clone, Debug)]
pub struct FieldRenderConfig {
    /// Tint for planting-spot sprites (default: white at 0.4 alpha)
    pub spot_tint: Color,

    /// Z for the ground plane a game draws under the field (default: 0.0)
    pub ground_z: f32,

    /// Z for planting-spot sprites (default: 1.0)
    pub spot_z: f32,

    /// Z for rocks, obstructions, decorations and actors (default: 2.0)
    pub entity_z: f32,

    /// Z for the wheat field overlay (default: 3.0)
    pub wheat_z: f32,

    /// Z for cloud shadows a game draws over everything (default: 4.0)
    pub cloud_z: f32,

    /// Enable decoration animations (default: true with "animations" feature)
    pub enable_animations: bool,

    /// Tallest wheat blade in shader units, handed to the wheat shader
    /// (default: [`MAX_WHEAT_HEIGHT`])
    pub max_wheat_height: f32,
}

impl Default for FieldRenderConfig {
    fn default() -> Self {
        Self {
            spot_tint: Color::srgba(1.0, 1.0, 1.0, 0.4),
            ground_z: 0.0,
            spot_z: 1.0,
            entity_z: 2.0,
            wheat_z: 3.0,
            cloud_z: 4.0,
            enable_animations: cfg!(feature = "animations"),
            max_wheat_height: MAX_WHEAT_HEIGHT,
        }
    }
}
