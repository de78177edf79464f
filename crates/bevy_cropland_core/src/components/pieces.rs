//! Components for the static pieces of a farm level.
//!
//! Every piece entity carries exactly one of the marker components below
//! plus a [`PieceExtent`], a [`Transform`] centered on the piece, and a
//! [`FarmPieceOf`](super::level::FarmPieceOf) link to its level.

use bevy::prelude::*;

use bevy_cropland_schema::DecorationSheet;

/// Footprint of a piece in world units, centered on its [`Transform`].
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct PieceExtent(pub Vec2);

/// A tilled patch of ground where crops can be planted.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct PlantingSpot {
    /// Position of this spot in the environment layer, counting only
    /// planting spots. Stable across respawns of the same level.
    pub index: u32,
}

/// An impassable rock.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct Rock;

/// Generic solid scenery that blocks movement.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct Obstruction;

/// Animated scenery cut from a sprite-sheet grid.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct Decoration {
    /// Grid layout of the source sheet.
    pub sheet: DecorationSheet,
    /// Full sheet image.
    pub image: Handle<Image>,
    /// Sheet dimensions in pixels.
    pub image_size: UVec2,
}

/// The wheat covering a level, fed to the wheat shader by render layers.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct WheatField {
    /// Map entry name this field was spawned from.
    pub map_name: String,
    /// Per-level tint multiplier for wheat blades.
    pub blade_color_scale: f32,
    /// Wheat distribution image. Alpha marks covered cells.
    pub texture: Handle<Image>,
}

/// One of the four walls enclosing the playable area.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
#[require(Transform)]
pub struct Boundary;
