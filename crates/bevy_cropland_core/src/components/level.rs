//! Level-entity components and world-space geometry.

use bevy::prelude::*;

use bevy_cropland_assets::prelude::LevelMap;

/// A farm level to spawn.
///
/// Insert this on an entity to have the spawn systems populate it with one
/// child entity per recognized map object once the referenced [`LevelMap`]
/// and all of its catalogs finish loading.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct FarmLevel {
    pub handle: Handle<LevelMap>,
}

impl FarmLevel {
    pub fn new(handle: Handle<LevelMap>) -> Self {
        Self { handle }
    }
}

/// Points a spawned piece back at the level entity that owns it.
///
/// Paired with [`FarmPieces`] for bidirectional traversal. The spawn systems
/// maintain both sides; treat them as read-only.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct FarmPieceOf(pub Entity);

/// Every piece entity spawned for a level, in spawn order.
///
/// Presence of this component marks the level as spawned; removing it (or
/// inserting [`RespawnFarmLevel`](crate::systems::RespawnFarmLevel)) makes
/// the spawn systems rebuild the hierarchy.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct FarmPieces(pub Vec<Entity>);

/// Carrot positions recorded from the entities layer, in document order.
///
/// Lives on the level entity. No carrot entities exist until a
/// [`PopulateCarrots`](crate::events::PopulateCarrots) event asks for them.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct CarrotSpawnPoints(pub Vec<Vec2>);

/// World-space geometry of a farm level.
///
/// One world unit is one grid cell. The origin sits at the bottom-left
/// corner of the level and Y grows upward, while the source map uses
/// pixels with Y growing downward; the conversion helpers bridge the two.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct LevelGeometry {
    /// Level dimensions in grid cells.
    pub size: UVec2,
    /// Size of one grid cell in source pixels.
    pub tile_size: Vec2,
    /// Pixels per world unit, for render layers that need screen sizes.
    pub drawscale: f32,
    /// World-space bounds, bottom-left `(0, 0)` to top-right `(columns, rows)`.
    pub bounds: Rect,
}

impl LevelGeometry {
    /// Wall thickness of the auto-generated level boundary, in world units.
    pub const BOUNDARY_THICKNESS: f32 = 1.0;

    pub fn new(columns: u32, rows: u32, tile_size: Vec2, drawscale: f32) -> Self {
        Self {
            size: UVec2::new(columns, rows),
            tile_size,
            drawscale,
            bounds: Rect::new(0.0, 0.0, columns as f32, rows as f32),
        }
    }

    pub fn columns(&self) -> u32 {
        self.size.x
    }

    pub fn rows(&self) -> u32 {
        self.size.y
    }

    /// Convert a map position in pixels (Y down) to world units (Y up).
    pub fn object_to_world(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x / self.tile_size.x,
            self.size.y as f32 - position.y / self.tile_size.y,
        )
    }

    /// Convert a pixel extent to world units.
    pub fn size_to_world(&self, size: Vec2) -> Vec2 {
        size / self.tile_size
    }

    /// Center of a map object in world units.
    ///
    /// Tile objects anchor at their bottom-left corner, so the center sits
    /// half an extent up and to the right of the converted anchor.
    pub fn object_center(&self, position: Vec2, size: Vec2) -> Vec2 {
        self.object_to_world(position) + self.size_to_world(size) / 2.0
    }

    /// Center of a grid cell in world units.
    ///
    /// Grid coordinates follow the map document: `(0, 0)` is the top-left
    /// cell. Returns `None` outside the level.
    pub fn tile_to_world(&self, tile_x: u32, tile_y: u32) -> Option<Vec2> {
        if tile_x >= self.size.x || tile_y >= self.size.y {
            return None;
        }
        let flipped_y = self.size.y - 1 - tile_y;
        Some(Vec2::new(tile_x as f32 + 0.5, flipped_y as f32 + 0.5))
    }

    /// Grid cell containing a world position, or `None` outside the level.
    pub fn world_to_tile(&self, world: Vec2) -> Option<UVec2> {
        if !self.bounds.contains(world) {
            return None;
        }
        let tile_x = (world.x.floor() as u32).min(self.size.x - 1);
        let flipped_y = (world.y.floor() as u32).min(self.size.y - 1);
        Some(UVec2::new(tile_x, self.size.y - 1 - flipped_y))
    }

    /// Multiply a world-unit position by the drawscale.
    pub fn world_to_pixels(&self, world: Vec2) -> Vec2 {
        world * self.drawscale
    }

    /// The four walls enclosing the playable area, one world unit thick.
    ///
    /// Each wall is centered half a unit outside the bounds, in the order
    /// left, right, bottom, top.
    pub fn boundary_rects(&self) -> [Rect; 4] {
        let columns = self.size.x as f32;
        let rows = self.size.y as f32;
        let half = Self::BOUNDARY_THICKNESS / 2.0;
        let vertical = Vec2::new(Self::BOUNDARY_THICKNESS, rows);
        let horizontal = Vec2::new(columns, Self::BOUNDARY_THICKNESS);
        [
            Rect::from_center_size(Vec2::new(-half, rows / 2.0), vertical),
            Rect::from_center_size(Vec2::new(columns + half, rows / 2.0), vertical),
            Rect::from_center_size(Vec2::new(columns / 2.0, -half), horizontal),
            Rect::from_center_size(Vec2::new(columns / 2.0, rows + half), horizontal),
        ]
    }
}
