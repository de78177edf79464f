//! Shared context threaded through the spawn functions.

use bevy::prelude::*;

use bevy_cropland_assets::prelude::{LevelMap, TilesetCatalog};

use crate::components::level::LevelGeometry;
use crate::plugin::CroplandCoreConfig;

/// Borrowed view of everything the spawn functions need.
///
/// Built once per level spawn so the individual functions don't each take
/// half a dozen parameters.
pub struct SpawnContext<'a> {
    pub level: &'a LevelMap,
    pub catalogs: &'a Assets<TilesetCatalog>,
    pub config: &'a CroplandCoreConfig,
    pub geometry: LevelGeometry,
}

impl<'a> SpawnContext<'a> {
    pub fn new(
        level: &'a LevelMap,
        catalogs: &'a Assets<TilesetCatalog>,
        config: &'a CroplandCoreConfig,
    ) -> Self {
        let geometry = LevelGeometry::new(
            level.grid_size.x,
            level.grid_size.y,
            Vec2::new(level.map.tile_width as f32, level.map.tile_height as f32),
            config.drawscale,
        );
        Self {
            level,
            catalogs,
            config,
            geometry,
        }
    }

    /// Catalog for a tileset index in the level's map, if loaded.
    pub fn catalog(&self, tileset_index: usize) -> Option<&'a TilesetCatalog> {
        let reference = self.level.catalog(tileset_index)?;
        self.catalogs.get(&reference.handle)
    }

    /// Resolve the catalog and local tile id an object references.
    pub fn object_tile(&self, object: &tiled::Object<'_>) -> Option<(&'a TilesetCatalog, u32)> {
        let tile = object.get_tile()?;
        let tiled::TilesetLocation::Map(index) = tile.tileset_location() else {
            return None;
        };
        let catalog = self.catalog(*index)?;
        Some((catalog, tile.id()))
    }
}
