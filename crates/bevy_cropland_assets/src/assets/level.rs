use bevy::prelude::*;

use crate::assets::catalog::TilesetCatalog;

/// Bevy asset wrapper for a farm level (.tmx file)
///
/// A level is an orthogonal map whose object layers place catalog tiles:
/// `wheat` for the field itself, `environment` for props, `entities` for
/// actors. Pieces reference catalog tiles by GID.
#[derive(TypePath, Asset, Debug)]
pub struct LevelMap {
    /// Raw Tiled map data, kept whole.
    pub map: tiled::Map,

    /// Catalog references in declaration order.
    ///
    /// The position in this vec matches `LayerTile::tileset_index()`.
    pub catalogs: Vec<CatalogReference>,

    /// Map size in grid cells.
    pub grid_size: UVec2,

    /// Map bounding box in pixels.
    pub rect: Rect,
}

/// Handle plus GID bookkeeping for one catalog a level references.
#[derive(Debug, Clone)]
pub struct CatalogReference {
    /// Bevy asset handle to the catalog.
    pub handle: Handle<TilesetCatalog>,
    /// First GID of this catalog in the level.
    pub first_gid: u32,
}

impl LevelMap {
    /// Catalog reference by tileset index.
    pub fn catalog(&self, tileset_index: usize) -> Option<&CatalogReference> {
        self.catalogs.get(tileset_index)
    }

    /// Splits a global tile id into its catalog reference and local tile id.
    ///
    /// GIDs start at 1; 0 means "no tile" and resolves to `None`.
    pub fn split_gid(&self, gid: u32) -> Option<(&CatalogReference, u32)> {
        if gid == 0 {
            return None;
        }
        self.catalogs
            .iter()
            .rev()
            .find(|catalog| catalog.first_gid <= gid)
            .map(|catalog| (catalog, gid - catalog.first_gid))
    }
}
