use bevy::{platform::collections::HashMap, prelude::*};
use bevy_cropland_schema::{CatalogReport, DecorationSheet, MapEntry, TileKind};

/// Bevy asset wrapper for a level-editor tileset catalog (.tsx file)
///
/// Farm catalogs are image-collection tilesets (one image per tile), but
/// spritesheet tilesets load too so authored content keeps working while it
/// is reorganized.
#[derive(TypePath, Asset, Debug)]
pub struct TilesetCatalog {
    /// Raw Tiled tileset data, kept whole.
    ///
    /// Everything from the .tsx file survives here: tiles, animations,
    /// custom properties. The typed accessors below are views into it.
    pub tileset: tiled::Tileset,

    /// For spritesheet catalogs: the single atlas image.
    ///
    /// `None` for image-collection catalogs.
    pub atlas_image: Option<Handle<Image>>,

    /// For image-collection catalogs: individual tile images.
    ///
    /// Key: local tile id (0-based, NOT a GID).
    pub tile_images: HashMap<u32, Handle<Image>>,

    /// Tile size in pixels, copied out for convenient access.
    pub tile_size: UVec2,

    /// Catalog grid in tiles (columns, rows).
    ///
    /// `UVec2::ZERO` for image-collection catalogs, which have no grid.
    pub grid_size: UVec2,

    /// Spacing between tiles in the atlas (pixels). Atlas catalogs only.
    pub spacing: u32,

    /// Margin around the atlas (pixels). Atlas catalogs only.
    pub margin: u32,

    /// Parsed kind tags, keyed by local tile id.
    ///
    /// Tiles with a missing or unknown tag are absent; the load-time lint
    /// already reported them.
    pub kinds: HashMap<u32, TileKind>,

    /// Findings from load-time validation, kept for tooling and tests.
    pub report: CatalogReport,
}

impl TilesetCatalog {
    /// Check if this is an image-collection catalog (vs. a spritesheet).
    #[inline]
    pub fn is_image_collection(&self) -> bool {
        self.atlas_image.is_none()
    }

    /// Get the image handle for a specific tile.
    ///
    /// For spritesheet catalogs this returns the shared atlas image; for
    /// image collections, the tile's own image.
    pub fn tile_image(&self, local_id: u32) -> Option<&Handle<Image>> {
        if let Some(ref atlas) = self.atlas_image {
            Some(atlas)
        } else {
            self.tile_images.get(&local_id)
        }
    }

    /// The kind tag of a tile, if it parsed to a known kind.
    pub fn tile_kind(&self, local_id: u32) -> Option<TileKind> {
        self.kinds.get(&local_id).copied()
    }

    /// Pixel size of a tile's own image. Image-collection catalogs only.
    pub fn tile_image_size(&self, local_id: u32) -> Option<UVec2> {
        let tile = self.tileset.get_tile(local_id)?;
        let image = tile.image.as_ref()?;
        Some(UVec2::new(image.width as u32, image.height as u32))
    }

    /// Typed sprite-grid record for a `Decoration` tile.
    ///
    /// `None` when the tile is not a decoration or its record is invalid
    /// (which the load-time lint reported).
    pub fn decoration(&self, local_id: u32) -> Option<DecorationSheet> {
        if self.tile_kind(local_id)? != TileKind::Decoration {
            return None;
        }
        let tile = self.tileset.get_tile(local_id)?;
        DecorationSheet::from_properties(&tile.properties).ok()
    }

    /// Typed record for a `Map` tile.
    pub fn map_entry(&self, local_id: u32) -> Option<MapEntry> {
        if self.tile_kind(local_id)? != TileKind::Map {
            return None;
        }
        let tile = self.tileset.get_tile(local_id)?;
        MapEntry::from_properties(&tile.properties).ok()
    }

    /// Find the `Map` tile whose entry name matches, lowest id first.
    pub fn find_map_entry(&self, name: &str) -> Option<(u32, MapEntry)> {
        let mut ids: Vec<u32> = self
            .kinds
            .iter()
            .filter(|(_, kind)| **kind == TileKind::Map)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids.into_iter().find_map(|id| {
            let entry = self.map_entry(id)?;
            (entry.name == name).then_some((id, entry))
        })
    }
}
