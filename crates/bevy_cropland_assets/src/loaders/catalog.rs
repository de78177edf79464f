use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    platform::collections::HashMap,
    prelude::*,
    tasks::ConditionalSendFuture,
};
use bevy_cropland_schema::{CatalogRules, ScanError, TileKind, scan_tsx, validate_tileset};
use thiserror::Error;

use crate::assets::catalog::TilesetCatalog;
use crate::loaders::{PathResolveError, TiledParseCache, resolve_relative_path};

/// Asset loader for level-editor tileset catalogs (.tsx files)
///
/// Parses the catalog, loads its images as dependencies, and runs the
/// schema lint. Findings are logged, never fatal: a catalog loads as long
/// as the XML itself parses.
#[derive(Default)]
pub struct TilesetCatalogLoader {
    pub cache: TiledParseCache,
}

#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("failed to parse tileset: {0}")]
    Tiled(#[from] tiled::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("broken tileset structure: {0}")]
    Scan(#[from] ScanError),

    #[error(transparent)]
    InvalidPath(#[from] PathResolveError),
}

impl AssetLoader for TilesetCatalogLoader {
    type Asset = TilesetCatalog;
    type Settings = ();
    type Error = CatalogLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        let cache = self.cache.clone();
        async move {
            // Structural pass over the raw bytes first; duplicate tile ids
            // are invisible in the parsed representation.
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            let scan = scan_tsx(&bytes[..])?;

            // The tiled loader reads from the filesystem so it can chase
            // external references itself. Bevy serves assets out of "assets/".
            let asset_path = load_context.asset_path().path();
            let full_path = std::path::Path::new("assets").join(asset_path);

            let mut loader =
                tiled::Loader::with_cache_and_reader(cache, tiled::FilesystemResourceReader::new());
            let tileset = loader.load_tsx_tileset(&full_path)?;

            let report = validate_tileset(&tileset, Some(&scan), &CatalogRules::default());
            for finding in report.errors() {
                warn!("{finding}");
            }
            for finding in report.warnings() {
                debug!("{finding}");
            }

            // Spritesheet catalogs carry one atlas image; collection
            // catalogs one image per tile.
            let (atlas_image, tile_images) = if let Some(ref image) = tileset.image {
                let image_path =
                    resolve_relative_path(load_context, &image.source.to_string_lossy())?;
                let handle = load_context.load(image_path);
                (Some(handle), HashMap::default())
            } else {
                let mut tile_images = HashMap::new();
                for (tile_id, tile) in tileset.tiles() {
                    if let Some(ref tile_image) = tile.image {
                        let image_path = resolve_relative_path(
                            load_context,
                            &tile_image.source.to_string_lossy(),
                        )?;
                        let handle = load_context.load(image_path);
                        tile_images.insert(tile_id, handle);
                    }
                }
                (None, tile_images)
            };

            let kinds: HashMap<u32, TileKind> = tileset
                .tiles()
                .filter_map(|(tile_id, tile)| {
                    let tag = tile.user_type.as_deref()?;
                    Some((tile_id, TileKind::parse(tag)?))
                })
                .collect();

            let tile_size = UVec2::new(tileset.tile_width, tileset.tile_height);
            let grid_size = catalog_grid_size(&tileset);
            let spacing = tileset.spacing;
            let margin = tileset.margin;

            Ok(TilesetCatalog {
                tileset,
                atlas_image,
                tile_images,
                tile_size,
                grid_size,
                spacing,
                margin,
                kinds,
                report,
            })
        }
    }

    fn extensions(&self) -> &[&str] {
        &["tsx"]
    }
}

/// Grid dimensions (columns, rows) for a spritesheet catalog.
///
/// Image-collection catalogs have no grid and report `UVec2::ZERO`.
fn catalog_grid_size(tileset: &tiled::Tileset) -> UVec2 {
    if tileset.columns > 0 {
        let rows = tileset.tilecount.div_ceil(tileset.columns);
        UVec2::new(tileset.columns, rows)
    } else {
        UVec2::ZERO
    }
}
