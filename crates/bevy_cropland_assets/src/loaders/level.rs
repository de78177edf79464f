use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    prelude::*,
    tasks::ConditionalSendFuture,
};
use thiserror::Error;

use crate::assets::{
    catalog::TilesetCatalog,
    level::{CatalogReference, LevelMap},
};
use crate::loaders::{PathResolveError, TiledParseCache, resolve_relative_path};

/// Asset loader for farm levels (.tmx files)
///
/// Every catalog the level references loads as a dependency, so the level's
/// recursive load state flips to loaded only once the catalogs and their
/// images are in.
#[derive(Default)]
pub struct LevelMapLoader {
    pub cache: TiledParseCache,
}

#[derive(Debug, Error)]
pub enum LevelLoaderError {
    #[error("failed to parse map: {0}")]
    Tiled(#[from] tiled::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    InvalidPath(#[from] PathResolveError),
}

impl AssetLoader for LevelMapLoader {
    type Asset = LevelMap;
    type Settings = ();
    type Error = LevelLoaderError;

    fn load(
        &self,
        _reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        let cache = self.cache.clone();
        async move {
            // The tiled loader reads from the filesystem so it can chase the
            // catalog references itself. Bevy serves assets out of "assets/".
            let asset_path = load_context.asset_path().path();
            let full_path = std::path::Path::new("assets").join(asset_path);

            let mut loader =
                tiled::Loader::with_cache_and_reader(cache, tiled::FilesystemResourceReader::new());
            let map = loader.load_tmx_map(&full_path)?;

            // Catalog dependencies in declaration order. GIDs start at 1.
            let mut catalogs = Vec::new();
            let mut first_gid = 1u32;
            for tileset in map.tilesets() {
                let catalog_path =
                    resolve_relative_path(load_context, &tileset.source.to_string_lossy())?;
                let handle: Handle<TilesetCatalog> = load_context.load(catalog_path);
                catalogs.push(CatalogReference { handle, first_gid });
                first_gid += tileset.tilecount;
            }

            let grid_size = UVec2::new(map.width, map.height);
            let rect = Rect::new(
                0.0,
                0.0,
                map.width as f32 * map.tile_width as f32,
                map.height as f32 * map.tile_height as f32,
            );

            Ok(LevelMap {
                map,
                catalogs,
                grid_size,
                rect,
            })
        }
    }

    fn extensions(&self) -> &[&str] {
        &["tmx"]
    }
}
