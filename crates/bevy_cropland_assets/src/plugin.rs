use bevy::prelude::*;

use crate::assets::{catalog::TilesetCatalog, level::LevelMap};
use crate::loaders::{TiledParseCache, catalog::TilesetCatalogLoader, level::LevelMapLoader};

/// Plugin that registers the farm asset types and loaders
///
/// This plugin enables loading level-editor files (.tsx catalogs and .tmx
/// farm levels) as Bevy assets.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_cropland_assets::CroplandAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(CroplandAssetsPlugin)
///     .run();
/// ```
///
/// # What this plugin does
///
/// - Registers the `TilesetCatalog` and `LevelMap` asset types
/// - Registers their `.tsx`/`.tmx` loaders
/// - Initializes a shared parse cache so a catalog referenced by several
///   levels is parsed once
///
/// # What this plugin does NOT do
///
/// - Entity spawning (that's `bevy_cropland_core`)
/// - Rendering and physics (those are the `field`/`avian` layers)
///
/// Pure asset loading, no ECS concerns beyond the cache resource.
pub struct CroplandAssetsPlugin;

impl Plugin for CroplandAssetsPlugin {
    fn build(&self, app: &mut App) {
        let cache = TiledParseCache::default();

        app.init_asset::<TilesetCatalog>().init_asset::<LevelMap>();

        app.register_asset_loader(TilesetCatalogLoader {
            cache: cache.clone(),
        })
        .register_asset_loader(LevelMapLoader {
            cache: cache.clone(),
        });

        // Kept as a resource so tools can reuse the same parses
        app.insert_resource(cache);
    }
}
