pub mod assets;
pub mod loaders;
pub mod plugin;

// Re-export the plugin for convenience
pub use plugin::CroplandAssetsPlugin;

/// Prelude module for convenient imports
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_cropland_assets::prelude::*;
///
/// fn my_system(levels: Res<Assets<LevelMap>>) {
///     // Inspect loaded farm levels...
/// }
/// ```
pub mod prelude {
    pub use crate::assets::{
        catalog::TilesetCatalog,
        level::{CatalogReference, LevelMap},
    };
    pub use crate::plugin::CroplandAssetsPlugin;
}
