//! # `bevy_cropland`
//!
//! Tiled farm-level pipeline for Bevy: load a level map and its tileset
//! catalogs, spawn the field as typed ECS entities, and drive the rendering
//! and physics a top-down farming game builds on.
//!
//! This is a unified meta-crate that combines all `bevy_cropland_*`
//! sub-crates with convenient feature flags.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_cropland::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(BevyCroplandPlugin::default())
//!         .add_systems(Startup, spawn_level)
//!         .run();
//! }
//!
//! fn spawn_level(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     commands.spawn(FarmLevel {
//!         handle: asset_server.load("levels/farm.tmx"),
//!     });
//! }
//! ```
//!
//! ## Features
//!
//! - **default**: Includes `field` and `avian`
//! - **field**: Sprites, decoration animation and the wheat shader feed
//! - **avian**: Physics collider generation using `avian2d`
//!
//! ## Architecture
//!
//! This crate is organized into layers:
//!
//! - **Schema** ([`schema`]): The tile taxonomy and catalog validation,
//!   usable outside Bevy (the `tileset_lint` tool builds on it)
//! - **Layer 1** ([`assets`]): Pure asset loading for level maps (.tmx) and
//!   tileset catalogs (.tsx)
//! - **Layer 2** ([`core`]): ECS entity spawning with typed pieces and
//!   per-piece events
//! - **Layer 3** (optional): Integration plugins driven by those events
//!   - [`field`]: Sprites, animation, wheat shader feed and coverage mask
//!   - [`avian`]: Sensors, boundary walls and actor bodies with Avian2D
//!
//! ## Using Individual Crates
//!
//! The sub-crates work on their own for games that want more control:
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_cropland_assets::CroplandAssetsPlugin;
//! use bevy_cropland_core::prelude::*;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(CroplandAssetsPlugin)
//!     .add_plugins(CroplandCorePlugin::default())
//!     .run();
//! ```

pub mod plugin;

// Re-export sub-crates for advanced usage
pub use bevy_cropland_assets as assets;
pub use bevy_cropland_core as core;
pub use bevy_cropland_schema as schema;

#[cfg(feature = "field")]
pub use bevy_cropland_field as field;

#[cfg(feature = "avian")]
pub use bevy_cropland_avian as avian;

// Raw map access for games that inspect Tiled data directly
pub use tiled;

/// Unified prelude for `bevy_cropland`
///
/// Re-exports the most commonly used types from all enabled sub-crates.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_cropland::prelude::*;
///
/// fn my_system(levels: Query<&FarmLevel>, spots: Query<&PlantingSpot>) {
///     // Work with farm entities...
/// }
/// ```
pub mod prelude {
    // Core functionality (always available)
    pub use crate::assets::prelude::*;
    pub use crate::core::prelude::*;

    // Layer 3 plugins (feature-gated)
    #[cfg(feature = "field")]
    pub use crate::field::prelude::*;

    #[cfg(feature = "avian")]
    pub use crate::avian::prelude::*;

    // Unified plugin
    pub use crate::plugin::BevyCroplandPlugin;
}
