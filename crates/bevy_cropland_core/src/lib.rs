//! # `bevy_cropland_core`
//!
//! Entity spawning backbone for `bevy_cropland`. Converts loaded farm level
//! assets into an ECS hierarchy of typed pieces: planting spots, rocks,
//! obstructions, decorations, the wheat field, actors and boundary walls.
//!
//! **This crate does NOT handle rendering or physics** - those plug in via
//! the spawn events and component queries.
//!
//! ## Architecture
//!
//! This crate sits between:
//! - **`bevy_cropland_assets`**: Pure asset loading (catalogs and level maps)
//! - **`bevy_cropland_field` / `bevy_cropland_avian`**: Rendering and physics
//!   plugins driven by the events fired here
//!
//! ## What this crate provides
//!
//! 1. **Entity hierarchy**: one level entity with one child per piece
//! 2. **World-space geometry**: [`LevelGeometry`](components::LevelGeometry)
//!    converts between map pixels, grid cells and world units
//! 3. **Relationships**: [`FarmPieceOf`](components::FarmPieceOf) and
//!    [`FarmPieces`](components::FarmPieces) for bidirectional traversal
//! 4. **Events**: per-piece spawn events carrying enough payload that
//!    downstream plugins rarely re-read the map
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_cropland_assets::CroplandAssetsPlugin;
//! use bevy_cropland_core::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(CroplandAssetsPlugin)
//!         .add_plugins(CroplandCorePlugin::default())
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

pub mod components;
pub mod debug;
pub mod events;
pub mod plugin;
pub mod spawn;
pub mod systems;

pub mod prelude {
    //! Common imports for `bevy_cropland_core` users.

    pub use crate::components::{
        ActorKind, BabyCarrot, Boundary, Carrot, CarrotSpawnPoints, Decoration, FarmLevel,
        FarmPieceOf, FarmPieces, Farmer, LevelGeometry, Obstruction, PieceExtent, PlantingSpot,
        PlayerAvatar, Rock, TrackedSpeed, WheatField,
    };
    pub use crate::debug::DebugLevelLayout;
    pub use crate::events::{
        ActorSpawned, BoundarySpawned, DecorationSpawned, LevelSpawned, ObstructionSpawned,
        PopulateCarrots, RockSpawned, SpotSpawned, WheatFieldSpawned,
    };
    pub use crate::plugin::{CroplandCoreConfig, CroplandCorePlugin};
    pub use crate::systems::RespawnFarmLevel;
}

// Re-export plugin types at crate root for convenience
pub use plugin::{CroplandCoreConfig, CroplandCorePlugin};
