//! # `bevy_cropland_field`
//!
//! Field rendering for `bevy_cropland`: sprites for spawned pieces,
//! decoration animation, and the per-frame feed for the game's wheat
//! shaders.
//!
//! This crate is a Layer 3 plugin that observes spawning events from
//! `bevy_cropland_core` and adds render components to piece entities. All
//! positions and sprite sizes stay in world units; the game picks the
//! pixel scale through its camera or by scaling the level entity.
//!
//! ## Features
//!
//! - **Piece sprites**: translucent planting spots, full-tint rocks and
//!   obstructions, frame-grid decorations
//! - **Decoration animation**: whole-sheet playback on a fixed cycle
//! - **Z-ordering**: ground < spots < entities < wheat < clouds
//! - **Wheat shader feed**: wind and cloud clocks plus per-entity UV
//!   positions and speeds, rebuilt every frame
//! - **Wheat mask**: coverage queries and `InWheat` tagging from the
//!   distribution texture's alpha channel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_cropland_core::prelude::*;
//! use bevy_cropland_field::CroplandFieldPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(CroplandCorePlugin::default())
//!         .add_plugins(CroplandFieldPlugin::default())
//!         .run();
//! }
//! ```

pub mod animation;
pub mod config;
pub mod mask;
pub mod plugin;
pub mod sprites;
pub mod wheat;

pub use config::FieldRenderConfig;
pub use plugin::CroplandFieldPlugin;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::animation::DecorationAnimation;
    pub use crate::config::FieldRenderConfig;
    pub use crate::mask::{InWheat, WheatMask};
    pub use crate::plugin::CroplandFieldPlugin;
    pub use crate::wheat::{FieldClocks, WheatShaderInput, MAX_WHEAT_HEIGHT};
}
