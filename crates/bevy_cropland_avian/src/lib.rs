//! `Avian2D` physics integration for `bevy_cropland`.
//!
//! This crate gives physical presence to the entities spawned by
//! `bevy_cropland_core`: pass-through sensors for scenery the game reacts
//! to, solid walls around the level, and dynamic rotation-locked bodies for
//! actors.
//!
//! # Features
//!
//! - **Sensor pieces**: planting spots, rocks, obstructions and decorations
//!   report overlaps without blocking movement
//! - **Boundary walls**: solid static colliders around the playable area
//! - **Actor bodies**: dynamic, rotation locked, with colliders shrunk from
//!   the sprite footprint
//! - **Zero gravity**: top-down worlds drop straight in without a gravity
//!   override in the game
//! - **Speed feed**: keeps [`TrackedSpeed`](bevy_cropland_core::components::TrackedSpeed)
//!   equal to each body's velocity magnitude for the render layer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_cropland_avian::CroplandAvianPlugin;
//! use avian2d::prelude::*;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(PhysicsPlugins::default())
//!     .add_plugins(CroplandAvianPlugin::default())
//!     .run();
//! ```

pub mod actors;
pub mod config;
pub mod pieces;
pub mod plugin;

pub mod prelude {
    //! Common imports for `bevy_cropland_avian`.

    pub use crate::config::FieldPhysicsConfig;
    pub use crate::plugin::CroplandAvianPlugin;
}

// Re-export at crate root for convenience
pub use config::FieldPhysicsConfig;
pub use plugin::CroplandAvianPlugin;
