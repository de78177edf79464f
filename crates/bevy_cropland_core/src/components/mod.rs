//! Components for the `bevy_cropland_core` entity hierarchy.

pub mod actors;
pub mod level;
pub mod pieces;

// Re-export commonly used components
pub use actors::{ActorKind, BabyCarrot, Carrot, Farmer, PlayerAvatar, TrackedSpeed};
pub use level::{CarrotSpawnPoints, FarmLevel, FarmPieceOf, FarmPieces, LevelGeometry};
pub use pieces::{Boundary, Decoration, Obstruction, PieceExtent, PlantingSpot, Rock, WheatField};
