//! Systems for level spawning and management.

pub mod context;
pub mod spawn;

pub use context::SpawnContext;
pub use spawn::{
    on_populate_carrots, process_loaded_levels, respawn_changed_levels, RespawnFarmLevel,
};
