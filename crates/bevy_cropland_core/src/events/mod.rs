//! Events fired while a farm level spawns.
//!
//! Per-piece events are plain [`Event`]s triggered as each piece entity is
//! created, carrying enough payload that downstream observers (sprites,
//! colliders) rarely need to query the map again. [`LevelSpawned`] is an
//! [`EntityEvent`] targeted at the level entity and fires last, after every
//! piece exists. Positions and sizes are in world units.

use bevy::prelude::*;

use bevy_cropland_schema::DecorationSheet;

use crate::components::actors::ActorKind;

/// A level entity finished spawning all of its pieces.
#[derive(EntityEvent, Debug, Clone)]
pub struct LevelSpawned {
    #[event_target]
    pub entity: Entity,
}

/// A planting spot was spawned from the environment layer.
#[derive(Event, Debug, Clone)]
pub struct SpotSpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    /// Running count of planting spots in this level, starting at zero.
    pub index: u32,
    /// Tile image for the spot, if the catalog has one loaded.
    pub image: Option<Handle<Image>>,
    pub center: Vec2,
    pub size: Vec2,
}

/// A rock was spawned from the environment layer.
#[derive(Event, Debug, Clone)]
pub struct RockSpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    pub image: Option<Handle<Image>>,
    pub center: Vec2,
    pub size: Vec2,
}

/// A generic obstruction was spawned from the environment layer.
#[derive(Event, Debug, Clone)]
pub struct ObstructionSpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    pub image: Option<Handle<Image>>,
    pub center: Vec2,
    pub size: Vec2,
}

/// An animated decoration was spawned from the environment layer.
#[derive(Event, Debug, Clone)]
pub struct DecorationSpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    pub sheet: DecorationSheet,
    pub image: Handle<Image>,
    pub image_size: UVec2,
    pub center: Vec2,
    pub size: Vec2,
}

/// The wheat field covering a level was spawned from the wheat layer.
#[derive(Event, Debug, Clone)]
pub struct WheatFieldSpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    pub map_name: String,
    pub blade_color_scale: f32,
    pub texture: Handle<Image>,
}

/// An actor was spawned from the entities layer or a populate request.
#[derive(Event, Debug, Clone)]
pub struct ActorSpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    pub actor: ActorKind,
    pub center: Vec2,
    pub size: Vec2,
}

/// One wall of the level boundary was spawned.
#[derive(Event, Debug, Clone)]
pub struct BoundarySpawned {
    pub entity: Entity,
    pub level_entity: Entity,
    /// Wall footprint in world units.
    pub rect: Rect,
}

/// Ask a spawned level for carrot entities at its recorded spawn points.
///
/// Trigger with `commands.trigger(PopulateCarrots { level, count })`. The
/// observer spawns one [`Carrot`](crate::components::actors::Carrot) per
/// recorded point, in recording order, and fires [`ActorSpawned`] for each.
/// Asking for more carrots than the level recorded logs a warning and
/// spawns only what exists.
#[derive(EntityEvent, Debug, Clone)]
pub struct PopulateCarrots {
    #[event_target]
    pub level: Entity,
    pub count: usize,
}
