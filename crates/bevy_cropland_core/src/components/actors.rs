//! Components for the moving inhabitants of a farm level.

use bevy::prelude::*;

/// The kind of actor an entities-layer object produced.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Farmer,
    Carrot,
    BabyCarrot,
}

impl ActorKind {
    /// Object class tag used in map documents for this actor.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Carrot => "Carrot",
            Self::BabyCarrot => "Baby",
        }
    }

    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Farmer" => Some(Self::Farmer),
            "Carrot" => Some(Self::Carrot),
            "Baby" => Some(Self::BabyCarrot),
            _ => None,
        }
    }
}

/// A farmer chasing carrots around the field.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct Farmer;

/// A grown carrot, spawned on demand from the level's recorded spawn points.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct Carrot {
    /// Position in the level's spawn-point list.
    pub index: u32,
}

impl Carrot {
    /// Footprint of a carrot in world units.
    ///
    /// Spawn points only record a center, so carrots use a fixed one-cell
    /// extent rather than an extent read from the map.
    pub const EXTENT: Vec2 = Vec2::ONE;
}

/// A baby carrot wandering the field.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct BabyCarrot {
    /// Position of this baby in the entities layer, counting only babies.
    pub index: u32,
}

/// Marks the actor controlled by the local player.
///
/// Spawn code never inserts this; game code picks its avatar. Render and
/// physics layers use it to single out one actor, for example as the
/// wheat-rustle focus.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct PlayerAvatar;

/// Speed of an actor in world units per second.
///
/// Lives here so render code can read actor motion without depending on a
/// physics backend. The physics layer keeps it equal to the magnitude of the
/// body's linear velocity; without physics it stays at whatever the game
/// writes, defaulting to standstill.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct TrackedSpeed(pub f32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_tags_round_trip() {
        for kind in [ActorKind::Farmer, ActorKind::Carrot, ActorKind::BabyCarrot] {
            assert_eq!(ActorKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ActorKind::from_tag("Tractor"), None);
    }
}
