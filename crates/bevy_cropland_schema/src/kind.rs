//! The closed set of tile type tags the level editor uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gameplay role of a catalog tile, taken from the tile's `type` attribute.
///
/// The editor vocabulary is closed: anything else in the data is an
/// authoring mistake and surfaces as a validation finding rather than a
/// parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// A spot a carrot can root itself in.
    PlantingSpot,
    /// An impassable rock.
    Rock,
    /// A generic blocking object without dedicated behavior.
    Obstacle,
    /// Scenery with an optional sprite-sheet animation.
    Decoration,
    /// A whole-map entry: the wheat texture plus its shader parameters.
    Map,
}

impl TileKind {
    /// Every kind, in declaration order.
    pub const ALL: [TileKind; 5] = [
        TileKind::PlantingSpot,
        TileKind::Rock,
        TileKind::Obstacle,
        TileKind::Decoration,
        TileKind::Map,
    ];

    /// Parses the editor's `type` string. Returns `None` for unknown tags.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PlantingSpot" => Some(TileKind::PlantingSpot),
            "Rock" => Some(TileKind::Rock),
            "Obstacle" => Some(TileKind::Obstacle),
            "Decoration" => Some(TileKind::Decoration),
            "Map" => Some(TileKind::Map),
            _ => None,
        }
    }

    /// The tag exactly as the editor writes it.
    pub fn as_str(self) -> &'static str {
        match self {
            TileKind::PlantingSpot => "PlantingSpot",
            TileKind::Rock => "Rock",
            TileKind::Obstacle => "Obstacle",
            TileKind::Decoration => "Decoration",
            TileKind::Map => "Map",
        }
    }

    /// Kinds that are placed as world objects on the environment layer.
    /// `Map` tiles are catalog-level entries, not placeable objects.
    pub fn is_environment(self) -> bool {
        !matches!(self, TileKind::Map)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a `type` tag is not part of the editor vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tile kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for TileKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileKind::parse(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_kind() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(TileKind::parse("Wheat"), None);
        assert_eq!(TileKind::parse("plantingspot"), None);
        let err = "Tree".parse::<TileKind>().unwrap_err();
        assert_eq!(err.0, "Tree");
    }

    #[test]
    fn map_is_not_placeable() {
        assert!(!TileKind::Map.is_environment());
        assert!(TileKind::Decoration.is_environment());
        assert!(TileKind::PlantingSpot.is_environment());
    }
}
