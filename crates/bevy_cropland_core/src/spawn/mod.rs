//! Functions that turn a loaded level asset into piece entities.
//!
//! [`spawn_level`] walks the map's layers and dispatches each to the matching
//! layer function based on the names configured in
//! [`CroplandCoreConfig`](crate::plugin::CroplandCoreConfig).

pub mod entities;
pub mod environment;
pub mod level;
pub mod wheat;

pub use level::spawn_level;

use bevy::prelude::*;

/// Rectangular footprint of a map object in pixels.
///
/// Tile objects and plain rectangles both report their extent this way;
/// degenerate or point-like objects yield `None`.
pub(crate) fn object_extent(object: &tiled::Object<'_>) -> Option<Vec2> {
    match object.shape {
        tiled::ObjectShape::Rect { width, height }
        | tiled::ObjectShape::Ellipse { width, height } => {
            (width > 0.0 && height > 0.0).then(|| Vec2::new(width, height))
        }
        _ => None,
    }
}
