//! Sprite rendering for spawned farm pieces.

use bevy::prelude::*;
use bevy_cropland_core::events::{
    ActorSpawned, DecorationSpawned, ObstructionSpawned, RockSpawned, SpotSpawned,
};
use bevy_cropland_schema::DecorationSheet;

use crate::animation::DecorationAnimation;
use crate::config::FieldRenderConfig;

/// Observer that renders planting spots as translucent overlays.
///
/// Spots always get a sprite: the catalog's tile image when one is loaded,
/// otherwise a plain tinted quad the same size.
pub fn on_spot_spawned(
    trigger: On<SpotSpawned>,
    config: Res<FieldRenderConfig>,
    mut transform_query: Query<&mut Transform>,
    mut commands: Commands,
) {
    let event = trigger.event();

    if let Ok(mut transform) = transform_query.get_mut(event.entity) {
        transform.translation.z = config.spot_z;
    }

    commands.entity(event.entity).insert(Sprite {
        image: event.image.clone().unwrap_or_default(),
        color: config.spot_tint,
        custom_size: Some(event.size),
        ..default()
    });
}

/// Observer that renders rocks at full tint.
pub fn on_rock_spawned(
    trigger: On<RockSpawned>,
    config: Res<FieldRenderConfig>,
    mut transform_query: Query<&mut Transform>,
    mut commands: Commands,
) {
    let event = trigger.event();

    let Some(image) = event.image.clone() else {
        warn!("Rock {:?} has no tile image, skipping sprite", event.entity);
        return;
    };

    if let Ok(mut transform) = transform_query.get_mut(event.entity) {
        transform.translation.z = config.entity_z;
    }

    commands.entity(event.entity).insert(Sprite {
        image,
        custom_size: Some(event.size),
        ..default()
    });
}

/// Observer that renders obstructions at full tint.
pub fn on_obstruction_spawned(
    trigger: On<ObstructionSpawned>,
    config: Res<FieldRenderConfig>,
    mut transform_query: Query<&mut Transform>,
    mut commands: Commands,
) {
    let event = trigger.event();

    let Some(image) = event.image.clone() else {
        warn!(
            "Obstruction {:?} has no tile image, skipping sprite",
            event.entity
        );
        return;
    };

    if let Ok(mut transform) = transform_query.get_mut(event.entity) {
        transform.translation.z = config.entity_z;
    }

    commands.entity(event.entity).insert(Sprite {
        image,
        custom_size: Some(event.size),
        ..default()
    });
}

/// Observer that renders decorations showing one sheet frame at a time.
///
/// The first frame's source rect comes from the sheet grid; the animation
/// system moves it from there. A grid that does not divide the image falls
/// back to drawing the whole sheet, unanimated.
pub fn on_decoration_spawned(
    trigger: On<DecorationSpawned>,
    config: Res<FieldRenderConfig>,
    mut transform_query: Query<&mut Transform>,
    mut commands: Commands,
) {
    let event = trigger.event();

    if let Ok(mut transform) = transform_query.get_mut(event.entity) {
        transform.translation.z = config.entity_z;
    }

    let Some(rect) = frame_rect(&event.sheet, event.image_size, 0) else {
        warn!(
            "Decoration sheet {:?} does not divide its {}x{} image, drawing the whole sheet",
            event.sheet.name, event.image_size.x, event.image_size.y
        );
        commands.entity(event.entity).insert(Sprite {
            image: event.image.clone(),
            custom_size: Some(event.size),
            ..default()
        });
        return;
    };

    commands.entity(event.entity).insert(Sprite {
        image: event.image.clone(),
        rect: Some(rect),
        custom_size: Some(event.size),
        ..default()
    });

    if event.sheet.is_animated() {
        commands
            .entity(event.entity)
            .insert(DecorationAnimation::new(event.sheet.frame_count()));
    }
}

/// Observer that lifts actors to the entity draw layer.
///
/// Actor art is game territory; this only sets depth so whatever the game
/// attaches draws above spots and below the wheat overlay.
pub fn on_actor_spawned(
    trigger: On<ActorSpawned>,
    config: Res<FieldRenderConfig>,
    mut transform_query: Query<&mut Transform>,
) {
    let event = trigger.event();

    if let Ok(mut transform) = transform_query.get_mut(event.entity) {
        transform.translation.z = config.entity_z;
    }
}

/// Source rect of one sheet frame, row-major from the top left.
///
/// `None` when the grid does not divide the image evenly. Frames past the
/// end of the sheet wrap around.
pub(crate) fn frame_rect(sheet: &DecorationSheet, image_size: UVec2, frame: u32) -> Option<Rect> {
    let (frame_width, frame_height) = sheet.frame_size(image_size.x, image_size.y)?;
    let frame = frame % sheet.frame_count();
    let col = frame % sheet.frame_cols;
    let row = frame / sheet.frame_cols;
    let min = Vec2::new((col * frame_width) as f32, (row * frame_height) as f32);
    let size = Vec2::new(frame_width as f32, frame_height as f32);
    Some(Rect {
        min,
        max: min + size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cols: u32, rows: u32) -> DecorationSheet {
        DecorationSheet {
            frame_cols: cols,
            frame_rows: rows,
            name: None,
        }
    }

    #[test]
    fn test_first_frame_rect_is_top_left() {
        let rect = frame_rect(&sheet(5, 3), UVec2::new(1620, 2007), 0).unwrap();
        assert_eq!(rect.min, Vec2::ZERO);
        assert_eq!(rect.max, Vec2::new(324.0, 669.0));
    }

    #[test]
    fn test_frames_advance_row_major() {
        // Frame 7 of a 5-wide sheet sits in column 2 of row 1.
        let rect = frame_rect(&sheet(5, 3), UVec2::new(1620, 2007), 7).unwrap();
        assert_eq!(rect.min, Vec2::new(648.0, 669.0));
        assert_eq!(rect.max, Vec2::new(972.0, 1338.0));
    }

    #[test]
    fn test_frame_index_wraps() {
        let first = frame_rect(&sheet(5, 3), UVec2::new(1620, 2007), 0);
        let wrapped = frame_rect(&sheet(5, 3), UVec2::new(1620, 2007), 15);
        assert_eq!(first, wrapped);
    }

    #[test]
    fn test_uneven_grid_has_no_rect() {
        assert_eq!(frame_rect(&sheet(4, 4), UVec2::new(1921, 1627), 0), None);
    }
}
