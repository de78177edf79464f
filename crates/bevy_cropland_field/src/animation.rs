//! Decoration animation component and update system.

use bevy::prelude::*;
use bevy_cropland_core::components::Decoration;

use crate::sprites::frame_rect;

/// Component attached to animated decorations.
///
/// Playback runs the whole sheet over one fixed cycle, so sheets with more
/// frames play faster rather than longer.
#[derive(Component, Debug, Clone)]
pub struct DecorationAnimation {
    /// Total frames in the sheet.
    pub frame_count: u32,
    /// Seconds one full pass over the sheet takes.
    pub cycle_seconds: f32,
    /// Time into the current cycle (seconds).
    pub elapsed: f32,
}

impl DecorationAnimation {
    /// Cycle length used unless the game overrides it.
    pub const DEFAULT_CYCLE_SECONDS: f32 = 1.5;

    /// Create an animation over `frame_count` frames at the default cycle.
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count,
            cycle_seconds: Self::DEFAULT_CYCLE_SECONDS,
            elapsed: 0.0,
        }
    }

    /// Frame to show for the current elapsed time (`0..frame_count`).
    pub fn frame(&self) -> u32 {
        if self.frame_count == 0 || self.cycle_seconds <= 0.0 {
            return 0;
        }
        let progress = self.elapsed / self.cycle_seconds;
        ((progress * self.frame_count as f32) as u32).min(self.frame_count - 1)
    }

    /// Advance playback, wrapping at the end of the cycle.
    pub fn advance(&mut self, delta_seconds: f32) {
        if self.cycle_seconds <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + delta_seconds) % self.cycle_seconds;
    }
}

/// System that updates all animated decorations.
///
/// Advances playback based on elapsed time and moves each sprite's source
/// rect when its frame changes.
pub fn update_decoration_animations(
    time: Res<Time>,
    mut decorations: Query<(&mut DecorationAnimation, &mut Sprite, &Decoration)>,
) {
    let delta = time.delta_secs();

    for (mut animation, mut sprite, decoration) in &mut decorations {
        let shown = animation.frame();
        animation.advance(delta);
        let next = animation.frame();
        if next == shown {
            continue;
        }
        if let Some(rect) = frame_rect(&decoration.sheet, decoration.image_size, next) {
            sprite.rect = Some(rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_covers_the_sheet_in_one_cycle() {
        let mut animation = DecorationAnimation::new(15);
        assert_eq!(animation.frame(), 0);

        animation.advance(0.55);
        assert_eq!(animation.frame(), 5);

        animation.advance(0.9);
        assert_eq!(animation.frame(), 14);
    }

    #[test]
    fn test_playback_wraps_to_the_first_frame() {
        let mut animation = DecorationAnimation::new(15);
        animation.advance(1.55);
        assert!((animation.elapsed - 0.05).abs() < 1e-5);
        assert_eq!(animation.frame(), 0);
    }

    #[test]
    fn test_single_frame_sheet_never_advances() {
        let mut animation = DecorationAnimation::new(1);
        animation.advance(0.7);
        assert_eq!(animation.frame(), 0);
    }
}
