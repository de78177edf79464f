//! Wheat coverage mask sampled from the distribution texture.

use bevy::prelude::*;
use bevy_cropland_core::components::{
    BabyCarrot, Carrot, FarmPieceOf, Farmer, LevelGeometry, WheatField,
};

/// Grid of wheat coverage over a level, one cell per map tile.
///
/// Built from the distribution texture's alpha channel once the image
/// finishes loading, and attached to the wheat field entity. Each cell holds
/// the strongest alpha in its pixel block (`0.0..=1.0`); row zero is the top
/// map row, matching the texture.
#[derive(Component, Debug, Clone)]
pub struct WheatMask {
    cells: Vec<f32>,
    width: u32,
    height: u32,
}

impl WheatMask {
    /// Build a mask from raw cell values, row-major from the top left.
    ///
    /// `None` when the dimensions do not match the cell count.
    pub fn from_cells(cells: Vec<f32>, width: u32, height: u32) -> Option<Self> {
        ((width * height) as usize == cells.len()).then_some(Self {
            cells,
            width,
            height,
        })
    }

    /// Downsample an image's alpha channel to one cell per grid tile.
    ///
    /// Pixels the renderer cannot read back count as empty.
    pub fn from_image(image: &Image, grid: UVec2) -> Self {
        let width = grid.x.max(1);
        let height = grid.y.max(1);
        let mut cells = vec![0.0; (width * height) as usize];
        for row in 0..height {
            let (y_start, y_end) = cell_pixel_range(row, height, image.height());
            for col in 0..width {
                let (x_start, x_end) = cell_pixel_range(col, width, image.width());
                let mut strongest = 0.0f32;
                for y in y_start..y_end {
                    for x in x_start..x_end {
                        let alpha = image.get_color_at(x, y).map_or(0.0, |color| color.alpha());
                        strongest = strongest.max(alpha);
                    }
                }
                cells[(row * width + col) as usize] = strongest;
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Cells per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows in the mask.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at a world position, `0.0` outside the level.
    pub fn sample(&self, world: Vec2) -> f32 {
        match self.cell_index(world) {
            Some(index) => self.cells[index],
            None => 0.0,
        }
    }

    /// Wheat height at a world position in shader units.
    pub fn height_at(&self, world: Vec2, max_height: f32) -> f32 {
        self.sample(world) * max_height
    }

    /// Whether any wheat grows at a world position.
    pub fn covers(&self, world: Vec2) -> bool {
        self.sample(world) > 0.0
    }

    fn cell_index(&self, world: Vec2) -> Option<usize> {
        if world.x < 0.0 || world.y < 0.0 {
            return None;
        }
        let col = world.x as u32;
        let row_up = world.y as u32;
        if col >= self.width || row_up >= self.height {
            return None;
        }
        // World y runs up, texture rows run down.
        let row = self.height - 1 - row_up;
        Some((row * self.width + col) as usize)
    }
}

/// Pixel span `[start, end)` covered by one cell of an evenly divided axis.
///
/// Never empty while the image has pixels on this axis.
fn cell_pixel_range(cell: u32, cells: u32, pixels: u32) -> (u32, u32) {
    let start = (u64::from(cell) * u64::from(pixels) / u64::from(cells)) as u32;
    let end = ((u64::from(cell) + 1) * u64::from(pixels) / u64::from(cells)) as u32;
    (start, end.max(start + 1).min(pixels.max(1)))
}

/// Marks a tracked actor currently standing in wheat.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InWheat;

/// System that builds masks for wheat fields whose texture finished loading.
///
/// Skips fields silently until both the level geometry and the image exist;
/// once built, the mask sticks for the life of the field entity.
pub fn build_wheat_masks(
    images: Res<Assets<Image>>,
    level_query: Query<&LevelGeometry>,
    field_query: Query<(Entity, &WheatField, &FarmPieceOf), Without<WheatMask>>,
    mut commands: Commands,
) {
    for (entity, field, field_of) in &field_query {
        let Ok(geometry) = level_query.get(field_of.0) else {
            continue;
        };
        let Some(image) = images.get(&field.texture) else {
            continue;
        };
        let mask = WheatMask::from_image(image, geometry.size);
        debug!(
            "Built {}x{} wheat mask for '{}'",
            mask.width(),
            mask.height(),
            field.map_name
        );
        commands.entity(entity).insert(mask);
    }
}

/// System that keeps [`InWheat`] tags current on tracked actors.
pub fn update_in_wheat(
    mask_query: Query<(&WheatMask, &FarmPieceOf)>,
    actor_query: Query<
        (Entity, &Transform, &FarmPieceOf, Option<&InWheat>),
        Or<(With<Carrot>, With<Farmer>, With<BabyCarrot>)>,
    >,
    mut commands: Commands,
) {
    for (entity, transform, actor_of, tagged) in &actor_query {
        let covered = mask_query
            .iter()
            .filter(|(_, mask_of)| mask_of.0 == actor_of.0)
            .any(|(mask, _)| mask.covers(transform.translation.truncate()));
        if covered && tagged.is_none() {
            commands.entity(entity).insert(InWheat);
        } else if !covered && tagged.is_some() {
            commands.entity(entity).remove::<InWheat>();
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    #[test]
    fn test_sampling_flips_world_y() {
        // 2x2 mask: wheat only in the top texture row.
        let mask = WheatMask::from_cells(vec![1.0, 0.5, 0.0, 0.0], 2, 2).unwrap();

        // World (0.5, 1.5) is the upper-left tile.
        assert_eq!(mask.sample(Vec2::new(0.5, 1.5)), 1.0);
        assert_eq!(mask.sample(Vec2::new(1.5, 1.5)), 0.5);
        assert!(!mask.covers(Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn test_out_of_bounds_is_bare_ground() {
        let mask = WheatMask::from_cells(vec![1.0; 4], 2, 2).unwrap();
        assert!(!mask.covers(Vec2::new(-0.5, 0.5)));
        assert!(!mask.covers(Vec2::new(0.5, 2.5)));
        assert_eq!(mask.height_at(Vec2::new(5.0, 5.0), 15.0), 0.0);
    }

    #[test]
    fn test_height_scales_with_coverage() {
        let mask = WheatMask::from_cells(vec![0.4], 1, 1).unwrap();
        let height = mask.height_at(Vec2::new(0.5, 0.5), 15.0);
        assert!((height - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_mismatched_cell_count_is_rejected() {
        assert!(WheatMask::from_cells(vec![0.0; 3], 2, 2).is_none());
    }

    #[test]
    fn test_cell_pixel_ranges_cover_the_image() {
        // 480 px over 32 cells: 15 px each.
        assert_eq!(cell_pixel_range(0, 32, 480), (0, 15));
        assert_eq!(cell_pixel_range(31, 32, 480), (465, 480));

        // Uneven split still covers every pixel exactly once.
        assert_eq!(cell_pixel_range(0, 3, 10), (0, 3));
        assert_eq!(cell_pixel_range(1, 3, 10), (3, 6));
        assert_eq!(cell_pixel_range(2, 3, 10), (6, 10));
    }

    #[test]
    fn test_actors_gain_and_lose_the_wheat_tag() {
        let mut world = World::new();
        let level = world.spawn_empty().id();

        // Wheat covers only the left column of a 2x1 level.
        let mask = WheatMask::from_cells(vec![1.0, 0.0], 2, 1).unwrap();
        world.spawn((
            WheatField {
                map_name: "testMap".to_string(),
                blade_color_scale: 1.0,
                texture: Handle::default(),
            },
            FarmPieceOf(level),
            mask,
        ));

        let carrot = world
            .spawn((
                Carrot { index: 0 },
                FarmPieceOf(level),
                Transform::from_xyz(0.5, 0.5, 0.0),
            ))
            .id();
        let farmer = world
            .spawn((Farmer, FarmPieceOf(level), Transform::from_xyz(1.5, 0.5, 0.0)))
            .id();

        world.run_system_once(update_in_wheat).expect("system runs");
        assert!(world.get::<InWheat>(carrot).is_some());
        assert!(world.get::<InWheat>(farmer).is_none());

        // Walk the carrot onto bare ground.
        world.get_mut::<Transform>(carrot).unwrap().translation.x = 1.5;
        world.run_system_once(update_in_wheat).expect("system runs");
        assert!(world.get::<InWheat>(carrot).is_none());
    }
}
