//! End-to-end spawn tests driven by an in-memory level.
//!
//! These build a real `tiled::Map` from inline TMX (with an embedded
//! catalog, so no filesystem access happens) and run the spawn path
//! directly, then assert on the resulting ECS world.

use bevy::ecs::system::RunSystemOnce;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use bevy_cropland_assets::prelude::{CatalogReference, LevelMap, TilesetCatalog};
use bevy_cropland_core::prelude::*;
use bevy_cropland_core::spawn::spawn_level;
use bevy_cropland_core::systems::{on_populate_carrots, SpawnContext};
use bevy_cropland_schema::{CatalogReport, TileKind};

const CATALOG_TSX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tileset version="1.10" tiledversion="1.10.2" name="farm" tilewidth="64" tileheight="64" tilecount="5" columns="0">
 <tile id="0" type="PlantingSpot">
  <image source="../textures/planting_spot.png" width="64" height="64"/>
 </tile>
 <tile id="1" type="Rock">
  <image source="../textures/rock.png" width="128" height="64"/>
 </tile>
 <tile id="2" type="Obstacle">
  <image source="../textures/scarecrow.png" width="64" height="128"/>
 </tile>
 <tile id="3" type="Decoration">
  <properties>
   <property name="frame_cols" type="int" value="5"/>
   <property name="frame_rows" type="int" value="3"/>
   <property name="name" value="butterflies"/>
  </properties>
  <image source="../textures/butterflies.png" width="1620" height="2007"/>
 </tile>
 <tile id="4" type="Map">
  <properties>
   <property name="name" value="testMap"/>
   <property name="blade_color_scale" type="float" value="1.25"/>
  </properties>
  <image source="../textures/wheat_distribution.png" width="480" height="270"/>
 </tile>
</tileset>
"#;

/// 8x6 cells of 64px; one object layer per spawn path.
const FARM_TMX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" tiledversion="1.10.2" orientation="orthogonal" renderorder="right-down" width="8" height="6" tilewidth="64" tileheight="64" infinite="0" nextlayerid="5" nextobjectid="13">
 <tileset firstgid="1" name="farm" tilewidth="64" tileheight="64" tilecount="5" columns="0">
  <tile id="0" type="PlantingSpot">
   <image source="../textures/planting_spot.png" width="64" height="64"/>
  </tile>
  <tile id="1" type="Rock">
   <image source="../textures/rock.png" width="128" height="64"/>
  </tile>
  <tile id="2" type="Obstacle">
   <image source="../textures/scarecrow.png" width="64" height="128"/>
  </tile>
  <tile id="3" type="Decoration">
   <properties>
    <property name="frame_cols" type="int" value="5"/>
    <property name="frame_rows" type="int" value="3"/>
    <property name="name" value="butterflies"/>
   </properties>
   <image source="../textures/butterflies.png" width="1620" height="2007"/>
  </tile>
  <tile id="4" type="Map">
   <properties>
    <property name="name" value="testMap"/>
    <property name="blade_color_scale" type="float" value="1.25"/>
   </properties>
   <image source="../textures/wheat_distribution.png" width="480" height="270"/>
  </tile>
 </tileset>
 <objectgroup id="2" name="wheat">
  <object id="1" gid="5" x="0" y="384" width="64" height="64"/>
 </objectgroup>
 <objectgroup id="3" name="environment">
  <object id="2" gid="1" x="64" y="128" width="64" height="64"/>
  <object id="3" gid="1" x="256" y="256" width="64" height="64"/>
  <object id="4" gid="2" x="128" y="320" width="128" height="64"/>
  <object id="5" gid="3" x="320" y="384" width="64" height="128"/>
  <object id="6" gid="4" x="384" y="192" width="64" height="64"/>
 </objectgroup>
 <objectgroup id="4" name="entities">
  <object id="7" type="Farmer" x="64" y="64" width="64" height="64"/>
  <object id="8" type="Baby" x="128" y="128" width="32" height="32"/>
  <object id="9" type="Baby" x="192" y="192" width="32" height="32"/>
  <object id="10" type="Carrot" x="64" y="192" width="64" height="64"/>
  <object id="11" type="Carrot" x="128" y="192" width="64" height="64"/>
  <object id="12" type="Carrot" x="192" y="192" width="64" height="64"/>
 </objectgroup>
</map>
"#;

/// A map full of content the spawner must skip: an object with no tile
/// reference, an unrecognized layer and a hidden environment layer.
const SPARSE_TMX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" tiledversion="1.10.2" orientation="orthogonal" renderorder="right-down" width="4" height="4" tilewidth="64" tileheight="64" infinite="0" nextlayerid="5" nextobjectid="6">
 <tileset firstgid="1" name="farm" tilewidth="64" tileheight="64" tilecount="5" columns="0">
  <tile id="0" type="PlantingSpot">
   <image source="../textures/planting_spot.png" width="64" height="64"/>
  </tile>
  <tile id="1" type="Rock">
   <image source="../textures/rock.png" width="128" height="64"/>
  </tile>
 </tileset>
 <objectgroup id="2" name="environment">
  <object id="1" x="64" y="64" width="64" height="64"/>
  <object id="2" gid="1" x="128" y="128" width="64" height="64"/>
 </objectgroup>
 <objectgroup id="3" name="scenery">
  <object id="3" gid="1" x="0" y="64" width="64" height="64"/>
 </objectgroup>
 <objectgroup id="4" name="environment" visible="0">
  <object id="4" gid="2" x="0" y="128" width="128" height="64"/>
 </objectgroup>
</map>
"#;

#[derive(Resource)]
struct Fixture {
    level: LevelMap,
    level_entity: Entity,
}

fn catalog_from_tsx() -> TilesetCatalog {
    let mut loader = tiled::Loader::new();
    let tileset = loader
        .load_tsx_tileset_from(CATALOG_TSX.as_bytes(), "assets/catalogs/farm.tsx")
        .unwrap();

    let mut tile_images = HashMap::new();
    let mut kinds = HashMap::new();
    for (id, tile) in tileset.tiles() {
        if tile.image.is_some() {
            tile_images.insert(id, Handle::default());
        }
        if let Some(kind) = tile.user_type.as_deref().and_then(TileKind::parse) {
            kinds.insert(id, kind);
        }
    }

    TilesetCatalog {
        tileset,
        atlas_image: None,
        tile_images,
        tile_size: UVec2::splat(64),
        grid_size: UVec2::ZERO,
        spacing: 0,
        margin: 0,
        kinds,
        report: CatalogReport::new(),
    }
}

fn drive_spawn(
    fixture: Res<Fixture>,
    catalogs: Res<Assets<TilesetCatalog>>,
    config: Res<CroplandCoreConfig>,
    mut commands: Commands,
) {
    let context = SpawnContext::new(&fixture.level, &catalogs, &config);
    spawn_level(&mut commands, fixture.level_entity, &context);
}

fn spawn_world(tmx: &str, config: CroplandCoreConfig) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(config);

    let mut catalog_assets = Assets::<TilesetCatalog>::default();
    let handle = catalog_assets.add(catalog_from_tsx());
    world.insert_resource(catalog_assets);

    let mut loader = tiled::Loader::new();
    let map = loader
        .load_tmx_map_from(tmx.as_bytes(), "assets/levels/test.tmx")
        .unwrap();
    let grid_size = UVec2::new(map.width, map.height);
    let rect = Rect::new(
        0.0,
        0.0,
        (map.width * map.tile_width) as f32,
        (map.height * map.tile_height) as f32,
    );
    let level = LevelMap {
        map,
        catalogs: vec![CatalogReference {
            handle,
            first_gid: 1,
        }],
        grid_size,
        rect,
    };

    let level_entity = world.spawn_empty().id();
    world.insert_resource(Fixture {
        level,
        level_entity,
    });
    world.add_observer(on_populate_carrots);
    world.run_system_once(drive_spawn).unwrap();
    (world, level_entity)
}

#[test]
fn spawns_full_level_hierarchy() {
    let (mut world, level_entity) = spawn_world(FARM_TMX, CroplandCoreConfig::default());

    // 1 wheat + 5 environment + 1 farmer + 2 babies + 4 boundaries
    assert_eq!(world.get::<FarmPieces>(level_entity).unwrap().0.len(), 13);
    assert_eq!(world.get::<Children>(level_entity).unwrap().len(), 13);

    let geometry = world.get::<LevelGeometry>(level_entity).unwrap();
    assert_eq!(geometry.size, UVec2::new(8, 6));
    assert_eq!(geometry.tile_size, Vec2::splat(64.0));

    let mut spot_query = world.query::<(&PlantingSpot, &Transform)>();
    let mut spots: Vec<(u32, Vec2)> = spot_query
        .iter(&world)
        .map(|(spot, transform)| (spot.index, transform.translation.truncate()))
        .collect();
    spots.sort_by_key(|(index, _)| *index);
    assert_eq!(
        spots,
        vec![(0, Vec2::new(1.5, 4.5)), (1, Vec2::new(4.5, 2.5))]
    );

    let mut rock_query = world.query_filtered::<&Transform, With<Rock>>();
    let rocks: Vec<Vec2> = rock_query
        .iter(&world)
        .map(|transform| transform.translation.truncate())
        .collect();
    assert_eq!(rocks, vec![Vec2::new(3.0, 1.5)]);

    let mut obstruction_query =
        world.query_filtered::<(&Transform, &PieceExtent), With<Obstruction>>();
    let obstructions: Vec<(Vec2, Vec2)> = obstruction_query
        .iter(&world)
        .map(|(transform, extent)| (transform.translation.truncate(), extent.0))
        .collect();
    assert_eq!(
        obstructions,
        vec![(Vec2::new(5.5, 1.0), Vec2::new(1.0, 2.0))]
    );

    let mut decoration_query = world.query::<&Decoration>();
    let decorations: Vec<&Decoration> = decoration_query.iter(&world).collect();
    assert_eq!(decorations.len(), 1);
    assert_eq!(decorations[0].sheet.frame_cols, 5);
    assert_eq!(decorations[0].sheet.frame_rows, 3);
    assert_eq!(decorations[0].image_size, UVec2::new(1620, 2007));

    let mut field_query = world.query::<&WheatField>();
    let fields: Vec<&WheatField> = field_query.iter(&world).collect();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].map_name, "testMap");
    assert_eq!(fields[0].blade_color_scale, 1.25);

    let mut farmer_query = world.query::<&Farmer>();
    assert_eq!(farmer_query.iter(&world).count(), 1);

    let mut baby_query = world.query::<&BabyCarrot>();
    let mut babies: Vec<u32> = baby_query.iter(&world).map(|baby| baby.index).collect();
    babies.sort_unstable();
    assert_eq!(babies, vec![0, 1]);

    // Carrot objects only record spawn points, no entities yet
    let mut carrot_query = world.query::<&Carrot>();
    assert_eq!(carrot_query.iter(&world).count(), 0);
    let points = world.get::<CarrotSpawnPoints>(level_entity).unwrap();
    assert_eq!(
        points.0,
        vec![
            Vec2::new(1.5, 3.5),
            Vec2::new(2.5, 3.5),
            Vec2::new(3.5, 3.5)
        ]
    );

    let mut boundary_query = world.query_filtered::<&Transform, With<Boundary>>();
    let boundaries: Vec<Vec2> = boundary_query
        .iter(&world)
        .map(|transform| transform.translation.truncate())
        .collect();
    assert_eq!(boundaries.len(), 4);
    assert!(boundaries.contains(&Vec2::new(-0.5, 3.0)));
    assert!(boundaries.contains(&Vec2::new(8.5, 3.0)));
    assert!(boundaries.contains(&Vec2::new(4.0, -0.5)));
    assert!(boundaries.contains(&Vec2::new(4.0, 6.5)));
}

#[test]
fn pieces_link_back_to_their_level() {
    let (mut world, level_entity) = spawn_world(FARM_TMX, CroplandCoreConfig::default());

    let mut owner_query = world.query::<&FarmPieceOf>();
    let owners: Vec<Entity> = owner_query.iter(&world).map(|owner| owner.0).collect();
    assert_eq!(owners.len(), 13);
    assert!(owners.iter().all(|owner| *owner == level_entity));
}

#[test]
fn skips_unusable_objects_and_layers() {
    let (mut world, level_entity) = spawn_world(SPARSE_TMX, CroplandCoreConfig::default());

    // Only the typed, visible environment object spawned
    let mut spot_query = world.query::<&PlantingSpot>();
    assert_eq!(spot_query.iter(&world).count(), 1);
    let mut rock_query = world.query::<&Rock>();
    assert_eq!(rock_query.iter(&world).count(), 0);

    // 1 spot + 4 boundaries
    assert_eq!(world.get::<FarmPieces>(level_entity).unwrap().0.len(), 5);
}

#[test]
fn boundaries_can_be_disabled() {
    let config = CroplandCoreConfig {
        auto_boundaries: false,
        ..Default::default()
    };
    let (mut world, level_entity) = spawn_world(FARM_TMX, config);

    let mut boundary_query = world.query_filtered::<(), With<Boundary>>();
    assert_eq!(boundary_query.iter(&world).count(), 0);
    assert_eq!(world.get::<FarmPieces>(level_entity).unwrap().0.len(), 9);
}

#[test]
fn populate_carrots_spawns_at_recorded_points() {
    let (mut world, level_entity) = spawn_world(FARM_TMX, CroplandCoreConfig::default());

    world.trigger(PopulateCarrots {
        level: level_entity,
        count: 2,
    });

    let mut carrot_query = world.query::<(&Carrot, &Transform)>();
    let mut carrots: Vec<(u32, Vec2)> = carrot_query
        .iter(&world)
        .map(|(carrot, transform)| (carrot.index, transform.translation.truncate()))
        .collect();
    carrots.sort_by_key(|(index, _)| *index);
    assert_eq!(
        carrots,
        vec![(0, Vec2::new(1.5, 3.5)), (1, Vec2::new(2.5, 3.5))]
    );

    // Carrots joined the piece list and the hierarchy
    assert_eq!(world.get::<FarmPieces>(level_entity).unwrap().0.len(), 15);
    assert_eq!(world.get::<Children>(level_entity).unwrap().len(), 15);
}

#[test]
fn populate_carrots_clamps_to_recorded_points() {
    let (mut world, level_entity) = spawn_world(FARM_TMX, CroplandCoreConfig::default());

    world.trigger(PopulateCarrots {
        level: level_entity,
        count: 99,
    });

    let mut carrot_query = world.query::<&Carrot>();
    assert_eq!(carrot_query.iter(&world).count(), 3);
    assert_eq!(world.get::<FarmPieces>(level_entity).unwrap().0.len(), 16);
}
