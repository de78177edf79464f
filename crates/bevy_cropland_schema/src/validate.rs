//! Semantic validation of parsed tilesets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use normalize_path::NormalizePath;

use crate::kind::TileKind;
use crate::records::{DecorationSheet, MapEntry};
use crate::report::{CatalogReport, Problem};
use crate::scan::TsxScan;

/// Environment knobs for [`validate_tileset`].
#[derive(Debug, Clone, Default)]
pub struct CatalogRules {
    /// When set, tile image paths must normalize to a location under this
    /// directory and point at an existing file. The existence check touches
    /// the filesystem, so leave this unset inside asset loaders.
    pub content_root: Option<PathBuf>,
}

impl CatalogRules {
    /// Rules that additionally resolve image paths under `root`.
    pub fn with_content_root(root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: Some(root.into()),
        }
    }
}

/// Checks one parsed tileset against the catalog schema.
///
/// Pass the matching [`TsxScan`] when available; structural findings such as
/// duplicate ids can only come from the raw document. The report collects
/// every defect instead of stopping at the first one.
pub fn validate_tileset(
    tileset: &tiled::Tileset,
    scan: Option<&TsxScan>,
    rules: &CatalogRules,
) -> CatalogReport {
    let mut report = CatalogReport::new();
    let name = tileset.name.as_str();
    let is_collection = tileset.image.is_none();

    if let Some(scan) = scan {
        for (id, count) in scan.duplicate_ids() {
            report.push(name, Some(id), Problem::DuplicateTileId { id, count });
        }
    }

    // Spritesheet tilesets list only tiles that carry extra data, so the
    // declared count is comparable to the tile elements only for collections.
    if is_collection {
        let actual = match scan {
            Some(scan) => scan.unique_id_count(),
            None => tileset.tiles().len() as u32,
        };
        if tileset.tilecount != actual {
            report.push(
                name,
                None,
                Problem::TileCountMismatch {
                    declared: tileset.tilecount,
                    actual,
                },
            );
        }
    }

    // Tiles live in a hash map; sort so reports come out in a stable order.
    let mut tiles: Vec<_> = tileset.tiles().collect();
    tiles.sort_by_key(|(id, _)| *id);

    let mut map_names = HashSet::new();
    for (id, tile) in tiles {
        let id = Some(id);

        if is_collection && tile.image.is_none() {
            report.push(name, id, Problem::MissingImage);
        }
        if let (Some(root), Some(image)) = (&rules.content_root, &tile.image) {
            check_image_path(&mut report, name, id, root, &image.source);
        }

        match tile.user_type.as_deref().filter(|tag| !tag.is_empty()) {
            None => report.push(name, id, Problem::MissingKind),
            Some(tag) => match TileKind::parse(tag) {
                None => report.push(
                    name,
                    id,
                    Problem::UnknownKind {
                        found: tag.to_owned(),
                    },
                ),
                Some(kind) => check_kind(&mut report, name, id, kind, &tile, &mut map_names),
            },
        }
    }

    report
}

fn check_kind(
    report: &mut CatalogReport,
    tileset: &str,
    tile_id: Option<u32>,
    kind: TileKind,
    tile: &tiled::TileData,
    map_names: &mut HashSet<String>,
) {
    match kind {
        TileKind::Decoration => match DecorationSheet::from_properties(&tile.properties) {
            Err(source) => report.push(
                tileset,
                tile_id,
                Problem::BadRecord {
                    kind: "decoration",
                    source,
                },
            ),
            Ok(sheet) => {
                if let Some(image) = &tile.image {
                    let (width, height) = (image.width as u32, image.height as u32);
                    if !sheet.divides(width, height) {
                        report.push(
                            tileset,
                            tile_id,
                            Problem::UnevenFrameGrid {
                                cols: sheet.frame_cols,
                                rows: sheet.frame_rows,
                                width,
                                height,
                            },
                        );
                    }
                }
            }
        },
        TileKind::Map => match MapEntry::from_properties(&tile.properties) {
            Err(source) => report.push(
                tileset,
                tile_id,
                Problem::BadRecord {
                    kind: "map entry",
                    source,
                },
            ),
            Ok(entry) => {
                if !tile.properties.contains_key("blade_color_scale") {
                    report.push(tileset, tile_id, Problem::DefaultedBladeScale);
                }
                if !map_names.insert(entry.name.clone()) {
                    report.push(tileset, tile_id, Problem::DuplicateMapName { name: entry.name });
                }
            }
        },
        TileKind::PlantingSpot | TileKind::Rock | TileKind::Obstacle => {}
    }
}

/// Image sources come out of the parser already joined onto the `.tsx`
/// location, so a lexical normalize is enough to see where they land.
fn check_image_path(
    report: &mut CatalogReport,
    tileset: &str,
    tile_id: Option<u32>,
    root: &Path,
    source: &Path,
) {
    let Some(resolved) = source.try_normalize() else {
        report.push(
            tileset,
            tile_id,
            Problem::EscapingImagePath {
                path: source.to_path_buf(),
            },
        );
        return;
    };
    if !resolved.starts_with(root.normalize()) {
        report.push(
            tileset,
            tile_id,
            Problem::EscapingImagePath {
                path: source.to_path_buf(),
            },
        );
    } else if !resolved.exists() {
        report.push(
            tileset,
            tile_id,
            Problem::UnresolvedImagePath { path: resolved },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::scan::scan_tsx;

    fn parse(xml: &str) -> tiled::Tileset {
        tiled::Loader::new()
            .load_tsx_tileset_from(xml.as_bytes(), "assets/catalogs/test.tsx")
            .unwrap()
    }

    #[test]
    fn clean_catalog_has_no_findings() {
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="2204" tileheight="2007" tilecount="2" columns="0">
 <tile id="0" type="PlantingSpot">
  <image width="96" height="96" source="spot.png"/>
 </tile>
 <tile id="3" type="Decoration">
  <properties>
   <property name="frame_cols" type="int" value="5"/>
   <property name="frame_rows" type="int" value="3"/>
  </properties>
  <image width="1620" height="2007" source="mill.png"/>
 </tile>
</tileset>"#;
        let scan = scan_tsx(xml.as_bytes()).unwrap();
        let report = validate_tileset(&parse(xml), Some(&scan), &CatalogRules::default());
        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="8" tileheight="8" tilecount="1" columns="0">
 <tile id="0" type="Tree">
  <image width="8" height="8" source="tree.png"/>
 </tile>
</tileset>"#;
        let report = validate_tileset(&parse(xml), None, &CatalogRules::default());
        assert!(report.has_errors());
        assert!(matches!(
            report.findings()[0].problem,
            Problem::UnknownKind { ref found } if found == "Tree"
        ));
    }

    #[test]
    fn untagged_tile_is_a_warning() {
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="8" tileheight="8" tilecount="1" columns="0">
 <tile id="0">
  <image width="8" height="8" source="mystery.png"/>
 </tile>
</tileset>"#;
        let report = validate_tileset(&parse(xml), None, &CatalogRules::default());
        assert!(!report.has_errors());
        assert_eq!(report.findings()[0].severity, Severity::Warning);
        assert!(matches!(report.findings()[0].problem, Problem::MissingKind));
    }

    #[test]
    fn decoration_without_grid_is_a_bad_record() {
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="8" tileheight="8" tilecount="1" columns="0">
 <tile id="2" type="Decoration">
  <image width="64" height="64" source="bush.png"/>
 </tile>
</tileset>"#;
        let report = validate_tileset(&parse(xml), None, &CatalogRules::default());
        assert!(report.has_errors());
        assert!(matches!(
            report.findings()[0].problem,
            Problem::BadRecord { kind: "decoration", .. }
        ));
    }

    #[test]
    fn uneven_frame_grid_is_reported() {
        // 1921 does not divide by 4.
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="8" tileheight="8" tilecount="1" columns="0">
 <tile id="0" type="Decoration">
  <properties>
   <property name="frame_cols" type="int" value="4"/>
   <property name="frame_rows" type="int" value="1"/>
  </properties>
  <image width="1921" height="1627" source="tractor.png"/>
 </tile>
</tileset>"#;
        let report = validate_tileset(&parse(xml), None, &CatalogRules::default());
        assert!(matches!(
            report.findings()[0].problem,
            Problem::UnevenFrameGrid {
                cols: 4,
                rows: 1,
                width: 1921,
                height: 1627,
            }
        ));
    }

    #[test]
    fn map_entries_default_scale_and_duplicate_names() {
        let xml = r#"<tileset version="1.10" name="maps" tilewidth="480" tileheight="270" tilecount="2" columns="0">
 <tile id="0" type="Map">
  <properties>
   <property name="name" value="testMap"/>
  </properties>
  <image width="480" height="270" source="testMap.png"/>
 </tile>
 <tile id="1" type="Map">
  <properties>
   <property name="name" value="testMap"/>
   <property name="blade_color_scale" type="float" value="1.105"/>
  </properties>
  <image width="480" height="270" source="testMap2.png"/>
 </tile>
</tileset>"#;
        let report = validate_tileset(&parse(xml), None, &CatalogRules::default());
        assert!(!report.has_errors());
        let problems: Vec<_> = report.findings().iter().map(|f| &f.problem).collect();
        assert!(problems.iter().any(|p| matches!(p, Problem::DefaultedBladeScale)));
        assert!(problems.iter().any(
            |p| matches!(p, Problem::DuplicateMapName { name } if name == "testMap")
        ));
    }

    #[test]
    fn scan_feeds_duplicate_and_count_findings() {
        let xml = r#"<tileset version="1.10" name="broken" tilewidth="8" tileheight="8" tilecount="3" columns="0">
 <tile id="0" type="Rock">
  <image width="8" height="8" source="a.png"/>
 </tile>
 <tile id="0" type="Rock">
  <image width="8" height="8" source="b.png"/>
 </tile>
</tileset>"#;
        let scan = scan_tsx(xml.as_bytes()).unwrap();
        let report = validate_tileset(&parse(xml), Some(&scan), &CatalogRules::default());
        assert!(report.has_errors());
        assert!(report.findings().iter().any(
            |f| matches!(f.problem, Problem::DuplicateTileId { id: 0, count: 2 })
        ));
        // Declared three tiles, only one distinct id made it through.
        assert!(report.findings().iter().any(
            |f| matches!(f.problem, Problem::TileCountMismatch { declared: 3, actual: 1 })
        ));
    }

    #[test]
    fn escaping_image_path_is_flagged_under_a_root() {
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="8" tileheight="8" tilecount="1" columns="0">
 <tile id="0" type="Rock">
  <image width="8" height="8" source="../../../textures/far.png"/>
 </tile>
</tileset>"#;
        let rules = CatalogRules::with_content_root("assets");
        let report = validate_tileset(&parse(xml), None, &rules);
        assert!(report.findings().iter().any(
            |f| matches!(f.problem, Problem::EscapingImagePath { .. })
        ));
    }

    #[test]
    fn in_root_but_absent_image_is_unresolved() {
        let xml = r#"<tileset version="1.10" name="environment" tilewidth="8" tileheight="8" tilecount="1" columns="0">
 <tile id="0" type="Rock">
  <image width="8" height="8" source="rock.png"/>
 </tile>
</tileset>"#;
        let rules = CatalogRules::with_content_root("assets");
        let report = validate_tileset(&parse(xml), None, &rules);
        assert!(report.findings().iter().any(
            |f| matches!(f.problem, Problem::UnresolvedImagePath { .. })
        ));
    }
}
