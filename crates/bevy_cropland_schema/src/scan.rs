//! Structural scan of raw `.tsx` XML.
//!
//! The `tiled` parser stores tiles keyed by id, so a catalog with duplicate
//! ids parses cleanly with last-wins semantics and the defect is invisible
//! afterwards. This pass walks the raw document instead and records every
//! tile id in order, which is enough to make duplicates (and the declared
//! `tilecount`) checkable.

use std::collections::HashMap;
use std::io::Read;

use thiserror::Error;
use xml::reader::{EventReader, XmlEvent};

/// Errors that stop a structural scan outright.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read tileset XML: {0}")]
    Xml(#[from] xml::reader::Error),
    #[error("root element is `{found}`, expected `tileset`")]
    NotATileset { found: String },
    #[error("tile element is missing its `id` attribute")]
    MissingTileId,
    #[error("malformed tile id `{value}`")]
    BadTileId { value: String },
}

/// Raw facts about one `.tsx` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsxScan {
    /// Tileset name attribute, empty if absent.
    pub name: String,
    /// Declared `tilecount` attribute, if present and numeric.
    pub declared_tilecount: Option<u32>,
    /// Declared `columns` attribute, if present and numeric.
    pub columns: Option<u32>,
    /// Every `<tile id>` in document order, duplicates included.
    pub tile_ids: Vec<u32>,
}

impl TsxScan {
    /// `columns="0"` marks an image-collection tileset (one image per tile).
    pub fn is_image_collection(&self) -> bool {
        self.columns == Some(0)
    }

    /// Ids that appear more than once, in first-seen order, with their
    /// occurrence counts.
    pub fn duplicate_ids(&self) -> Vec<(u32, usize)> {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for id in &self.tile_ids {
            *counts.entry(*id).or_insert(0) += 1;
        }
        let mut seen = Vec::new();
        let mut out = Vec::new();
        for id in &self.tile_ids {
            if counts[id] > 1 && !seen.contains(id) {
                seen.push(*id);
                out.push((*id, counts[id]));
            }
        }
        out
    }

    /// Number of distinct tile ids.
    pub fn unique_id_count(&self) -> u32 {
        let mut ids = self.tile_ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len() as u32
    }
}

/// Streams a `.tsx` document and collects its structural facts.
///
/// Only tiles that are direct children of the root `tileset` element count;
/// a non-tileset root (for example a `.tmx` map passed by mistake) is an
/// error.
pub fn scan_tsx<R: Read>(reader: R) -> Result<TsxScan, ScanError> {
    let mut scan = TsxScan {
        name: String::new(),
        declared_tilecount: None,
        columns: None,
        tile_ids: Vec::new(),
    };

    let mut depth = 0usize;
    let mut saw_root = false;

    for event in EventReader::new(reader) {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if !saw_root {
                    if name.local_name != "tileset" {
                        return Err(ScanError::NotATileset {
                            found: name.local_name,
                        });
                    }
                    saw_root = true;
                    for attr in &attributes {
                        match attr.name.local_name.as_str() {
                            "name" => scan.name = attr.value.clone(),
                            "tilecount" => scan.declared_tilecount = attr.value.parse().ok(),
                            "columns" => scan.columns = attr.value.parse().ok(),
                            _ => {}
                        }
                    }
                } else if depth == 1 && name.local_name == "tile" {
                    let id = attributes
                        .iter()
                        .find(|a| a.name.local_name == "id")
                        .ok_or(ScanError::MissingTileId)?;
                    let parsed = id.value.parse().map_err(|_| ScanError::BadTileId {
                        value: id.value.clone(),
                    })?;
                    scan.tile_ids.push(parsed);
                }
                depth += 1;
            }
            XmlEvent::EndElement { .. } => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shaped like the shipped environment catalog: collection tileset,
    // id gap at 5.
    const ENVIRONMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tileset version="1.10" tiledversion="1.10.1" name="environment" tilewidth="2204" tileheight="2007" tilecount="6" columns="0">
 <grid orientation="orthogonal" width="1" height="1"/>
 <tile id="0" type="PlantingSpot">
  <image width="96" height="96" source="spot.png"/>
 </tile>
 <tile id="1" type="Rock">
  <image width="512" height="512" source="../textures/rock.png"/>
 </tile>
 <tile id="6" type="Decoration">
  <properties>
   <property name="frame_cols" type="int" value="5"/>
   <property name="frame_rows" type="int" value="3"/>
  </properties>
  <image width="1620" height="2007" source="../textures/mill.png"/>
 </tile>
</tileset>"#;

    #[test]
    fn scans_collection_tileset() {
        let scan = scan_tsx(ENVIRONMENT.as_bytes()).unwrap();
        assert_eq!(scan.name, "environment");
        assert_eq!(scan.declared_tilecount, Some(6));
        assert!(scan.is_image_collection());
        assert_eq!(scan.tile_ids, vec![0, 1, 6]);
        assert!(scan.duplicate_ids().is_empty());
        assert_eq!(scan.unique_id_count(), 3);
    }

    #[test]
    fn finds_duplicate_ids() {
        let xml = r#"<tileset name="broken" tilecount="3" columns="0">
 <tile id="0"><image source="a.png" width="8" height="8"/></tile>
 <tile id="1"><image source="b.png" width="8" height="8"/></tile>
 <tile id="0"><image source="c.png" width="8" height="8"/></tile>
</tileset>"#;
        let scan = scan_tsx(xml.as_bytes()).unwrap();
        assert_eq!(scan.tile_ids, vec![0, 1, 0]);
        assert_eq!(scan.duplicate_ids(), vec![(0, 2)]);
        assert_eq!(scan.unique_id_count(), 2);
    }

    #[test]
    fn nested_elements_are_not_tiles() {
        // objectgroup/object inside a tile must not be mistaken for tiles.
        let xml = r#"<tileset name="collision" tilecount="1" columns="0">
 <tile id="4">
  <objectgroup draworder="index" id="2">
   <object id="1" x="0" y="0" width="8" height="8"/>
  </objectgroup>
  <image source="a.png" width="8" height="8"/>
 </tile>
</tileset>"#;
        let scan = scan_tsx(xml.as_bytes()).unwrap();
        assert_eq!(scan.tile_ids, vec![4]);
    }

    #[test]
    fn rejects_non_tileset_root() {
        let xml = r#"<map version="1.10" width="32" height="18"/>"#;
        match scan_tsx(xml.as_bytes()) {
            Err(ScanError::NotATileset { found }) => assert_eq!(found, "map"),
            other => panic!("expected NotATileset, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        let xml = r#"<tileset name="bad" columns="0">
 <tile id="zero"><image source="a.png" width="8" height="8"/></tile>
</tileset>"#;
        assert!(matches!(
            scan_tsx(xml.as_bytes()),
            Err(ScanError::BadTileId { .. })
        ));
    }
}
