//! Typed views of the per-kind custom properties.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tiled::Properties;

use crate::value;

/// A required property was missing or carried the wrong value shape.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RecordError {
    #[error("missing required property `{key}`")]
    Missing { key: &'static str },
    #[error("property `{key}` must be {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
    #[error("property `{key}` must be at least 1")]
    NotPositive { key: &'static str },
}

fn require<T: crate::FromPropertyValue>(
    props: &Properties,
    key: &'static str,
    expected: &'static str,
) -> Result<T, RecordError> {
    match props.get(key) {
        None => Err(RecordError::Missing { key }),
        Some(v) => T::from_value(v).ok_or(RecordError::WrongType { key, expected }),
    }
}

/// Sprite-sheet grid of a `Decoration` tile.
///
/// The decoration's image is an evenly divided grid of `frame_cols` by
/// `frame_rows` animation frames, played left to right, top to bottom.
/// A 1x1 grid is a static decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSheet {
    pub frame_cols: u32,
    pub frame_rows: u32,
    /// Editor-side label ("barn", "tractor", ...). Not required.
    pub name: Option<String>,
}

impl Default for DecorationSheet {
    fn default() -> Self {
        Self {
            frame_cols: 1,
            frame_rows: 1,
            name: None,
        }
    }
}

impl DecorationSheet {
    /// Reads `frame_cols`/`frame_rows` (required ints >= 1) and the optional
    /// `name` label.
    pub fn from_properties(props: &Properties) -> Result<Self, RecordError> {
        let frame_cols: u32 = require(props, "frame_cols", "an integer")?;
        let frame_rows: u32 = require(props, "frame_rows", "an integer")?;
        if frame_cols == 0 {
            return Err(RecordError::NotPositive { key: "frame_cols" });
        }
        if frame_rows == 0 {
            return Err(RecordError::NotPositive { key: "frame_rows" });
        }
        Ok(Self {
            frame_cols,
            frame_rows,
            name: value::get(props, "name"),
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_cols * self.frame_rows
    }

    pub fn is_animated(&self) -> bool {
        self.frame_count() > 1
    }

    /// Whether the grid divides the image evenly in both dimensions.
    pub fn divides(&self, image_width: u32, image_height: u32) -> bool {
        image_width % self.frame_cols == 0 && image_height % self.frame_rows == 0
    }

    /// Size of one frame, `None` when the grid does not divide the image.
    pub fn frame_size(&self, image_width: u32, image_height: u32) -> Option<(u32, u32)> {
        self.divides(image_width, image_height)
            .then(|| (image_width / self.frame_cols, image_height / self.frame_rows))
    }
}

/// Catalog entry of a `Map` tile: the wheat texture name plus its grass
/// shader tint scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Asset-catalog key of the map's wheat texture.
    pub name: String,
    /// Tint scale handed to the grass shader. Defaults to 1.0 when the
    /// author left it out.
    pub blade_color_scale: f32,
}

impl MapEntry {
    pub const DEFAULT_BLADE_COLOR_SCALE: f32 = 1.0;

    /// Reads `name` (required) and `blade_color_scale` (optional float,
    /// defaulting to [`Self::DEFAULT_BLADE_COLOR_SCALE`]). A present but
    /// mistyped scale is an error rather than a silent default.
    pub fn from_properties(props: &Properties) -> Result<Self, RecordError> {
        let name: String = require(props, "name", "a string")?;
        let blade_color_scale = match props.get("blade_color_scale") {
            None => Self::DEFAULT_BLADE_COLOR_SCALE,
            Some(v) => {
                crate::FromPropertyValue::from_value(v).ok_or(RecordError::WrongType {
                    key: "blade_color_scale",
                    expected: "a float",
                })?
            }
        };
        Ok(Self {
            name,
            blade_color_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use tiled::PropertyValue;

    use super::*;

    fn props(entries: &[(&str, PropertyValue)]) -> Properties {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn decoration_sheet_from_editor_shape() {
        // Mirrors the mill tile: 5x3 grid with a label.
        let props = props(&[
            ("frame_cols", PropertyValue::IntValue(5)),
            ("frame_rows", PropertyValue::IntValue(3)),
            ("name", PropertyValue::StringValue("mill".into())),
        ]);
        let sheet = DecorationSheet::from_properties(&props).unwrap();
        assert_eq!(sheet.frame_count(), 15);
        assert!(sheet.is_animated());
        assert_eq!(sheet.name.as_deref(), Some("mill"));
        assert_eq!(sheet.frame_size(1620, 2007), Some((324, 669)));
    }

    #[test]
    fn decoration_sheet_rejects_zero_grid() {
        let props = props(&[
            ("frame_cols", PropertyValue::IntValue(0)),
            ("frame_rows", PropertyValue::IntValue(4)),
        ]);
        assert_eq!(
            DecorationSheet::from_properties(&props),
            Err(RecordError::NotPositive { key: "frame_cols" })
        );
    }

    #[test]
    fn decoration_sheet_names_the_missing_key() {
        let props = props(&[("frame_cols", PropertyValue::IntValue(4))]);
        assert_eq!(
            DecorationSheet::from_properties(&props),
            Err(RecordError::Missing { key: "frame_rows" })
        );
    }

    #[test]
    fn uneven_grid_has_no_frame_size() {
        let sheet = DecorationSheet {
            frame_cols: 4,
            frame_rows: 4,
            name: None,
        };
        // 1921 px does not divide by 4.
        assert!(!sheet.divides(1921, 1627));
        assert_eq!(sheet.frame_size(1921, 1627), None);
    }

    #[test]
    fn map_entry_defaults_blade_scale() {
        let props = props(&[("name", PropertyValue::StringValue("testMap".into()))]);
        let entry = MapEntry::from_properties(&props).unwrap();
        assert_eq!(entry.name, "testMap");
        assert_eq!(entry.blade_color_scale, 1.0);
    }

    #[test]
    fn map_entry_reads_float_or_int_scale() {
        let props = props(&[
            ("name", PropertyValue::StringValue("grid".into())),
            ("blade_color_scale", PropertyValue::FloatValue(25.0)),
        ]);
        assert_eq!(
            MapEntry::from_properties(&props).unwrap().blade_color_scale,
            25.0
        );

        let props = props(&[
            ("name", PropertyValue::StringValue("grid".into())),
            ("blade_color_scale", PropertyValue::IntValue(10)),
        ]);
        assert_eq!(
            MapEntry::from_properties(&props).unwrap().blade_color_scale,
            10.0
        );
    }

    #[test]
    fn map_entry_rejects_string_scale() {
        let props = props(&[
            ("name", PropertyValue::StringValue("grid".into())),
            (
                "blade_color_scale",
                PropertyValue::StringValue("high".into()),
            ),
        ]);
        assert_eq!(
            MapEntry::from_properties(&props),
            Err(RecordError::WrongType {
                key: "blade_color_scale",
                expected: "a float",
            })
        );
    }
}
