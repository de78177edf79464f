//! Catalog schema and validation for the cropland level-editor tilesets.
//!
//! The level editor describes farm content as Tiled image-collection
//! tilesets: every tile is tagged with a [`TileKind`] and, depending on the
//! kind, a handful of custom properties (`frame_cols`/`frame_rows` for
//! animated decorations, `name`/`blade_color_scale` for map entries). This
//! crate owns that vocabulary and checks authored catalogs against it.
//!
//! Validation runs in two passes:
//!
//! - [`scan_tsx`] streams the raw XML and reports structural defects the
//!   `tiled` parser cannot surface, most importantly duplicate tile ids
//!   (the parsed representation keeps only the last one).
//! - [`validate_tileset`] inspects a parsed [`tiled::Tileset`] for semantic
//!   defects: unknown kinds, missing or mistyped properties, frame grids
//!   that do not divide their image, unresolvable image paths.
//!
//! Findings are collected into a [`CatalogReport`] instead of failing fast;
//! authored content is expected to be imperfect while a level is iterated on.
//!
//! # Example
//!
//! ```rust,no_run
//! use bevy_cropland_schema::{scan_tsx, validate_tileset, CatalogRules};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("assets/level-editor/environment.tsx")?;
//! let scan = scan_tsx(&bytes[..])?;
//! let tileset = tiled::Loader::new().load_tsx_tileset("assets/level-editor/environment.tsx")?;
//!
//! let report = validate_tileset(&tileset, Some(&scan), &CatalogRules::default());
//! for finding in report.findings() {
//!     eprintln!("{finding}");
//! }
//! # Ok(())
//! # }
//! ```

mod kind;
mod records;
mod report;
mod scan;
mod validate;
mod value;

pub use kind::{TileKind, UnknownKind};
pub use records::{DecorationSheet, MapEntry, RecordError};
pub use report::{CatalogReport, Finding, Problem, Severity};
pub use scan::{scan_tsx, ScanError, TsxScan};
pub use validate::{validate_tileset, CatalogRules};
pub use value::FromPropertyValue;
