//! Validation findings and the per-catalog report.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::RecordError;

/// How bad a finding is.
///
/// Errors break the consumer (a decoration without a frame grid cannot
/// animate); warnings are authoring debt the game tolerates (an image path
/// that only resolves on the author's machine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One defect found in a catalog.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum Problem {
    #[error("tile id {id} appears {count} times; later definitions shadow earlier ones")]
    DuplicateTileId { id: u32, count: usize },
    #[error("declared tilecount {declared} but {actual} tiles are defined")]
    TileCountMismatch { declared: u32, actual: u32 },
    #[error("tile has no `type` tag")]
    MissingKind,
    #[error("unknown tile kind `{found}`")]
    UnknownKind { found: String },
    #[error("{kind}: {source}")]
    BadRecord {
        kind: &'static str,
        source: RecordError,
    },
    #[error("`blade_color_scale` not set; the grass shader will use 1.0")]
    DefaultedBladeScale,
    #[error("frame grid {cols}x{rows} does not divide the {width}x{height} image evenly")]
    UnevenFrameGrid {
        cols: u32,
        rows: u32,
        width: u32,
        height: u32,
    },
    #[error("collection tile has no image")]
    MissingImage,
    #[error("image path `{path}` escapes the content root")]
    EscapingImagePath { path: PathBuf },
    #[error("image path `{path}` does not resolve under the content root")]
    UnresolvedImagePath { path: PathBuf },
    #[error("duplicate map entry name `{name}`")]
    DuplicateMapName { name: String },
}

impl Problem {
    /// Default severity of this problem.
    pub fn severity(&self) -> Severity {
        match self {
            Problem::DuplicateTileId { .. }
            | Problem::UnknownKind { .. }
            | Problem::BadRecord { .. }
            | Problem::UnevenFrameGrid { .. }
            | Problem::MissingImage => Severity::Error,
            Problem::TileCountMismatch { .. }
            | Problem::MissingKind
            | Problem::DefaultedBladeScale
            | Problem::EscapingImagePath { .. }
            | Problem::UnresolvedImagePath { .. }
            | Problem::DuplicateMapName { .. } => Severity::Warning,
        }
    }
}

/// A [`Problem`] located in a specific catalog and, usually, tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Tileset name as declared in the file.
    pub tileset: String,
    /// Offending tile id; `None` for catalog-level findings.
    pub tile_id: Option<u32>,
    pub problem: Problem,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tile_id {
            Some(id) => write!(
                f,
                "{}: {} tile {}: {}",
                self.severity, self.tileset, id, self.problem
            ),
            None => write!(f, "{}: {}: {}", self.severity, self.tileset, self.problem),
        }
    }
}

/// All findings for one catalog, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogReport {
    findings: Vec<Finding>,
}

impl CatalogReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tileset: &str, tile_id: Option<u32>, problem: Problem) {
        self.findings.push(Finding {
            severity: problem.severity(),
            tileset: tileset.to_string(),
            tile_id,
            problem,
        });
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Folds another report into this one, keeping discovery order.
    pub fn merge(&mut self, other: CatalogReport) {
        self.findings.extend(other.findings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn findings_render_one_line() {
        let mut report = CatalogReport::new();
        report.push(
            "environment",
            Some(3),
            Problem::UnevenFrameGrid {
                cols: 4,
                rows: 4,
                width: 1921,
                height: 1627,
            },
        );
        let line = report.findings()[0].to_string();
        assert_eq!(
            line,
            "error: environment tile 3: frame grid 4x4 does not divide the 1921x1627 image evenly"
        );
    }

    #[test]
    fn severity_split() {
        let mut report = CatalogReport::new();
        report.push("maps", Some(0), Problem::DefaultedBladeScale);
        report.push("maps", Some(1), Problem::DuplicateTileId { id: 1, count: 2 });
        assert!(report.has_errors());
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(report.errors().count(), 1);
        assert!(!report.is_clean());
    }
}
