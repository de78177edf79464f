//! Library half of the `tileset_lint` binary.
//!
//! One function per stage: [`lint_bytes`] checks a catalog already in
//! memory, [`lint_file`] reads one from disk first, and [`report_status`]
//! reduces a report to the exit status the binary propagates.

use std::fs;
use std::path::Path;

use bevy_cropland_schema::{CatalogReport, CatalogRules, ScanError, scan_tsx, validate_tileset};
use thiserror::Error;

/// Input the linter cannot get a report out of.
///
/// Authoring defects inside a parseable catalog are findings, not errors.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("broken tileset structure: {0}")]
    Scan(#[from] ScanError),

    #[error("failed to parse tileset: {0}")]
    Tiled(#[from] tiled::Error),
}

/// Runs the structural scan and the semantic rules over one catalog.
///
/// `path` locates relative image sources; nothing is read from it.
pub fn lint_bytes(
    xml: &[u8],
    path: &Path,
    rules: &CatalogRules,
) -> Result<CatalogReport, LintError> {
    let scan = scan_tsx(xml)?;
    let tileset = tiled::Loader::with_reader(|requested: &Path| -> std::io::Result<_> {
        if requested == path {
            Ok(std::io::Cursor::new(xml))
        } else {
            Err(std::io::ErrorKind::NotFound.into())
        }
    })
    .load_tsx_tileset(path)?;
    Ok(validate_tileset(&tileset, Some(&scan), rules))
}

/// Reads and checks one catalog file.
pub fn lint_file(path: &Path, rules: &CatalogRules) -> Result<CatalogReport, LintError> {
    let xml = fs::read(path)?;
    lint_bytes(&xml, path, rules)
}

/// Exit status one report contributes: 0 passes, 1 blocks.
///
/// Warnings block only under `strict`.
pub fn report_status(report: &CatalogReport, strict: bool) -> i32 {
    if report.has_errors() || (strict && !report.is_clean()) {
        1
    } else {
        0
    }
}
