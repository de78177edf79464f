use std::sync::{Arc, Mutex};

use bevy::{asset::LoadContext, prelude::*};
use normalize_path::NormalizePath;
use thiserror::Error;
use tiled::{DefaultResourceCache, ResourceCache, ResourcePath, Template, Tileset};

pub mod catalog;
pub mod level;

/// Shared cache for `tiled::Loader` to prevent duplicate file parsing
///
/// A level references its catalogs by path, and the same catalog is also
/// loadable as a standalone asset. Handing every loader one cache behind an
/// `Arc<Mutex<_>>` makes those parses converge on a single `tiled::Tileset`
/// per file, across asset-loading threads.
#[derive(Resource, Clone, Default, Debug)]
pub struct TiledParseCache(Arc<Mutex<DefaultResourceCache>>);

impl ResourceCache for TiledParseCache {
    fn get_tileset(&self, path: impl AsRef<ResourcePath>) -> Option<Arc<Tileset>> {
        self.0.lock().ok()?.get_tileset(path)
    }

    fn get_template(&self, path: impl AsRef<ResourcePath>) -> Option<Arc<Template>> {
        self.0.lock().ok()?.get_template(path)
    }

    fn insert_tileset(&mut self, path: impl AsRef<ResourcePath>, tileset: Arc<Tileset>) {
        if let Ok(mut cache) = self.0.lock() {
            cache.insert_tileset(path, tileset);
        }
    }

    fn insert_template(&mut self, path: impl AsRef<ResourcePath>, template: Arc<Template>) {
        if let Ok(mut cache) = self.0.lock() {
            cache.insert_template(path, template);
        }
    }
}

/// A Tiled-relative path that could not be turned into an asset path.
#[derive(Debug, Error)]
#[error("invalid path: {0}")]
pub struct PathResolveError(String);

/// Resolve a relative path from a Tiled file to a Bevy asset path
///
/// Tiled files reference neighbours with relative paths like
/// `../textures/rock.png`, but Bevy's asset system expects asset-root-relative
/// paths like `textures/rock.png` with no `..` components.
///
/// This function:
/// 1. Strips the `assets/` prefix the `tiled` loader leaves on paths it
///    already joined against the filesystem
/// 2. Otherwise joins the relative path onto the current asset's parent
/// 3. Normalizes `.`/`..` components and path separators (Windows `\` to `/`)
pub(crate) fn resolve_relative_path(
    load_context: &LoadContext,
    relative_path: &str,
) -> Result<String, PathResolveError> {
    // The tiled crate joins sources onto the directory it loaded from, so
    // paths can come back as "assets/levels/../textures/foo.png".
    let relative_path = relative_path.replace('\\', "/");

    if let Some(stripped) = relative_path.strip_prefix("assets/") {
        let normalized = std::path::Path::new(stripped).normalize();
        return normalized
            .to_str()
            .map(|path| path.replace('\\', "/"))
            .ok_or_else(|| {
                PathResolveError(format!("non-UTF-8 path: {}", normalized.display()))
            });
    }

    // Otherwise the path is relative to the current asset's directory.
    let parent = load_context.asset_path().path().parent().ok_or_else(|| {
        PathResolveError(format!(
            "no parent directory for asset {}",
            load_context.asset_path()
        ))
    })?;

    let full_path = parent.join(&relative_path);

    // Path::join does not normalize, it just concatenates.
    let normalized = full_path.normalize();

    normalized
        .to_str()
        .map(|path| path.replace('\\', "/"))
        .ok_or_else(|| PathResolveError(format!("non-UTF-8 path: {}", normalized.display())))
}
