//! Subcommand implementations

pub mod css;
pub mod list;
pub mod load;
pub mod names;

use anyhow::{Context, Result};
use camino::Utf8Path;
use picofonts_core::FontManifest;

/// The manifest from `--manifest`, or the built-in one
pub fn manifest(path: Option<&Utf8Path>) -> Result<FontManifest> {
    match path {
        Some(path) => FontManifest::from_json_file(path)
            .with_context(|| format!("failed to load manifest {}", path)),
        None => Ok(FontManifest::builtin()),
    }
}
