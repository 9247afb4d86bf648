//! Load command implementation
//!
//! Runs the loader against a directory and registers what it finds in an
//! in-process font database.

use anyhow::{bail, Context, Result};
use picofonts_core::{FontManifest, Platform};
use picofonts_fontdb::{DirectoryStore, FontDatabase, FontLoader};

use crate::cli::LoadArgs;

pub fn run(manifest: FontManifest, args: &LoadArgs) -> Result<()> {
    let platform = match &args.platform {
        Some(name) => name.parse::<Platform>()?,
        None => Platform::current(),
    };

    let loader = FontLoader::new(manifest, DirectoryStore::new(args.root.clone()), FontDatabase::new())
        .with_platform(platform)
        .skip_empty_families(args.skip_empty);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start runtime")?;

    if !runtime.block_on(loader.load_fonts()) {
        bail!("loading fonts from {} failed", args.root);
    }

    if platform.is_web() {
        println!("web platform: fonts are delivered by stylesheets");
        return Ok(());
    }

    let db = loader.registrar();
    println!("{} fonts registered", db.font_count());
    for family in loader.fonts() {
        let names = db.family_names(family);
        println!("{} ({})", family, names.len());
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}
