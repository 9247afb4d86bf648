//! Css command implementation

use anyhow::Result;
use picofonts_core::{FontManifest, Stylesheets};

pub fn run(manifest: &FontManifest) -> Result<()> {
    for (label, path) in Stylesheets::for_manifest(manifest).iter() {
        println!("{:<16}{}", label, path);
    }
    Ok(())
}
