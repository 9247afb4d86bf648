//! List command implementation
//!
//! Prints every family with its display name, styles, and asset directory.

use anyhow::Result;
use picofonts_core::FontManifest;

pub fn run(manifest: &FontManifest) -> Result<()> {
    println!("{} families", manifest.len());
    for family in manifest.families() {
        println!();
        println!("{}", family.id());
        if family.display_name() != family.id() {
            println!("  name:   {}", family.display_name());
        }
        println!("  styles: {}", family.styles().join(", "));
        println!("  path:   {}", family.asset_path());
    }
    Ok(())
}
