//! Names command implementation

use anyhow::Result;
use picofonts_core::{get_font_name, FontManifest, StyleModifier, Weight};

use crate::cli::NamesArgs;

pub fn run(manifest: &FontManifest, args: &NamesArgs) -> Result<()> {
    let families = match &args.family {
        Some(id) => vec![manifest.require(id)?],
        None => manifest.families().collect(),
    };

    for family in families {
        for weight in Weight::ALL {
            for modifier in StyleModifier::slots() {
                println!("{}", get_font_name(family.id(), weight, modifier));
            }
        }
    }
    Ok(())
}
