// this_file: crates/picofonts-core/src/stylesheet.rs

//! Stylesheet paths published for the web path
//!
//! The stylesheets themselves are shipped alongside the fonts and declare the
//! same family names as the manifest. This module only publishes where they
//! are: one combined sheet plus one per family.

use std::collections::BTreeMap;

use crate::manifest::FontManifest;

/// Label of the stylesheet that pulls in every family
pub const ALL_LABEL: &str = "all";

/// Label → relative stylesheet path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheets {
    paths: BTreeMap<String, String>,
}

impl Stylesheets {
    /// Sheets for the shipped families
    pub fn builtin() -> Self {
        Self::for_manifest(&FontManifest::builtin())
    }

    /// `all` plus one `./{family}.css` per manifest family
    pub fn for_manifest(manifest: &FontManifest) -> Self {
        let mut paths = BTreeMap::new();
        paths.insert(ALL_LABEL.to_string(), format!("./{}.css", ALL_LABEL));
        for id in manifest.family_ids() {
            paths.insert(id.to_string(), format!("./{}.css", id));
        }
        Self { paths }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.paths.get(label).map(String::as_str)
    }

    /// Every `(label, path)` pair in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
