// this_file: crates/picofonts-core/src/manifest.rs

//! The font manifest: which families exist and where their files live
//!
//! A manifest is built once, validated, and then only read. Pass it to
//! whatever needs it; nothing in the workspace keeps a global copy.
//!
//! On disk a manifest is a JSON object keyed by family id:
//!
//! ```json
//! {
//!   "picosans": {
//!     "name": "picosans",
//!     "styles": ["Regular", "Bold", "Italic", "BoldItalic"],
//!     "path": "./fonts/picosans"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{PicofontsError, Result};
use crate::naming::{parse_style_label, StyleModifier, Weight};

/// Everything the registry knows about one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyDescriptor {
    id: String,
    display_name: String,
    styles: Vec<String>,
    asset_path: Utf8PathBuf,
}

impl FamilyDescriptor {
    /// Build and validate a descriptor
    ///
    /// Styles must be non-empty and every label must parse. The id may not
    /// contain path separators, and the asset path must stay inside the
    /// asset root: no root, drive prefix, or `..` component. A leading `./`
    /// on the asset path is dropped so paths compare equal regardless of
    /// how they were written.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        styles: Vec<String>,
        asset_path: impl AsRef<Utf8Path>,
    ) -> Result<Self> {
        let id = id.into();
        let display_name = display_name.into();

        if id.trim().is_empty() {
            return Err(PicofontsError::invalid_manifest("family id is empty"));
        }
        if id.contains(|c: char| c == '/' || c == '\\') {
            return Err(PicofontsError::invalid_manifest(format!(
                "family id {:?} contains a path separator",
                id
            )));
        }
        let asset_path = asset_path.as_ref();
        if !is_contained(asset_path) {
            return Err(PicofontsError::invalid_manifest(format!(
                "family {} asset path {} leaves the asset root",
                id, asset_path
            )));
        }
        if styles.is_empty() {
            return Err(PicofontsError::invalid_manifest(format!(
                "family {} declares no styles",
                id
            )));
        }
        for label in &styles {
            parse_style_label(label).map_err(|_| {
                PicofontsError::invalid_manifest(format!(
                    "family {} declares unknown style {:?}",
                    id, label
                ))
            })?;
        }
        if id != display_name {
            log::warn!(
                "Family id '{}' differs from display name '{}'",
                id,
                display_name
            );
        }

        Ok(Self {
            id,
            display_name,
            styles,
            asset_path: normalize(asset_path),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Style labels in declaration order
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Directory of this family's files, relative to the asset root
    pub fn asset_path(&self) -> &Utf8Path {
        &self.asset_path
    }

    /// Weight/modifier pairs the style labels declare, in declaration order
    pub fn declared_variants(&self) -> Vec<(Weight, Option<StyleModifier>)> {
        self.styles
            .iter()
            .filter_map(|label| parse_style_label(label).ok())
            .collect()
    }
}

/// Relative, and never climbs above where it starts
fn is_contained(path: &Utf8Path) -> bool {
    !path.is_absolute()
        && path.components().all(|component| {
            matches!(component, Utf8Component::CurDir | Utf8Component::Normal(_))
        })
}

fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    path.strip_prefix(".")
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// JSON shape of one family entry
#[derive(Debug, Serialize, Deserialize)]
struct RawFamily {
    name: String,
    styles: Vec<String>,
    path: Utf8PathBuf,
}

/// The set of known families, keyed by id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontManifest {
    families: BTreeMap<String, FamilyDescriptor>,
}

impl FontManifest {
    /// An empty manifest; add families with [`FontManifest::with_family`]
    pub fn new() -> Self {
        Self::default()
    }

    /// The families this package ships
    pub fn builtin() -> Self {
        let table: [(&str, &[&str]); 3] = [
            ("picosans", &["Regular", "Bold", "Italic", "BoldItalic"]),
            ("picotype", &["Regular", "Bold", "Black"]),
            ("picotypepro", &["Regular", "Bold", "Black"]),
        ];

        let families = table
            .iter()
            .map(|(id, styles)| {
                let descriptor = FamilyDescriptor {
                    id: id.to_string(),
                    display_name: id.to_string(),
                    styles: styles.iter().map(|s| s.to_string()).collect(),
                    asset_path: Utf8PathBuf::from("fonts").join(id),
                };
                (id.to_string(), descriptor)
            })
            .collect();

        Self { families }
    }

    /// Add or replace a family
    pub fn with_family(mut self, family: FamilyDescriptor) -> Self {
        self.families.insert(family.id.clone(), family);
        self
    }

    /// Parse and validate a manifest from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawFamily> = serde_json::from_str(json)?;
        let mut manifest = Self::new();
        for (id, entry) in raw {
            manifest = manifest.with_family(FamilyDescriptor::new(
                id,
                entry.name,
                entry.styles,
                &entry.path,
            )?);
        }
        log::debug!("Loaded manifest with {} families", manifest.len());
        Ok(manifest)
    }

    /// Read a manifest file
    pub fn from_json_file(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Serialize back to the on-disk JSON shape
    pub fn to_json_string(&self) -> Result<String> {
        let raw: BTreeMap<&str, RawFamily> = self
            .families
            .values()
            .map(|f| {
                (
                    f.id.as_str(),
                    RawFamily {
                        name: f.display_name.clone(),
                        styles: f.styles.clone(),
                        path: Utf8PathBuf::from(".").join(&f.asset_path),
                    },
                )
            })
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    pub fn get(&self, id: &str) -> Option<&FamilyDescriptor> {
        self.families.get(id)
    }

    /// Lookup that reports a missing family as an error
    pub fn require(&self, id: &str) -> Result<&FamilyDescriptor> {
        self.get(id).ok_or_else(|| PicofontsError::UnknownFamily {
            family: id.to_string(),
        })
    }

    /// Families in id order
    pub fn families(&self) -> impl Iterator<Item = &FamilyDescriptor> {
        self.families.values()
    }

    /// Family ids in id order
    pub fn family_ids(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_families() {
        let manifest = FontManifest::builtin();
        let ids: Vec<&str> = manifest.family_ids().collect();
        assert_eq!(ids, vec!["picosans", "picotype", "picotypepro"]);

        let sans = manifest.get("picosans").unwrap();
        assert_eq!(sans.display_name(), "picosans");
        assert_eq!(sans.styles().len(), 4);
        assert_eq!(sans.asset_path(), Utf8Path::new("fonts/picosans"));
    }

    #[test]
    fn test_builtin_ids_match_names() {
        for family in FontManifest::builtin().families() {
            assert_eq!(family.id(), family.display_name());
            assert!(!family.styles().is_empty());
        }
    }

    #[test]
    fn test_declared_variants() {
        let manifest = FontManifest::builtin();
        let variants = manifest.get("picosans").unwrap().declared_variants();
        assert_eq!(
            variants,
            vec![
                (Weight::Regular, None),
                (Weight::Bold, None),
                (Weight::Regular, Some(StyleModifier::Italic)),
                (Weight::Bold, Some(StyleModifier::Italic)),
            ]
        );
    }

    #[test]
    fn test_json_round_trip_strips_dot_prefix() {
        let json = r#"{
            "mono": { "name": "mono", "styles": ["Regular"], "path": "./fonts/mono" }
        }"#;
        let manifest = FontManifest::from_json_str(json).unwrap();
        let mono = manifest.get("mono").unwrap();
        assert_eq!(mono.asset_path(), Utf8Path::new("fonts/mono"));

        let again = FontManifest::from_json_str(&manifest.to_json_string().unwrap()).unwrap();
        assert_eq!(again, manifest);
    }

    #[test]
    fn test_empty_styles_rejected() {
        let json = r#"{ "mono": { "name": "mono", "styles": [], "path": "fonts/mono" } }"#;
        let err = FontManifest::from_json_str(json).unwrap_err();
        assert!(matches!(err, PicofontsError::InvalidManifest { .. }));
    }

    #[test]
    fn test_unknown_style_rejected() {
        let json = r#"{ "mono": { "name": "mono", "styles": ["Hairline"], "path": "fonts/mono" } }"#;
        let err = FontManifest::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Hairline"));
    }

    fn family_at(id: &str, path: &str) -> Result<FamilyDescriptor> {
        FamilyDescriptor::new(id, id, vec!["Regular".to_string()], path)
    }

    #[test]
    fn test_absolute_asset_path_rejected() {
        let err = family_at("mono", "/tmp/fonts/mono").unwrap_err();
        assert!(matches!(err, PicofontsError::InvalidManifest { .. }));
        assert!(err.to_string().contains("leaves the asset root"));
    }

    #[test]
    fn test_parent_dir_asset_path_rejected() {
        for path in ["../../etc", "fonts/../../etc", "./fonts/.."] {
            let err = family_at("mono", path).unwrap_err();
            assert!(
                matches!(err, PicofontsError::InvalidManifest { .. }),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_id_with_separator_rejected() {
        for id in ["../mono", "fonts/mono", "fonts\\mono"] {
            let err = family_at(id, "fonts/mono").unwrap_err();
            assert!(err.to_string().contains("path separator"), "{}", id);
        }
    }

    #[test]
    fn test_nested_relative_path_accepted() {
        let family = family_at("mono", "./assets/fonts/mono").unwrap();
        assert_eq!(family.asset_path(), Utf8Path::new("assets/fonts/mono"));
    }

    #[test]
    fn test_escaping_path_in_json_rejected() {
        let json = r#"{ "evil": { "name": "evil", "styles": ["Regular"], "path": "/etc" } }"#;
        let err = FontManifest::from_json_str(json).unwrap_err();
        assert!(matches!(err, PicofontsError::InvalidManifest { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = FontManifest::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PicofontsError::Json(_)));
    }

    #[test]
    fn test_require_missing_family() {
        let err = FontManifest::builtin().require("comic").unwrap_err();
        assert_eq!(err.family(), Some("comic"));
    }
}
