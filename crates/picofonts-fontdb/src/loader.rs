// this_file: crates/picofonts-fontdb/src/loader.rs

//! Best-effort font loading
//!
//! For every family, weight and style slot the loader computes a logical
//! name, probes a short list of candidate files, and keeps the first one the
//! store has. Variants with no file are skipped without a word. Each
//! family's map then goes to the registrar; all registrations run together
//! and the first failure fails the load.
//!
//! Candidate order for `picosans` bold italic:
//!
//! ```text
//! fonts/picosans/picosans-bold-italic.ttf
//! fonts/picosans/picosans-BoldItalic.ttf
//! fonts/picosans/picosans-bold-italic.otf
//! fonts/picosans/picosans-BoldItalic.otf
//! ```
//!
//! On the web nothing is probed or registered; stylesheets deliver the fonts.

use camino::Utf8PathBuf;
use futures::future::try_join_all;
use picofonts_core::{
    file_token, get_font_name, AssetStore, FamilyDescriptor, FontManifest, FontMap,
    FontRegistrar, LogicalFontName, Platform, PicofontsError, Result, StyleModifier, Weight,
};

/// File extensions tried, in order of preference
pub const EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Knobs for [`FontLoader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Platform to load for
    pub platform: Platform,
    /// Skip the registration call for families where nothing resolved.
    /// Off by default: an empty family still gets an empty registration.
    pub skip_empty_families: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            skip_empty_families: false,
        }
    }
}

/// What one family registration did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyReport {
    pub family: String,
    pub registered: Vec<LogicalFontName>,
}

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub platform: Platform,
    /// Per-family results in manifest order; empty on the web
    pub families: Vec<FamilyReport>,
}

impl LoadReport {
    /// Total variants registered across families
    pub fn registered_count(&self) -> usize {
        self.families.iter().map(|f| f.registered.len()).sum()
    }
}

/// Resolves manifest families against an asset store and registers them
pub struct FontLoader<S, R> {
    manifest: FontManifest,
    store: S,
    registrar: R,
    options: LoaderOptions,
}

impl<S: AssetStore, R: FontRegistrar> FontLoader<S, R> {
    pub fn new(manifest: FontManifest, store: S, registrar: R) -> Self {
        Self {
            manifest,
            store,
            registrar,
            options: LoaderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.options.platform = platform;
        self
    }

    pub fn skip_empty_families(mut self, skip: bool) -> Self {
        self.options.skip_empty_families = skip;
        self
    }

    pub fn manifest(&self) -> &FontManifest {
        &self.manifest
    }

    pub fn options(&self) -> LoaderOptions {
        self.options
    }

    pub fn registrar(&self) -> &R {
        &self.registrar
    }

    /// Family ids, in manifest order
    pub fn fonts(&self) -> Vec<&str> {
        self.manifest.family_ids().collect()
    }

    /// Weights the loader probes for
    pub fn weights(&self) -> &'static [Weight] {
        &Weight::ALL
    }

    /// Style modifiers the loader probes for, on top of upright
    pub fn styles(&self) -> &'static [StyleModifier] {
        &StyleModifier::ALL
    }

    /// Logical name for one variant
    pub fn get_font_name(
        &self,
        family: &str,
        weight: Weight,
        modifier: Option<StyleModifier>,
    ) -> LogicalFontName {
        get_font_name(family, weight, modifier)
    }

    /// Candidate paths for one variant, in probe order
    pub fn candidates(
        &self,
        family: &FamilyDescriptor,
        weight: Weight,
        modifier: Option<StyleModifier>,
    ) -> Vec<Utf8PathBuf> {
        candidate_paths(family, weight, modifier)
    }

    /// Probe every variant of one family and collect what exists
    pub fn resolve_family(&self, family: &FamilyDescriptor) -> FontMap {
        let mut fonts = FontMap::new();
        for weight in Weight::ALL {
            for modifier in StyleModifier::slots() {
                let found = candidate_paths(family, weight, modifier)
                    .into_iter()
                    .find(|path| self.store.exists(path));

                if let Some(path) = found {
                    let name = get_font_name(family.id(), weight, modifier);
                    log::debug!("Resolved {} -> {}", name, path);
                    fonts.insert(name, self.store.resolve(&path));
                }
            }
        }
        fonts
    }

    /// Load every family and report what was registered
    ///
    /// # Errors
    ///
    /// The first registration failure, as returned by the registrar.
    pub async fn try_load_fonts(&self) -> Result<LoadReport> {
        let platform = self.options.platform;
        if platform.is_web() {
            log::debug!("Web platform: fonts come from stylesheets");
            return Ok(LoadReport {
                platform,
                families: Vec::new(),
            });
        }

        let mut batch = Vec::with_capacity(self.manifest.len());
        for family in self.manifest.families() {
            let fonts = self.resolve_family(family);
            if fonts.is_empty() && self.options.skip_empty_families {
                log::debug!("Skipping {}: no variants found", family.id());
                continue;
            }
            batch.push(self.register(family.id(), fonts));
        }

        let families = try_join_all(batch).await?;
        let report = LoadReport { platform, families };
        log::info!(
            "Registered {} variants across {} families via {} from {} store",
            report.registered_count(),
            report.families.len(),
            self.registrar.name(),
            self.store.name()
        );
        Ok(report)
    }

    /// Load every family; `false` if any registration failed
    ///
    /// A failure is logged once and otherwise swallowed.
    pub async fn load_fonts(&self) -> bool {
        match self.try_load_fonts().await {
            Ok(_) => true,
            Err(err) => {
                log::error!("Error loading fonts: {}", err);
                false
            },
        }
    }

    async fn register(&self, family: &str, fonts: FontMap) -> Result<FamilyReport> {
        let registered: Vec<LogicalFontName> = fonts.keys().cloned().collect();
        log::debug!(
            "Registering {} variants of {} with {}",
            registered.len(),
            family,
            self.registrar.name()
        );
        self.registrar
            .register(family, fonts)
            .await
            .map_err(|err| match err {
                PicofontsError::RegistrationFailed { .. } => err,
                other => PicofontsError::registration(family, other.to_string()),
            })?;
        Ok(FamilyReport {
            family: family.to_string(),
            registered,
        })
    }
}

/// Extension-major: every stem as `.ttf` before any `.otf`
fn candidate_paths(
    family: &FamilyDescriptor,
    weight: Weight,
    modifier: Option<StyleModifier>,
) -> Vec<Utf8PathBuf> {
    let stems = [
        get_font_name(family.id(), weight, modifier).into_string(),
        format!("{}-{}", family.id(), file_token(weight, modifier)),
    ];

    EXTENSIONS
        .iter()
        .flat_map(|ext| {
            stems
                .iter()
                .map(move |stem| family.asset_path().join(format!("{}.{}", stem, ext)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::FontDatabase;

    fn loader(store: MemoryStore) -> FontLoader<MemoryStore, FontDatabase> {
        FontLoader::new(FontManifest::builtin(), store, FontDatabase::new())
            .with_platform(Platform::Native)
    }

    #[test]
    fn test_candidate_order() {
        let manifest = FontManifest::builtin();
        let family = manifest.get("picosans").unwrap();
        let paths: Vec<String> =
            candidate_paths(family, Weight::Bold, Some(StyleModifier::Italic))
                .into_iter()
                .map(Utf8PathBuf::into_string)
                .collect();
        assert_eq!(
            paths,
            vec![
                "fonts/picosans/picosans-bold-italic.ttf",
                "fonts/picosans/picosans-BoldItalic.ttf",
                "fonts/picosans/picosans-bold-italic.otf",
                "fonts/picosans/picosans-BoldItalic.otf",
            ]
        );
    }

    #[test]
    fn test_regular_italic_uses_plain_italic_token() {
        let manifest = FontManifest::builtin();
        let family = manifest.get("picosans").unwrap();
        let paths = candidate_paths(family, Weight::Regular, Some(StyleModifier::Italic));
        assert_eq!(paths[1].as_str(), "fonts/picosans/picosans-Italic.ttf");
    }

    #[test]
    fn test_resolve_family_pascal_case_fallback() {
        let store = MemoryStore::new()
            .with_file("fonts/picotype/picotype-Regular.ttf", vec![1u8])
            .with_file("fonts/picotype/picotype-Black.otf", vec![2u8]);
        let loader = loader(store);
        let family = loader.manifest().get("picotype").unwrap().clone();

        let fonts = loader.resolve_family(&family);
        let names: Vec<&str> = fonts.keys().map(LogicalFontName::as_str).collect();
        assert_eq!(names, vec!["picotype-black", "picotype-regular"]);
    }

    #[test]
    fn test_surface_lists() {
        let loader = loader(MemoryStore::new());
        assert_eq!(loader.fonts(), vec!["picosans", "picotype", "picotypepro"]);
        assert_eq!(loader.weights().len(), 3);
        assert_eq!(loader.styles(), &[StyleModifier::Italic]);
        assert_eq!(
            loader.get_font_name("picosans", Weight::Regular, None).as_str(),
            "picosans-regular"
        );
    }
}
