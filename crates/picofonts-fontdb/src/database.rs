// this_file: crates/picofonts-fontdb/src/database.rs

//! The in-process font registry
//!
//! [`FontDatabase`] is a [`FontRegistrar`] for hosts without a runtime of
//! their own: registered variants are read into memory and kept by logical
//! name. It does not parse the bytes.

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use parking_lot::RwLock;
use picofonts_core::{
    FontMap, FontRegistrar, LogicalFontName, PicofontsError, ResolvedFontAsset, Result,
};

/// Maximum font file size (50MB) accepted at registration.
pub const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024;

/// A variant that has been registered and is usable by name
#[derive(Debug)]
pub struct RegisteredFont {
    name: LogicalFontName,
    family: String,
    data: Arc<[u8]>,
}

impl RegisteredFont {
    pub fn name(&self) -> &LogicalFontName {
        &self.name
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Registered fonts, keyed by logical name
#[derive(Debug)]
pub struct FontDatabase {
    fonts: RwLock<HashMap<LogicalFontName, Arc<RegisteredFont>>>,
    max_font_size: u64,
}

impl FontDatabase {
    /// Starts with an empty registry
    pub fn new() -> Self {
        Self::with_max_font_size(MAX_FONT_SIZE)
    }

    /// Empty registry that rejects assets larger than `max_font_size` bytes
    pub fn with_max_font_size(max_font_size: u64) -> Self {
        Self {
            fonts: RwLock::new(HashMap::new()),
            max_font_size,
        }
    }

    pub fn max_font_size(&self) -> u64 {
        self.max_font_size
    }

    /// Register one family's variants; a name registered again is replaced
    ///
    /// Every asset is read before anything is stored, so a family either
    /// lands completely or not at all.
    pub fn register_family(&self, family: &str, fonts: FontMap) -> Result<usize> {
        let mut loaded = Vec::with_capacity(fonts.len());
        for (name, asset) in fonts {
            let data = self.read_asset(&name, &asset)?;
            log::debug!("Registered {} ({} bytes)", name, data.len());
            loaded.push(Arc::new(RegisteredFont {
                name,
                family: family.to_string(),
                data,
            }));
        }

        let count = loaded.len();
        let mut table = self.fonts.write();
        for font in loaded {
            table.insert(font.name.clone(), font);
        }
        Ok(count)
    }

    /// Look up a registered variant by logical name
    pub fn get(&self, name: &str) -> Option<Arc<RegisteredFont>> {
        self.fonts.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.read().contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<LogicalFontName> {
        let mut names: Vec<_> = self.fonts.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Registered names belonging to one family, sorted
    pub fn family_names(&self, family: &str) -> Vec<LogicalFontName> {
        let mut names: Vec<_> = self
            .fonts
            .read()
            .values()
            .filter(|font| font.family == family)
            .map(|font| font.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Returns the number of fonts currently registered.
    pub fn font_count(&self) -> usize {
        self.fonts.read().len()
    }

    /// Forget every registered font.
    pub fn clear(&self) {
        self.fonts.write().clear();
    }

    fn read_asset(&self, name: &LogicalFontName, asset: &ResolvedFontAsset) -> Result<Arc<[u8]>> {
        let max = self.max_font_size;
        match asset {
            ResolvedFontAsset::Data(data) => {
                let size = data.len() as u64;
                if size > max {
                    return Err(PicofontsError::FontDataTooLarge {
                        name: name.to_string(),
                        size,
                        max,
                    });
                }
                Ok(Arc::clone(data))
            },
            ResolvedFontAsset::Path(path) => {
                let unreadable = |source| PicofontsError::AssetUnreadable {
                    path: path.clone(),
                    source,
                };
                let meta = fs::metadata(path).map_err(unreadable)?;
                if meta.len() > max {
                    return Err(PicofontsError::FontTooLarge {
                        path: path.clone(),
                        size: meta.len(),
                        max,
                    });
                }
                let data = fs::read(path).map_err(unreadable)?;
                Ok(Arc::from(data))
            },
        }
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistrar for FontDatabase {
    fn name(&self) -> &'static str {
        "fontdb"
    }

    async fn register(&self, family: &str, fonts: FontMap) -> Result<()> {
        self.register_family(family, fonts)
            .map(|_| ())
            .map_err(|err| PicofontsError::registration(family, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use picofonts_core::{get_font_name, Weight};

    fn bytes(data: &[u8]) -> ResolvedFontAsset {
        ResolvedFontAsset::Data(Arc::from(data.to_vec()))
    }

    #[test]
    fn test_empty_database() {
        let db = FontDatabase::new();
        assert_eq!(db.font_count(), 0);
        assert!(db.names().is_empty());
        assert!(db.get("picosans-regular").is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let db = FontDatabase::new();
        let mut fonts = FontMap::new();
        fonts.insert(get_font_name("a", Weight::Regular, None), bytes(b"regular"));
        fonts.insert(get_font_name("a", Weight::Bold, None), bytes(b"bold"));

        assert_eq!(db.register_family("a", fonts).unwrap(), 2);
        assert_eq!(db.font_count(), 2);

        let font = db.get("a-bold").unwrap();
        assert_eq!(font.data(), b"bold");
        assert_eq!(font.family(), "a");
        assert_eq!(db.family_names("a").len(), 2);
        assert!(db.family_names("b").is_empty());
    }

    #[test]
    fn test_reregistration_replaces() {
        let db = FontDatabase::new();
        let name = get_font_name("a", Weight::Regular, None);

        let mut first = FontMap::new();
        first.insert(name.clone(), bytes(b"v1"));
        db.register_family("a", first).unwrap();

        let mut second = FontMap::new();
        second.insert(name.clone(), bytes(b"v2"));
        db.register_family("a", second).unwrap();

        assert_eq!(db.font_count(), 1);
        assert_eq!(db.get(name.as_str()).unwrap().data(), b"v2");
    }

    #[test]
    fn test_missing_path_leaves_family_unregistered() {
        let db = FontDatabase::new();
        let mut fonts = FontMap::new();
        fonts.insert(get_font_name("a", Weight::Regular, None), bytes(b"ok"));
        fonts.insert(
            get_font_name("a", Weight::Bold, None),
            ResolvedFontAsset::Path(Utf8PathBuf::from("/nonexistent/picofonts/a-bold.ttf")),
        );

        let err = db.register_family("a", fonts).unwrap_err();
        assert!(matches!(err, PicofontsError::AssetUnreadable { .. }));
        assert_eq!(db.font_count(), 0);
    }

    #[test]
    fn test_empty_family_registers_nothing() {
        let db = FontDatabase::new();
        assert_eq!(db.register_family("a", FontMap::new()).unwrap(), 0);
        assert_eq!(db.font_count(), 0);
    }

    #[test]
    fn test_oversized_data_names_the_variant() {
        let db = FontDatabase::with_max_font_size(4);
        let mut fonts = FontMap::new();
        fonts.insert(get_font_name("a", Weight::Bold, None), bytes(b"too many bytes"));

        let err = db.register_family("a", fonts).unwrap_err();
        assert!(matches!(err, PicofontsError::FontDataTooLarge { size: 14, max: 4, .. }));
        assert_eq!(
            err.to_string(),
            "Font data too large: 14 bytes (max: 4 bytes) for a-bold"
        );
        assert_eq!(db.font_count(), 0);
    }

    #[test]
    fn test_oversized_file_names_the_path() {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = Utf8PathBuf::from_path_buf(
            std::env::temp_dir().join(format!("picofonts_db_big_{}.ttf", id)),
        )
        .unwrap();
        fs::write(&path, b"too many bytes").unwrap();

        let db = FontDatabase::with_max_font_size(4);
        let mut fonts = FontMap::new();
        fonts.insert(
            get_font_name("a", Weight::Regular, None),
            ResolvedFontAsset::Path(path.clone()),
        );

        let err = db.register_family("a", fonts).unwrap_err();
        assert!(err.to_string().ends_with(path.as_str()));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(FontDatabase::new().max_font_size(), MAX_FONT_SIZE);
    }

    #[test]
    fn test_clear() {
        let db = FontDatabase::new();
        let mut fonts = FontMap::new();
        fonts.insert(get_font_name("a", Weight::Regular, None), bytes(b"x"));
        db.register_family("a", fonts).unwrap();

        db.clear();
        assert_eq!(db.font_count(), 0);
    }
}
