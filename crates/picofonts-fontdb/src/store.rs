// this_file: crates/picofonts-fontdb/src/store.rs

//! Asset stores: where the loader looks for font files
//!
//! [`DirectoryStore`] answers from the filesystem, [`MemoryStore`] from a
//! bundle held in memory. Both answer presence queries without opening the
//! file.

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use picofonts_core::{AssetStore, ResolvedFontAsset};

/// Font files under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: Utf8PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl AssetStore for DirectoryStore {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        fs::metadata(self.root.join(path))
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn resolve(&self, path: &Utf8Path) -> ResolvedFontAsset {
        ResolvedFontAsset::Path(self.root.join(path))
    }
}

/// Font files held in memory, keyed by relative path
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: HashMap<Utf8PathBuf, Arc<[u8]>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous file at the same path
    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, data: impl Into<Arc<[u8]>>) {
        self.files.insert(path.into(), data.into());
    }

    /// Builder form of [`MemoryStore::insert`]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, data: impl Into<Arc<[u8]>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        self.files.contains_key(path)
    }

    fn resolve(&self, path: &Utf8Path) -> ResolvedFontAsset {
        match self.files.get(path) {
            Some(data) => ResolvedFontAsset::Data(Arc::clone(data)),
            // Only reachable if the caller skipped `exists`
            None => ResolvedFontAsset::Path(path.to_path_buf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> Utf8PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("picofonts_store_{}_{}", tag, id));
        fs::create_dir_all(&dir).unwrap();
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    #[test]
    fn test_directory_store_presence() {
        let root = scratch_dir("presence");
        fs::create_dir_all(root.join("fonts/a")).unwrap();
        fs::write(root.join("fonts/a/a-regular.ttf"), b"x").unwrap();

        let store = DirectoryStore::new(root.clone());
        assert!(store.exists(Utf8Path::new("fonts/a/a-regular.ttf")));
        assert!(!store.exists(Utf8Path::new("fonts/a/a-bold.ttf")));
        // Directories are not font files
        assert!(!store.exists(Utf8Path::new("fonts/a")));

        assert_eq!(
            store.resolve(Utf8Path::new("fonts/a/a-regular.ttf")),
            ResolvedFontAsset::Path(root.join("fonts/a/a-regular.ttf"))
        );

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_memory_store_resolves_shared_bytes() {
        let store = MemoryStore::new().with_file("fonts/a/a-regular.ttf", vec![1u8, 2, 3]);
        let path = Utf8Path::new("fonts/a/a-regular.ttf");

        assert!(store.exists(path));
        assert!(!store.exists(Utf8Path::new("fonts/a/a-regular.otf")));
        match store.resolve(path) {
            ResolvedFontAsset::Data(data) => assert_eq!(&*data, &[1, 2, 3]),
            other => panic!("expected in-memory data, got {:?}", other),
        }
    }
}
