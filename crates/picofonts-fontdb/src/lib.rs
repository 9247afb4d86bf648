//! Where font files meet the host: stores, registry, and the loader
//!
//! The loader walks the manifest, asks an [`AssetStore`](picofonts_core::AssetStore)
//! which variant files exist, and hands each family's findings to a
//! [`FontRegistrar`](picofonts_core::FontRegistrar).
//!
//! ```no_run
//! use picofonts_core::FontManifest;
//! use picofonts_fontdb::{DirectoryStore, FontDatabase, FontLoader};
//!
//! # async fn run() {
//! let loader = FontLoader::new(
//!     FontManifest::builtin(),
//!     DirectoryStore::new("assets"),
//!     FontDatabase::new(),
//! );
//! if loader.load_fonts().await {
//!     println!("{} fonts ready", loader.registrar().font_count());
//! }
//! # }
//! ```

pub mod database;
pub mod loader;
pub mod store;

pub use database::{FontDatabase, RegisteredFont, MAX_FONT_SIZE};
pub use loader::{FamilyReport, FontLoader, LoadReport, LoaderOptions, EXTENSIONS};
pub use store::{DirectoryStore, MemoryStore};
