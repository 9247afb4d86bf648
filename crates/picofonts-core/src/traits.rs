// this_file: crates/picofonts-core/src/traits.rs

//! The two seams the loader talks through
//!
//! - [`AssetStore`] - answers "is this file bundled?" and hands out a handle
//! - [`FontRegistrar`] - makes a family's variants available to the host
//!
//! Neither is implemented here. `picofonts-fontdb` ships a directory store,
//! an in-memory store and an in-process registrar; a host runtime brings its
//! own registrar.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::Result;
use crate::naming::LogicalFontName;

/// A font file that was found, ready to hand to a registrar
///
/// Only ever built for assets that exist. Building one never reads the file.
#[derive(Clone, PartialEq, Eq)]
pub enum ResolvedFontAsset {
    /// A file the registrar reads itself
    Path(Utf8PathBuf),
    /// Bytes already in memory, e.g. an embedded bundle
    Data(Arc<[u8]>),
}

impl ResolvedFontAsset {
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            ResolvedFontAsset::Path(path) => Some(path),
            ResolvedFontAsset::Data(_) => None,
        }
    }
}

impl fmt::Debug for ResolvedFontAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedFontAsset::Path(path) => f.debug_tuple("Path").field(path).finish(),
            ResolvedFontAsset::Data(data) => write!(f, "Data({} bytes)", data.len()),
        }
    }
}

/// One family's variants, keyed by logical name
pub type FontMap = BTreeMap<LogicalFontName, ResolvedFontAsset>;

/// Where bundled font files live
///
/// ```ignore
/// struct Bundle;
///
/// impl AssetStore for Bundle {
///     fn name(&self) -> &'static str {
///         "bundle"
///     }
///
///     fn exists(&self, path: &Utf8Path) -> bool {
///         path.as_str().ends_with(".ttf")
///     }
///
///     fn resolve(&self, path: &Utf8Path) -> ResolvedFontAsset {
///         ResolvedFontAsset::Path(path.to_path_buf())
///     }
/// }
/// ```
pub trait AssetStore: Send + Sync {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// Whether a file exists at `path`, relative to the store root
    ///
    /// Must be synchronous and free of side effects.
    fn exists(&self, path: &Utf8Path) -> bool;

    /// Handle for a file that [`AssetStore::exists`] reported present
    fn resolve(&self, path: &Utf8Path) -> ResolvedFontAsset;
}

/// The host runtime's font registration capability
///
/// Resolves once the family's variants are usable by name, or fails. The
/// registrar owns the map after hand-off.
pub trait FontRegistrar: Send + Sync {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// Register every variant in `fonts` under its logical name
    fn register(&self, family: &str, fonts: FontMap) -> impl Future<Output = Result<()>> + Send;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        (**self).exists(path)
    }

    fn resolve(&self, path: &Utf8Path) -> ResolvedFontAsset {
        (**self).resolve(path)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Arc<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        (**self).exists(path)
    }

    fn resolve(&self, path: &Utf8Path) -> ResolvedFontAsset {
        (**self).resolve(path)
    }
}

impl<R: FontRegistrar> FontRegistrar for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn register(&self, family: &str, fonts: FontMap) -> impl Future<Output = Result<()>> + Send {
        (**self).register(family, fonts)
    }
}

impl<R: FontRegistrar> FontRegistrar for Arc<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn register(&self, family: &str, fonts: FontMap) -> impl Future<Output = Result<()>> + Send {
        (**self).register(family, fonts)
    }
}
