//! Picofonts Core: names, manifest, and the seams a loader needs
//!
//! A font registry is mostly bookkeeping. This crate holds that bookkeeping
//! so the loader in `picofonts-fontdb` can stay small:
//!
//! - [`manifest`] - which families exist, their styles and asset directories
//! - [`naming`] - weights, style modifiers, and the logical names built from them
//! - [`platform`] - web versus native hosts
//! - [`stylesheet`] - stylesheet paths for the web path
//! - [`traits`] - [`AssetStore`] and [`FontRegistrar`]
//!
//! ```
//! use picofonts_core::{get_font_name, FontManifest, StyleModifier, Weight};
//!
//! let manifest = FontManifest::builtin();
//! for family in manifest.family_ids() {
//!     let name = get_font_name(family, Weight::Regular, Some(StyleModifier::Italic));
//!     assert_eq!(name.as_str(), format!("{}-regular-italic", family));
//! }
//! ```

pub mod error;
pub mod manifest;
pub mod naming;
pub mod platform;
pub mod stylesheet;
pub mod traits;

pub use error::{PicofontsError, Result};
pub use manifest::{FamilyDescriptor, FontManifest};
pub use naming::{file_token, get_font_name, parse_style_label, LogicalFontName, StyleModifier, Weight};
pub use platform::Platform;
pub use stylesheet::Stylesheets;
pub use traits::{AssetStore, FontMap, FontRegistrar, ResolvedFontAsset};
