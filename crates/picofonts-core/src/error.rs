// this_file: crates/picofonts-core/src/error.rs

//! Error types for the picofonts registry.
//!
//! [`PicofontsError`] is the single error type used across the workspace.
//! A missing font file is deliberately absent from this list: probing treats
//! absence as a normal answer, not a failure.
//!
//! # Examples
//!
//! ```
//! use picofonts_core::{PicofontsError, Result};
//!
//! fn register() -> Result<()> {
//!     Err(PicofontsError::registration("picosans", "runtime refused"))
//! }
//!
//! assert!(register().is_err());
//! ```

use camino::Utf8PathBuf;
use thiserror::Error;

/// Main error type for picofonts operations
#[derive(Error, Debug)]
pub enum PicofontsError {
    /// Manifest failed validation
    #[error("Invalid manifest: {reason}")]
    InvalidManifest {
        /// Why the manifest was rejected.
        reason: String,
    },

    /// Family not present in the manifest
    #[error("Unknown font family: {family}")]
    UnknownFamily {
        /// The family id that was looked up.
        family: String,
    },

    /// Style label that maps to no weight/modifier pair
    #[error("Unknown style label: {label}")]
    UnknownStyle {
        /// The label as written in the manifest.
        label: String,
    },

    /// Platform identifier that is neither web nor native
    #[error("Unknown platform: {name}")]
    UnknownPlatform {
        /// The identifier that failed to parse.
        name: String,
    },

    /// The registration API rejected a family
    #[error("Failed to register fonts for {family}: {reason}")]
    RegistrationFailed {
        /// Family whose registration failed.
        family: String,
        /// Explanation from the registrar.
        reason: String,
    },

    /// A resolved asset could not be read during registration
    #[error("Failed to read font asset: {path}")]
    AssetUnreadable {
        /// Path of the asset.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Asset exceeds the registration size limit
    #[error("Font file too large: {size} bytes (max: {max} bytes) at {path}")]
    FontTooLarge {
        /// Path of the oversized asset.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Maximum allowed size in bytes.
        max: u64,
    },

    /// In-memory asset exceeds the registration size limit
    #[error("Font data too large: {size} bytes (max: {max} bytes) for {name}")]
    FontDataTooLarge {
        /// Logical name the data was registered under.
        name: String,
        /// Actual size in bytes.
        size: u64,
        /// Maximum allowed size in bytes.
        max: u64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PicofontsError {
    /// Create a registration failure for a family
    ///
    /// ```
    /// # use picofonts_core::PicofontsError;
    /// let err = PicofontsError::registration("picotype", "quota exceeded");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Failed to register fonts for picotype: quota exceeded"
    /// );
    /// ```
    pub fn registration(family: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RegistrationFailed {
            family: family.into(),
            reason: reason.into(),
        }
    }

    /// Create a manifest validation error
    pub fn invalid_manifest(reason: impl Into<String>) -> Self {
        Self::InvalidManifest {
            reason: reason.into(),
        }
    }

    /// Family name carried by this error, if any
    pub fn family(&self) -> Option<&str> {
        match self {
            Self::UnknownFamily { family } | Self::RegistrationFailed { family, .. } => {
                Some(family)
            },
            _ => None,
        }
    }
}

/// Result type alias for picofonts operations
pub type Result<T, E = PicofontsError> = std::result::Result<T, E>;
