// this_file: crates/picofonts-core/src/platform.rs

//! Which kind of host we are loading fonts for
//!
//! On the web, stylesheets already carry `@font-face` rules, so the loader
//! has nothing to do. Everywhere else font files must be registered with the
//! host runtime.
//!
//! The detected platform can be overridden at startup:
//!
//! ```bash
//! PICOFONTS_PLATFORM=web ./my_app
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{PicofontsError, Result};

/// Environment variable that overrides platform detection
pub const PLATFORM_ENV: &str = "PICOFONTS_PLATFORM";

/// Execution platform identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Fonts arrive through stylesheets
    Web,
    /// Fonts must be registered with the host runtime
    Native,
}

/// Override read from the environment, checked once per process
static ENV_OVERRIDE: OnceLock<Option<Platform>> = OnceLock::new();

impl Platform {
    /// The platform this process runs on
    ///
    /// `PICOFONTS_PLATFORM` wins when set to a recognized value; an
    /// unrecognized value is logged and ignored.
    pub fn current() -> Self {
        let overridden = ENV_OVERRIDE.get_or_init(|| {
            let value = std::env::var(PLATFORM_ENV).ok()?;
            match value.parse::<Platform>() {
                Ok(platform) => {
                    log::info!("Platform set to {} via {}", platform, PLATFORM_ENV);
                    Some(platform)
                },
                Err(_) => {
                    log::warn!("Ignoring {}={:?}", PLATFORM_ENV, value);
                    None
                },
            }
        });

        overridden.unwrap_or_else(Self::detected)
    }

    /// Platform implied by the compilation target alone
    pub fn detected() -> Self {
        if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Native
        }
    }

    pub fn is_web(self) -> bool {
        self == Platform::Web
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Native => "native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PicofontsError;

    /// Accepts `web`, plus the usual native host names
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "wasm" => Ok(Platform::Web),
            "native" | "ios" | "android" | "macos" | "windows" | "linux" => Ok(Platform::Native),
            _ => Err(PicofontsError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
