// this_file: crates/picofonts-core/src/naming.rs

//! How variants get their names
//!
//! The host runtime knows a font variant only by a string. That string is
//! built here, deterministically, from a family id, a [`Weight`] and an
//! optional [`StyleModifier`]:
//!
//! ```text
//! {family}-{weight}[-{modifier}]     picosans-bold-italic
//! ```
//!
//! The same inputs always produce the same [`LogicalFontName`], so two
//! distinct variants can never collide.
//!
//! Manifest style labels (`Regular`, `BoldItalic`, ...) are parsed into the
//! same weight/modifier pair by [`parse_style_label`].

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{PicofontsError, Result};

/// The weights the loader knows how to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weight {
    Regular,
    Bold,
    Black,
}

impl Weight {
    /// Every weight, in probe order
    pub const ALL: [Weight; 3] = [Weight::Regular, Weight::Bold, Weight::Black];

    /// Lowercase token used inside logical names
    pub fn token(self) -> &'static str {
        match self {
            Weight::Regular => "regular",
            Weight::Bold => "bold",
            Weight::Black => "black",
        }
    }

    /// Capitalized token used in manifest labels and file names
    pub fn label(self) -> &'static str {
        match self {
            Weight::Regular => "Regular",
            Weight::Bold => "Bold",
            Weight::Black => "Black",
        }
    }

    /// Numeric weight class shared by CSS `font-weight` and OS/2 `usWeightClass`
    pub fn weight_class(self) -> u16 {
        match self {
            Weight::Regular => 400,
            Weight::Bold => 700,
            Weight::Black => 900,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Weight {
    type Err = PicofontsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "regular" | "normal" => Ok(Weight::Regular),
            "bold" => Ok(Weight::Bold),
            "black" | "heavy" => Ok(Weight::Black),
            _ => Err(PicofontsError::UnknownStyle {
                label: s.to_string(),
            }),
        }
    }
}

/// Optional slant applied on top of a weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleModifier {
    Italic,
}

impl StyleModifier {
    /// Every modifier
    pub const ALL: [StyleModifier; 1] = [StyleModifier::Italic];

    /// Lowercase token used inside logical names
    pub fn token(self) -> &'static str {
        match self {
            StyleModifier::Italic => "italic",
        }
    }

    /// Capitalized token used in manifest labels and file names
    pub fn label(self) -> &'static str {
        match self {
            StyleModifier::Italic => "Italic",
        }
    }

    /// Modifier slots the loader walks for each weight: upright, then each modifier
    pub fn slots() -> impl Iterator<Item = Option<StyleModifier>> {
        std::iter::once(None).chain(Self::ALL.into_iter().map(Some))
    }
}

impl fmt::Display for StyleModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The identifier a host runtime uses to refer to one registered variant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalFontName(String);

impl LogicalFontName {
    /// Compose `{family}-{weight}[-{modifier}]`
    pub fn new(family: &str, weight: Weight, modifier: Option<StyleModifier>) -> Self {
        let mut name = format!("{}-{}", family, weight.token());
        if let Some(modifier) = modifier {
            name.push('-');
            name.push_str(modifier.token());
        }
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogicalFontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogicalFontName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LogicalFontName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Full name of a variant, e.g. `get_font_name("picosans", Weight::Regular, None)`
/// gives `picosans-regular`
pub fn get_font_name(
    family: &str,
    weight: Weight,
    modifier: Option<StyleModifier>,
) -> LogicalFontName {
    LogicalFontName::new(family, weight, modifier)
}

/// PascalCase file token for a variant: `Regular`, `Bold`, `Italic`, `BoldItalic`
///
/// Upright regular is `Regular`; italic regular drops the weight and is just
/// `Italic`, matching how families name their files.
pub fn file_token(weight: Weight, modifier: Option<StyleModifier>) -> String {
    match (weight, modifier) {
        (w, None) => w.label().to_string(),
        (Weight::Regular, Some(m)) => m.label().to_string(),
        (w, Some(m)) => format!("{}{}", w.label(), m.label()),
    }
}

/// Weight words recognized inside style labels
const WEIGHT_TOKENS: [(&str, Weight); 5] = [
    ("regular", Weight::Regular),
    ("normal", Weight::Regular),
    ("bold", Weight::Bold),
    ("black", Weight::Black),
    ("heavy", Weight::Black),
];

/// Parse a manifest style label into its weight and modifier
///
/// `italic` or `oblique` anywhere in the label sets the italic modifier. The
/// weight is the earliest weight word found in the label (`ExtraBold` and
/// `Bold Condensed` are bold), defaulting to regular. A label with neither a
/// weight word nor a slant is unknown.
pub fn parse_style_label(label: &str) -> Result<(Weight, Option<StyleModifier>)> {
    let lower = label.trim().to_ascii_lowercase();

    let modifier = ["italic", "oblique"]
        .iter()
        .any(|slant| lower.contains(slant))
        .then_some(StyleModifier::Italic);

    let weight = WEIGHT_TOKENS
        .iter()
        .filter_map(|(token, weight)| lower.find(token).map(|pos| (pos, *weight)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, weight)| weight);

    match (weight, modifier) {
        (Some(weight), modifier) => Ok((weight, modifier)),
        (None, Some(modifier)) => Ok((Weight::Regular, Some(modifier))),
        (None, None) => Err(PicofontsError::UnknownStyle {
            label: label.to_string(),
        }),
    }
}
