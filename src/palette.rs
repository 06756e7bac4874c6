//! Color palette and index references into it.
//!
//! Layouts and widgets never own colors: they hold a [`PaletteRef`], a plain
//! index into the [`Palette`], and resolve it with [`Palette::resolve`] when
//! the color is needed.

use serde::{Deserialize, Serialize};

/// A `(foreground, background)` color pair.
///
/// Serialized as a two-element array, e.g. `["#ffffff", "#000000"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 2]", into = "[String; 2]")]
pub struct ColorPair {
    pub foreground: String,
    pub background: String,
}

impl ColorPair {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }

    /// A pair with the same color on both channels.
    pub fn solid(color: impl Into<String>) -> Self {
        let color = color.into();
        Self::new(color.clone(), color)
    }
}

impl From<[String; 2]> for ColorPair {
    fn from([foreground, background]: [String; 2]) -> Self {
        Self { foreground, background }
    }
}

impl From<ColorPair> for [String; 2] {
    fn from(pair: ColorPair) -> Self {
        [pair.foreground, pair.background]
    }
}

/// Which half of a [`ColorPair`] a reference selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[serde(alias = "fg")]
    Foreground,
    #[serde(alias = "bg")]
    Background,
}

/// Non-owning reference to a palette entry.
///
/// Written as `{"palette": 2}` for the whole pair or
/// `{"palette": 1, "channel": "fg"}` for a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteRef {
    pub palette: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl PaletteRef {
    /// Reference the whole pair at `index`.
    pub fn pair(index: usize) -> Self {
        Self { palette: index, channel: None }
    }

    /// Reference the foreground color at `index`.
    pub fn foreground(index: usize) -> Self {
        Self { palette: index, channel: Some(Channel::Foreground) }
    }

    /// Reference the background color at `index`.
    pub fn background(index: usize) -> Self {
        Self { palette: index, channel: Some(Channel::Background) }
    }
}

/// What a [`PaletteRef`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Pair(&'a ColorPair),
    Color(&'a str),
}

/// Error from resolving a [`PaletteRef`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("palette index {index} out of range (palette has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Immutable, ordered list of color pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<ColorPair>,
}

impl Palette {
    pub fn new(colors: Vec<ColorPair>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorPair> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorPair> {
        self.colors.iter()
    }

    /// Check that `r` points inside the palette.
    pub fn check(&self, r: PaletteRef) -> Result<(), PaletteError> {
        self.resolve(r).map(|_| ())
    }

    /// Resolve a reference, bounds-checked.
    pub fn resolve(&self, r: PaletteRef) -> Result<Resolved<'_>, PaletteError> {
        let pair = self.colors.get(r.palette).ok_or(PaletteError::OutOfRange {
            index: r.palette,
            len: self.colors.len(),
        })?;
        Ok(match r.channel {
            None => Resolved::Pair(pair),
            Some(Channel::Foreground) => Resolved::Color(&pair.foreground),
            Some(Channel::Background) => Resolved::Color(&pair.background),
        })
    }
}
