//! Named color palettes and the weight-to-style mapping.
//!
//! A label's weight is normalized against the min/max of the whole label set
//! once, when the set is built. The resulting ratio drives both the palette
//! index and the font size so the two always agree.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Built-in palettes selectable at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteName {
    #[default]
    Default,
    Warm,
    Cool,
    Monochrome,
    Neon,
    Pastel,
}

pub const DEFAULT_COLORS: &[&str] = &[
    "#ff7676", "#76d8ff", "#ffde59", "#52fa5a", "#ac88ff", "#ff8cf0", "#5ce1e6",
];
pub const WARM_COLORS: &[&str] = &["#ff7e5f", "#feb47b", "#ffcc5c", "#ff5f5f", "#ff9e7a", "#ffd175"];
pub const COOL_COLORS: &[&str] = &["#5ee7df", "#b490ca", "#63a4ff", "#79d1c3", "#6a7fdb", "#8c96e9"];
pub const MONOCHROME_COLORS: &[&str] =
    &["#ffffff", "#dddddd", "#bbbbbb", "#999999", "#777777", "#555555"];
pub const NEON_COLORS: &[&str] = &["#00FFFF", "#FF00FF", "#00FF00", "#FFFF00", "#FF0000", "#0000FF"];
pub const PASTEL_COLORS: &[&str] = &["#FFB6C1", "#FFD700", "#98FB98", "#87CEFA", "#DDA0DD", "#FFDAB9"];

impl PaletteName {
    /// Every palette in selector order.
    pub const ALL: [PaletteName; 6] = [
        PaletteName::Default,
        PaletteName::Warm,
        PaletteName::Cool,
        PaletteName::Monochrome,
        PaletteName::Neon,
        PaletteName::Pastel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Default => "default",
            PaletteName::Warm => "warm",
            PaletteName::Cool => "cool",
            PaletteName::Monochrome => "monochrome",
            PaletteName::Neon => "neon",
            PaletteName::Pastel => "pastel",
        }
    }

    /// Human-facing label, e.g. `Monochrome`.
    pub fn display_name(self) -> &'static str {
        match self {
            PaletteName::Default => "Default",
            PaletteName::Warm => "Warm",
            PaletteName::Cool => "Cool",
            PaletteName::Monochrome => "Monochrome",
            PaletteName::Neon => "Neon",
            PaletteName::Pastel => "Pastel",
        }
    }

    /// CSS color strings of this palette.
    pub fn colors(self) -> &'static [&'static str] {
        match self {
            PaletteName::Default => DEFAULT_COLORS,
            PaletteName::Warm => WARM_COLORS,
            PaletteName::Cool => COOL_COLORS,
            PaletteName::Monochrome => MONOCHROME_COLORS,
            PaletteName::Neon => NEON_COLORS,
            PaletteName::Pastel => PASTEL_COLORS,
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteName::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPalette(s.to_string()))
    }
}

/// Min/max of the weights of one label set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange {
    pub min: f32,
    pub max: f32,
}

impl WeightRange {
    /// Range over `weights`; `None` for an empty set.
    pub fn from_weights(weights: impl IntoIterator<Item = f32>) -> Option<Self> {
        weights.into_iter().fold(None, |acc, w| match acc {
            None => Some(WeightRange { min: w, max: w }),
            Some(r) => Some(WeightRange {
                min: r.min.min(w),
                max: r.max.max(w),
            }),
        })
    }

    /// Map `weight` into \[0, 1\]. A degenerate range maps everything to 0.5.
    pub fn normalize(&self, weight: f32) -> f32 {
        let span = self.max - self.min;
        if span > 0.0 {
            ((weight - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

/// Palette slot for a normalized weight: `floor(ratio * (len - 1))`.
#[inline]
pub fn palette_index(ratio: f32, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let last = palette_len - 1;
    ((ratio.clamp(0.0, 1.0) * last as f32).floor() as usize).min(last)
}

/// Font size through a square-root curve so light items stay legible.
#[inline]
pub fn font_size(ratio: f32, min_font_size: f32, max_font_size: f32) -> f32 {
    min_font_size + (max_font_size - min_font_size) * ratio.clamp(0.0, 1.0).sqrt()
}
