//! Palettes, generation strategies and locked slots.
//!
//! A [`Palette`] is an ordered run of 2 to 10 colors produced by one
//! [`Strategy`]. Slots pinned in a [`LockSet`] are copied into every
//! regenerated palette unchanged; the remaining slots are filled by the
//! strategy from a base color (see [`PaletteGenerator`]).
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tinct::{Color, LockSet, PaletteGenerator, Strategy};
//!
//! let mut locks = LockSet::new();
//! locks.lock(2, Color::from_hex("#336699").unwrap());
//!
//! let mut generator = PaletteGenerator::with_rng(StdRng::seed_from_u64(1));
//! let palette = generator.generate(5, Strategy::Analogous, &locks).unwrap();
//!
//! assert_eq!(palette.len(), 5);
//! assert_eq!(palette.colors()[2].to_string(), "#336699");
//! ```

mod generator;
mod locks;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, Result};

pub use generator::PaletteGenerator;
pub use locks::LockSet;

/// Smallest palette the generator produces.
pub const MIN_COLORS: usize = 2;
/// Largest palette the generator produces.
pub const MAX_COLORS: usize = 10;
/// Palette size used when nothing else is configured.
pub const DEFAULT_COLORS: usize = 5;

/// Checks that `count` is a supported palette size.
pub fn validate_count(count: usize) -> Result<usize> {
    if (MIN_COLORS..=MAX_COLORS).contains(&count) {
        Ok(count)
    } else {
        Err(ColorError::InvalidCount(count))
    }
}

// ─── Strategy ───────────────────────────────────────────────────────────────

/// Rule for filling the unlocked slots of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every slot drawn independently from the full 24-bit space.
    #[default]
    Random,
    /// Base hue and its opposite, alternated with jittered variations.
    Complementary,
    /// Hues stepped 30° apart, centered on the base.
    Analogous,
    /// Three hues 120° apart, then jittered variations of them.
    Triadic,
    /// Base hue and saturation with lightness stepped from 10% to 90%.
    Monochromatic,
}

impl Strategy {
    /// All strategies, in menu order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Complementary,
        Strategy::Analogous,
        Strategy::Triadic,
        Strategy::Monochromatic,
    ];

    /// Lowercase name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Complementary => "complementary",
            Strategy::Analogous => "analogous",
            Strategy::Triadic => "triadic",
            Strategy::Monochromatic => "monochromatic",
        }
    }

    /// Whether unlocked slots are derived from a base color.
    pub fn uses_base(&self) -> bool {
        !matches!(self, Strategy::Random)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == name)
            .ok_or_else(|| ColorError::InvalidStrategy(s.to_string()))
    }
}

// ─── Palette ────────────────────────────────────────────────────────────────

/// An ordered set of colors and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
    strategy: Strategy,
}

impl Palette {
    /// Wraps already generated colors.
    pub fn new(colors: Vec<Color>, strategy: Strategy) -> Self {
        Self { colors, strategy }
    }

    /// The colors, in slot order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The strategy that filled the unlocked slots.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Hex strings, in slot order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_string).collect()
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
