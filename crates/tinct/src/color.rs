//! Hex, RGB and HSL color representations and the conversions between them.
//!
//! A [`Color`] is a 24-bit sRGB value. It can be viewed three ways:
//!
//! | View | Type | Range |
//! |------|------|-------|
//! | hex | `String` | `#rrggbb`, lowercase, always 6 digits |
//! | RGB | [`Rgb`] | three channels, `0..=255` |
//! | HSL | [`Hsl`] | hue `0..360` degrees, saturation and lightness `0..=100` percent |
//!
//! HSL values are rounded to whole degrees and percents. Converting a color to
//! HSL and back is therefore lossy for arbitrary RGB input, but lightness always
//! survives the trip and fully saturated mid-light colors survive it exactly.
//!
//! # Example
//!
//! ```rust
//! use tinct::{hex_to_hsl, hsl_to_hex, Hsl};
//!
//! assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
//! assert_eq!(hex_to_hsl("#00FF00").unwrap(), Hsl { h: 120, s: 100, l: 50 });
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, Result};

// ─── Component types ────────────────────────────────────────────────────────

/// An RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A color in hue/saturation/lightness form, rounded to integer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0..360`.
    pub h: u16,
    /// Saturation in percent, `0..=100`.
    pub s: u8,
    /// Lightness in percent, `0..=100`.
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Color ──────────────────────────────────────────────────────────────────

/// A 24-bit color.
///
/// Displays as lowercase `#rrggbb` and parses from six hex digits with an
/// optional leading `#` in either case. Serializes as its hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Black, `#000000`.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White, `#ffffff`.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from the low 24 bits of `value` (`0xRRGGBB`).
    pub const fn from_u32(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Parses a hex color. See [`hex_to_rgb`] for the accepted syntax.
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex).map(Self::from)
    }

    /// Creates a color from HSL components.
    ///
    /// Hue is normalized into `[0, 360)`; saturation and lightness are clamped
    /// into `[0, 100]`. Non-finite inputs are treated as zero.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.0) / 360.0 } else { 0.0 };
        let s = clamp_percent(s) / 100.0;
        let l = clamp_percent(l) / 100.0;

        if s == 0.0 {
            let v = unit_to_channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            unit_to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            unit_to_channel(hue_to_channel(p, q, h)),
            unit_to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Draws a color uniformly from all 2^24 values.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_u32(rng.gen_range(0..=0xFF_FFFF))
    }

    /// The RGB view of this color.
    pub const fn rgb(&self) -> Rgb {
        Rgb(self.r, self.g, self.b)
    }

    /// The HSL view of this color.
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb())
    }

    /// `#RRGGBB` in uppercase, the form shown next to swatches.
    pub fn to_upper_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS functional notation, `rgb(r, g, b)`.
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Perceived luminance in `[0, 1]` (ITU-R BT.601 weights).
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.0, rgb.1, rgb.2)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Free conversions ───────────────────────────────────────────────────────

/// Splits a hex color into its channels.
///
/// Accepts exactly six hex digits, optionally prefixed with `#`, in either
/// case. Surrounding whitespace, shorthand (`#fff`) and alpha
/// (`#rrggbbaa`) forms are rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };

    Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Joins channels into a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    Color::from(rgb).to_string()
}

/// Converts a hex color to rounded HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Converts HSL components to a lowercase hex color.
///
/// Never fails: out-of-range inputs are normalized as described on
/// [`Color::from_hsl`].
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Color::from_hsl(h, s, l).to_string()
}

/// Converts RGB channels to rounded HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.0 as f64 / 255.0;
    let g = rgb.1 as f64 / 255.0;
    let b = rgb.2 as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: (sector * 60.0).round() as u16 % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Black or white, whichever reads better on top of `background`.
pub fn contrast_color(background: Color) -> Color {
    if background.luminance() > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ─── Internals ──────────────────────────────────────────────────────────────

fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn unit_to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// One channel of the HSL → RGB transform. `t` is the hue offset in turns.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
