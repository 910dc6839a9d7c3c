//! Terminal rendering of palettes and color details.

use console::Style;
use tinct::{contrast_color, Color, LockSet};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step grayscale ramp (232-255) with black and white
/// at the cube corners; everything else maps onto the 6x6x6 cube.
pub fn rgb_to_ansi256(color: Color) -> u8 {
    let tinct::Rgb(r, g, b) = color.rgb();
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// The uppercase hex label on a block of the color, in its contrast color.
pub fn swatch(color: Color, styled: bool) -> String {
    let label = format!("  {}  ", color.to_upper_hex());
    if !styled {
        return label;
    }
    Style::new()
        .bg(console::Color::Color256(rgb_to_ansi256(color)))
        .fg(console::Color::Color256(rgb_to_ansi256(contrast_color(color))))
        .force_styling(true)
        .apply_to(label)
        .to_string()
}

/// One line per slot: number, swatch, rgb, hsl and a lock marker.
pub fn palette(colors: &[Color], locks: &LockSet, styled: bool) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| {
            let marker = if locks.is_locked(index) { "  [locked]" } else { "" };
            format!(
                "{:>2} {} {:<18} {}{}",
                index + 1,
                swatch(*color, styled),
                color.to_css_rgb(),
                color.hsl(),
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every representation of a single color.
pub fn details(color: Color, styled: bool) -> String {
    format!(
        "{}\nhex       {}\nrgb       {}\nhsl       {}\ntext on   {}",
        swatch(color, styled),
        color,
        color.to_css_rgb(),
        color.hsl(),
        contrast_color(color)
    )
}
