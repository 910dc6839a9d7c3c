//! Strategy-driven palette generation.

use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use super::{validate_count, LockSet, Palette, Strategy};
use crate::color::{Color, Hsl};
use crate::error::Result;

/// Hue step between neighbouring analogous slots, in degrees.
const ANALOGOUS_STEP: i64 = 30;
/// Saturation/lightness jitter applied to complementary variations.
const COMPLEMENTARY_JITTER: f64 = 15.0;
/// Saturation/lightness jitter applied to triadic variations.
const TRIADIC_JITTER: f64 = 10.0;
/// Lightness range swept by the monochromatic strategy.
const MONO_LIGHTNESS: (f64, f64) = (10.0, 90.0);

/// Builds palettes from a strategy, a lock set and a random source.
///
/// The generator owns its random source. [`PaletteGenerator::new`] uses the
/// thread-local generator; tests pass a seeded one through
/// [`PaletteGenerator::with_rng`] to get reproducible output.
#[derive(Debug, Clone)]
pub struct PaletteGenerator<R = ThreadRng> {
    rng: R,
}

impl PaletteGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PaletteGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaletteGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `count` colors.
    ///
    /// The base color for hue-based strategies is the lock with the lowest
    /// slot index, even when that slot lies beyond `count`. With no locks a
    /// random base is drawn.
    ///
    /// Returns [`ColorError::InvalidCount`](crate::ColorError::InvalidCount)
    /// when `count` is outside `2..=10`.
    pub fn generate(&mut self, count: usize, strategy: Strategy, locks: &LockSet) -> Result<Palette> {
        validate_count(count)?;
        let base = match locks.first() {
            Some((_, color)) => color,
            None if strategy.uses_base() => Color::random(&mut self.rng),
            // Random ignores the base
            None => Color::BLACK,
        };
        self.generate_from_base(count, strategy, locks, base)
    }

    /// Generates `count` colors around an explicit base color.
    ///
    /// Locked slots below `count` are copied verbatim; locks at or beyond
    /// `count` are ignored.
    pub fn generate_from_base(
        &mut self,
        count: usize,
        strategy: Strategy,
        locks: &LockSet,
        base: Color,
    ) -> Result<Palette> {
        validate_count(count)?;
        debug!(
            "generating {} {} colors from base {} ({} locked)",
            count,
            strategy,
            base,
            locks.len()
        );

        let hsl = base.hsl();
        let mut colors = Vec::with_capacity(count);
        for index in 0..count {
            let color = match locks.get(index) {
                Some(locked) => locked,
                None => self.fill_slot(strategy, index, count, base, hsl),
            };
            colors.push(color);
        }

        Ok(Palette::new(colors, strategy))
    }

    fn fill_slot(&mut self, strategy: Strategy, index: usize, count: usize, base: Color, hsl: Hsl) -> Color {
        let h = hsl.h as f64;
        let s = hsl.s as f64;
        let l = hsl.l as f64;

        match strategy {
            Strategy::Random => Color::random(&mut self.rng),

            Strategy::Complementary => {
                let complement = (h + 180.0) % 360.0;
                match index {
                    0 => base,
                    1 => Color::from_hsl(complement, s, l),
                    _ => {
                        let hue = if index % 2 == 0 { h } else { complement };
                        let (s, l) = self.jitter(s, l, COMPLEMENTARY_JITTER);
                        Color::from_hsl(hue, s, l)
                    }
                }
            }

            Strategy::Analogous => {
                let offset = (index as i64 - (count / 2) as i64) * ANALOGOUS_STEP;
                let hue = (hsl.h as i64 + offset).rem_euclid(360);
                Color::from_hsl(hue as f64, s, l)
            }

            Strategy::Triadic => {
                let anchors = [h, (h + 120.0) % 360.0, (h + 240.0) % 360.0];
                if index < anchors.len() {
                    Color::from_hsl(anchors[index], s, l)
                } else {
                    let (s, l) = self.jitter(s, l, TRIADIC_JITTER);
                    Color::from_hsl(anchors[index % 3], s, l)
                }
            }

            Strategy::Monochromatic => {
                let (low, high) = MONO_LIGHTNESS;
                let step = if count > 1 {
                    (high - low) / (count - 1) as f64
                } else {
                    high - low
                };
                Color::from_hsl(h, s, low + index as f64 * step)
            }
        }
    }

    /// Offsets saturation and lightness by up to `amount` either way, then
    /// clamps them into `[20, 100]` and `[10, 90]`.
    fn jitter(&mut self, s: f64, l: f64, amount: f64) -> (f64, f64) {
        let s = (s + self.rng.gen_range(-amount..amount)).clamp(20.0, 100.0);
        let l = (l + self.rng.gen_range(-amount..amount)).clamp(10.0, 90.0);
        (s, l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_hsl, hsl_to_hex};
    use crate::error::ColorError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> PaletteGenerator<StdRng> {
        PaletteGenerator::with_rng(StdRng::seed_from_u64(42))
    }

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    // =====================================================================
    // Count validation
    // =====================================================================

    #[test]
    fn rejects_counts_outside_range() {
        let mut generator = seeded();
        let locks = LockSet::new();
        for count in [0, 1, 11, 50] {
            let err = generator.generate(count, Strategy::Random, &locks).unwrap_err();
            assert!(matches!(err, ColorError::InvalidCount(c) if c == count));
        }
    }

    #[test]
    fn produces_requested_count_for_every_strategy() {
        let mut generator = seeded();
        let locks = LockSet::new();
        for strategy in Strategy::ALL {
            for count in 2..=10 {
                let palette = generator.generate(count, strategy, &locks).unwrap();
                assert_eq!(palette.len(), count, "{strategy} with {count}");
                assert_eq!(palette.strategy(), strategy);
            }
        }
    }

    // =====================================================================
    // Strategy rules
    // =====================================================================

    #[test]
    fn complementary_second_slot_is_opposite_hue() {
        let palette = seeded()
            .generate_from_base(2, Strategy::Complementary, &LockSet::new(), hex("#ff0000"))
            .unwrap();
        assert_eq!(palette.colors()[0], hex("#ff0000"));
        assert_eq!(palette.colors()[1], hex("#00ffff"));
        assert_eq!(hex_to_hsl("#00ffff").unwrap().h, 180);
    }

    #[test]
    fn complementary_variations_alternate_hues_within_clamps() {
        let base = hex("#ff0000");
        let palette = seeded()
            .generate_from_base(10, Strategy::Complementary, &LockSet::new(), base)
            .unwrap();
        for (index, color) in palette.iter().enumerate().skip(2) {
            let hsl = color.hsl();
            // s >= 20 and l in [10,90] keep the hue readable
            assert!(hsl.s >= 19, "slot {index} saturation {}", hsl.s);
            assert!((10..=90).contains(&hsl.l), "slot {index} lightness {}", hsl.l);
            let expected = if index % 2 == 0 { 0 } else { 180 };
            let distance = (hsl.h as i32 - expected).rem_euclid(360);
            assert!(distance <= 3 || distance >= 357, "slot {index} hue {}", hsl.h);
        }
    }

    #[test]
    fn analogous_steps_thirty_degrees_centered_on_base() {
        let base = hex("#ff0000");
        let palette = seeded()
            .generate_from_base(5, Strategy::Analogous, &LockSet::new(), base)
            .unwrap();
        let expected: Vec<String> = [300.0, 330.0, 0.0, 30.0, 60.0]
            .iter()
            .map(|h| hsl_to_hex(*h, 100.0, 50.0))
            .collect();
        assert_eq!(palette.to_hex_strings(), expected);
    }

    #[test]
    fn analogous_even_count_puts_base_right_of_center() {
        let palette = seeded()
            .generate_from_base(4, Strategy::Analogous, &LockSet::new(), hex("#00ff00"))
            .unwrap();
        // offsets -60, -30, 0, +30
        assert_eq!(palette.colors()[2], hex("#00ff00"));
        assert_eq!(palette.colors()[0], hex("#ffff00"));
    }

    #[test]
    fn triadic_three_colors_have_no_jitter() {
        let palette = seeded()
            .generate_from_base(3, Strategy::Triadic, &LockSet::new(), hex("#ff0000"))
            .unwrap();
        assert_eq!(palette.to_hex_strings(), vec!["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn triadic_is_deterministic_for_three_slots() {
        let base = hex("#336699");
        let a = seeded()
            .generate_from_base(3, Strategy::Triadic, &LockSet::new(), base)
            .unwrap();
        let b = PaletteGenerator::with_rng(StdRng::seed_from_u64(9))
            .generate_from_base(3, Strategy::Triadic, &LockSet::new(), base)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn monochromatic_lightness_is_evenly_stepped() {
        let base = Color::from_hsl(200.0, 50.0, 50.0);
        let palette = seeded()
            .generate_from_base(5, Strategy::Monochromatic, &LockSet::new(), base)
            .unwrap();
        let lightness: Vec<u8> = palette.iter().map(|c| c.hsl().l).collect();
        assert_eq!(lightness, vec![10, 30, 50, 70, 90]);
        let expected: Vec<String> = [10.0, 30.0, 50.0, 70.0, 90.0]
            .iter()
            .map(|l| hsl_to_hex(200.0, 50.0, *l))
            .collect();
        assert_eq!(palette.to_hex_strings(), expected);
    }

    #[test]
    fn monochromatic_two_colors_spans_full_range() {
        let palette = seeded()
            .generate_from_base(2, Strategy::Monochromatic, &LockSet::new(), hex("#808080"))
            .unwrap();
        assert_eq!(palette.colors()[0].hsl().l, 10);
        assert_eq!(palette.colors()[1].hsl().l, 90);
    }

    // =====================================================================
    // Locks
    // =====================================================================

    #[test]
    fn locked_slots_survive_every_strategy() {
        let mut locks = LockSet::new();
        locks.lock(0, hex("#123456"));
        locks.lock(1, hex("#abcdef"));
        locks.lock(4, hex("#fedcba"));

        let mut generator = seeded();
        for strategy in Strategy::ALL {
            let palette = generator.generate(6, strategy, &locks).unwrap();
            assert_eq!(palette.colors()[0], hex("#123456"), "{strategy}");
            assert_eq!(palette.colors()[1], hex("#abcdef"), "{strategy}");
            assert_eq!(palette.colors()[4], hex("#fedcba"), "{strategy}");
        }
    }

    #[test]
    fn first_lock_is_base_color() {
        let mut locks = LockSet::new();
        locks.lock(3, hex("#ff0000"));
        let palette = seeded().generate(3, Strategy::Triadic, &locks).unwrap();
        assert_eq!(palette.to_hex_strings(), vec!["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn locks_beyond_count_are_ignored_in_output() {
        let mut locks = LockSet::new();
        locks.lock(9, hex("#00ff00"));
        let palette = seeded().generate(4, Strategy::Analogous, &locks).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.colors()[2], hex("#00ff00"));
    }

    #[test]
    fn same_seed_same_palette() {
        let locks = LockSet::new();
        let a = seeded().generate(7, Strategy::Random, &locks).unwrap();
        let b = seeded().generate(7, Strategy::Random, &locks).unwrap();
        assert_eq!(a, b);
    }
}
