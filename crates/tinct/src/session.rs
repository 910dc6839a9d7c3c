//! Editable palette state: current colors, locks, size, strategy and selection.
//!
//! [`PaletteSession`] is the state a palette editor works against. Every
//! mutation goes through a method, and every method that changes the size or
//! strategy regenerates the palette so colors, count and locks never disagree.

use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::Serialize;

use crate::color::{Color, Hsl};
use crate::error::{ColorError, Result};
use crate::palette::{
    validate_count, LockSet, PaletteGenerator, Strategy, DEFAULT_COLORS, MAX_COLORS, MIN_COLORS,
};

/// Every representation of one color, as shown in a detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorDetails {
    /// `#RRGGBB`, uppercase.
    pub hex: String,
    /// `rgb(r, g, b)`.
    pub rgb: String,
    /// `hsl(h, s%, l%)`.
    pub hsl: String,
    /// Numeric HSL, for seeding sliders.
    pub hsl_values: Hsl,
}

impl From<Color> for ColorDetails {
    fn from(color: Color) -> Self {
        let hsl = color.hsl();
        Self {
            hex: color.to_upper_hex(),
            rgb: color.to_css_rgb(),
            hsl: hsl.to_string(),
            hsl_values: hsl,
        }
    }
}

/// A palette being edited.
#[derive(Debug)]
pub struct PaletteSession<R = ThreadRng> {
    generator: PaletteGenerator<R>,
    colors: Vec<Color>,
    count: usize,
    strategy: Strategy,
    locks: LockSet,
    selected: Option<usize>,
}

impl PaletteSession<ThreadRng> {
    /// Starts a random five-color session.
    pub fn new() -> Self {
        Self::with_generator(PaletteGenerator::new())
    }
}

impl Default for PaletteSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaletteSession<R> {
    /// Starts a session with the default size and strategy and generates its
    /// first palette.
    pub fn with_generator(generator: PaletteGenerator<R>) -> Self {
        let mut session = Self {
            generator,
            colors: Vec::new(),
            count: DEFAULT_COLORS,
            strategy: Strategy::default(),
            locks: LockSet::new(),
            selected: None,
        };
        session.fill();
        session
    }

    /// Starts a session with explicit size and strategy.
    pub fn with_settings(generator: PaletteGenerator<R>, count: usize, strategy: Strategy) -> Result<Self> {
        validate_count(count)?;
        let mut session = Self {
            generator,
            colors: Vec::new(),
            count,
            strategy,
            locks: LockSet::new(),
            selected: None,
        };
        session.fill();
        Ok(session)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Refills every unlocked slot.
    pub fn regenerate(&mut self) {
        self.fill();
    }

    /// Switches strategy and regenerates.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        self.fill();
    }

    /// Grows the palette by one slot, up to ten. Returns whether it grew.
    pub fn increase_count(&mut self) -> bool {
        if self.count >= MAX_COLORS {
            return false;
        }
        self.count += 1;
        self.fill();
        true
    }

    /// Shrinks the palette by one slot, down to two. Returns whether it shrank.
    pub fn decrease_count(&mut self) -> bool {
        if self.count <= MIN_COLORS {
            return false;
        }
        self.count -= 1;
        if self.selected.is_some_and(|i| i >= self.count) {
            self.selected = None;
        }
        self.fill();
        true
    }

    /// Locks the slot's current color, or unlocks it if already locked.
    /// Returns whether the slot is locked afterwards.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        let color = self.color_at(index)?;
        if self.locks.unlock(index).is_some() {
            return Ok(false);
        }
        self.locks.lock(index, color);
        Ok(true)
    }

    /// Unlocks everything when every slot is locked; otherwise locks every
    /// current color. Returns whether all slots are locked afterwards.
    pub fn toggle_lock_all(&mut self) -> bool {
        if self.all_locked() {
            self.locks.clear();
            false
        } else {
            self.locks.lock_all(&self.colors);
            true
        }
    }

    /// True when every slot of the current palette is locked.
    pub fn all_locked(&self) -> bool {
        (0..self.count).all(|index| self.locks.is_locked(index))
    }

    /// Selects a slot for editing and describes its color.
    pub fn select(&mut self, index: usize) -> Result<ColorDetails> {
        let color = self.color_at(index)?;
        self.selected = Some(index);
        Ok(ColorDetails::from(color))
    }

    /// Replaces the selected color with the given HSL value.
    ///
    /// A locked slot keeps its lock, pinned to the new color.
    pub fn adjust_selected(&mut self, h: f64, s: f64, l: f64) -> Result<Color> {
        let index = self.selected.ok_or(ColorError::NoSelection)?;
        let color = Color::from_hsl(h, s, l);
        self.colors[index] = color;
        if self.locks.is_locked(index) {
            self.locks.lock(index, color);
        }
        debug!("slot {} adjusted to {}", index, color);
        Ok(color)
    }

    /// Replaces the palette with previously saved colors.
    ///
    /// Locks and selection are cleared and the size follows the loaded colors.
    pub fn load(&mut self, colors: &[Color]) -> Result<()> {
        validate_count(colors.len())?;
        self.colors = colors.to_vec();
        self.count = colors.len();
        self.locks.clear();
        self.selected = None;
        Ok(())
    }

    fn color_at(&self, index: usize) -> Result<Color> {
        self.colors
            .get(index)
            .copied()
            .ok_or(ColorError::SlotOutOfRange {
                index,
                len: self.colors.len(),
            })
    }

    fn fill(&mut self) {
        // count is validated on every path that sets it
        match self.generator.generate(self.count, self.strategy, &self.locks) {
            Ok(palette) => self.colors = palette.into_colors(),
            Err(err) => debug!("palette generation skipped: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> PaletteSession<StdRng> {
        PaletteSession::with_generator(PaletteGenerator::with_rng(StdRng::seed_from_u64(3)))
    }

    #[test]
    fn starts_with_five_random_colors() {
        let s = session();
        assert_eq!(s.count(), 5);
        assert_eq!(s.colors().len(), 5);
        assert_eq!(s.strategy(), Strategy::Random);
        assert!(s.locks().is_empty());
    }

    #[test]
    fn with_settings_validates_count() {
        let generator = PaletteGenerator::with_rng(StdRng::seed_from_u64(3));
        assert!(PaletteSession::with_settings(generator, 12, Strategy::Triadic).is_err());
    }

    #[test]
    fn count_is_bounded() {
        let mut s = session();
        while s.increase_count() {}
        assert_eq!(s.count(), 10);
        assert_eq!(s.colors().len(), 10);
        assert!(!s.increase_count());

        while s.decrease_count() {}
        assert_eq!(s.count(), 2);
        assert_eq!(s.colors().len(), 2);
        assert!(!s.decrease_count());
    }

    #[test]
    fn toggle_lock_pins_current_color_across_regeneration() {
        let mut s = session();
        let pinned = s.colors()[1];
        assert!(s.toggle_lock(1).unwrap());
        for _ in 0..5 {
            s.regenerate();
            assert_eq!(s.colors()[1], pinned);
        }
        assert!(!s.toggle_lock(1).unwrap());
        assert!(!s.locks().is_locked(1));
    }

    #[test]
    fn toggle_lock_out_of_range() {
        let mut s = session();
        let err = s.toggle_lock(7).unwrap_err();
        assert!(matches!(err, ColorError::SlotOutOfRange { index: 7, len: 5 }));
    }

    #[test]
    fn toggle_lock_all_locks_then_unlocks() {
        let mut s = session();
        let before = s.colors().to_vec();
        assert!(s.toggle_lock_all());
        assert!(s.all_locked());
        s.set_strategy(Strategy::Complementary);
        assert_eq!(s.colors(), before.as_slice());
        assert!(!s.toggle_lock_all());
        assert!(s.locks().is_empty());
    }

    #[test]
    fn growing_after_lock_all_is_no_longer_all_locked() {
        let mut s = session();
        s.toggle_lock_all();
        s.increase_count();
        assert!(!s.all_locked());
    }

    #[test]
    fn select_describes_color() {
        let mut s = session();
        s.load(&[Color::new(255, 0, 0), Color::new(0, 0, 255)]).unwrap();
        let details = s.select(0).unwrap();
        assert_eq!(details.hex, "#FF0000");
        assert_eq!(details.rgb, "rgb(255, 0, 0)");
        assert_eq!(details.hsl, "hsl(0, 100%, 50%)");
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn adjust_requires_selection() {
        let mut s = session();
        assert!(matches!(
            s.adjust_selected(10.0, 50.0, 50.0),
            Err(ColorError::NoSelection)
        ));
    }

    #[test]
    fn adjust_updates_lock_of_locked_slot() {
        let mut s = session();
        s.toggle_lock(2).unwrap();
        s.select(2).unwrap();
        let color = s.adjust_selected(120.0, 100.0, 50.0).unwrap();
        assert_eq!(color.to_string(), "#00ff00");
        assert_eq!(s.colors()[2], color);
        assert_eq!(s.locks().get(2), Some(color));
    }

    #[test]
    fn adjust_leaves_unlocked_slot_unlocked() {
        let mut s = session();
        s.select(0).unwrap();
        s.adjust_selected(0.0, 0.0, 50.0).unwrap();
        assert!(!s.locks().is_locked(0));
    }

    #[test]
    fn load_resets_locks_and_count() {
        let mut s = session();
        s.toggle_lock_all();
        s.select(4).unwrap();
        let colors = vec![Color::BLACK, Color::WHITE, Color::new(1, 2, 3)];
        s.load(&colors).unwrap();
        assert_eq!(s.count(), 3);
        assert_eq!(s.colors(), colors.as_slice());
        assert!(s.locks().is_empty());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn load_rejects_bad_sizes() {
        let mut s = session();
        assert!(s.load(&[Color::BLACK]).is_err());
        assert_eq!(s.count(), 5);
    }
}
