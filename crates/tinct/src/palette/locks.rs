//! Pinned palette slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Colors pinned to slot indices.
///
/// Generation never overwrites a locked slot. Entries are kept in slot order,
/// so [`LockSet::first`] is the lock with the lowest index, which is the base
/// color for the hue-based strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockSet {
    slots: BTreeMap<usize, Color>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `color` at `index`, returning the color previously pinned there.
    pub fn lock(&mut self, index: usize, color: Color) -> Option<Color> {
        self.slots.insert(index, color)
    }

    /// Releases `index`, returning the color that was pinned.
    pub fn unlock(&mut self, index: usize) -> Option<Color> {
        self.slots.remove(&index)
    }

    /// Pins every color of `colors` at its own index.
    pub fn lock_all(&mut self, colors: &[Color]) {
        self.slots.extend(colors.iter().copied().enumerate());
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.slots.get(&index).copied()
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    /// The lock with the lowest slot index.
    pub fn first(&self) -> Option<(usize, Color)> {
        self.slots.iter().next().map(|(i, c)| (*i, *c))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Highest locked slot index.
    pub fn max_index(&self) -> Option<usize> {
        self.slots.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.slots.iter().map(|(i, c)| (*i, *c))
    }
}

impl FromIterator<(usize, Color)> for LockSet {
    fn from_iter<I: IntoIterator<Item = (usize, Color)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
