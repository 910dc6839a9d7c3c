//! Saved palettes, persisted as a JSON array in a [`KeyValueStore`].

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::store::KeyValueStore;

/// Store key holding the saved palette list.
pub const SAVED_PALETTES_KEY: &str = "savedPalettes";

/// A palette the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Millisecond timestamp of the save, unique within a library.
    pub id: u64,
    pub colors: Vec<Color>,
    pub date: DateTime<Utc>,
}

/// The saved palettes of one store, oldest first.
#[derive(Debug)]
pub struct PaletteLibrary<S> {
    store: S,
    palettes: Vec<SavedPalette>,
}

impl<S: KeyValueStore> PaletteLibrary<S> {
    /// Loads the saved palettes from `store`. A missing key is an empty library.
    pub fn open(store: S) -> Result<Self> {
        let palettes = match store.get(SAVED_PALETTES_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        Ok(Self { store, palettes })
    }

    pub fn list(&self) -> &[SavedPalette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&SavedPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Saves `colors` stamped with the current time.
    pub fn save(&mut self, colors: &[Color]) -> Result<SavedPalette> {
        self.save_at(colors, Utc::now())
    }

    /// Saves `colors` stamped with `now`.
    ///
    /// The id is the timestamp in milliseconds, bumped past the newest existing
    /// id when two saves land in the same millisecond.
    pub fn save_at(&mut self, colors: &[Color], now: DateTime<Utc>) -> Result<SavedPalette> {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let next = self
            .palettes
            .iter()
            .map(|p| p.id.saturating_add(1))
            .max()
            .unwrap_or(0);
        let saved = SavedPalette {
            id: stamp.max(next),
            colors: colors.to_vec(),
            date: now,
        };
        let mut palettes = self.palettes.clone();
        palettes.push(saved.clone());
        self.commit(palettes)?;
        info!("saved palette {} ({} colors)", saved.id, saved.colors.len());
        Ok(saved)
    }

    /// Deletes one palette.
    pub fn delete(&mut self, id: u64) -> Result<SavedPalette> {
        let index = self
            .palettes
            .iter()
            .position(|p| p.id == id)
            .ok_or(ColorError::PaletteNotFound(id))?;
        let mut palettes = self.palettes.clone();
        let removed = palettes.remove(index);
        self.commit(palettes)?;
        info!("deleted palette {}", id);
        Ok(removed)
    }

    /// Deletes every palette, returning how many there were.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.palettes.len();
        if count > 0 {
            self.commit(Vec::new())?;
            info!("cleared {} saved palettes", count);
        }
        Ok(count)
    }

    /// Hands the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Writes `palettes` to the store, then adopts them. A failed write
    /// leaves the library as it was.
    fn commit(&mut self, palettes: Vec<SavedPalette>) -> Result<()> {
        let json = serde_json::to_string(&palettes)?;
        self.store.set(SAVED_PALETTES_KEY, &json)?;
        self.palettes = palettes;
        Ok(())
    }
}
