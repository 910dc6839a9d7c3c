//! # Tinct - Color Conversion and Palette Generation
//!
//! `tinct` converts colors between hex, RGB and HSL and builds palettes of two
//! to ten colors from one of five strategies, keeping any slots the user has
//! locked.
//!
//! ## Core Concepts
//!
//! - [`Color`]: a 24-bit color, displayed as lowercase `#rrggbb`
//! - [`Rgb`] / [`Hsl`]: the channel views of a color
//! - [`Strategy`]: random, complementary, analogous, triadic or monochromatic
//! - [`LockSet`]: slot indices pinned to colors that survive regeneration
//! - [`PaletteGenerator`]: turns count + strategy + locks into a [`Palette`]
//! - [`PaletteSession`]: editable palette state (size, locks, selection)
//! - [`PaletteLibrary`]: saved palettes on top of a [`KeyValueStore`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{hex_to_hsl, hsl_to_hex, LockSet, PaletteGenerator, Strategy};
//!
//! assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
//! assert_eq!(hex_to_hsl("#0000ff").unwrap().h, 240);
//!
//! let mut generator = PaletteGenerator::new();
//! let palette = generator.generate(5, Strategy::Triadic, &LockSet::new()).unwrap();
//! assert_eq!(palette.len(), 5);
//! ```
//!
//! ## Locked Slots
//!
//! ```rust
//! use tinct::{PaletteSession, Strategy};
//!
//! let mut session = PaletteSession::new();
//! let kept = session.colors()[0];
//! session.toggle_lock(0).unwrap();
//! session.set_strategy(Strategy::Monochromatic);
//! assert_eq!(session.colors()[0], kept);
//! ```

pub mod color;
mod error;
pub mod export;
pub mod library;
pub mod palette;
pub mod session;
pub mod store;

// Error type
pub use error::{ColorError, Result};

// Color model
pub use color::{
    contrast_color, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex, rgb_to_hsl, Color, Hsl, Rgb,
};

// Palette generation
pub use palette::{
    validate_count, LockSet, Palette, PaletteGenerator, Strategy, DEFAULT_COLORS, MAX_COLORS,
    MIN_COLORS,
};

// Editing state
pub use session::{ColorDetails, PaletteSession};

// Export and sharing
pub use export::{export, parse_share_url, ExportFormat};

// Persistence collaborators
pub use library::{PaletteLibrary, SavedPalette, SAVED_PALETTES_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
