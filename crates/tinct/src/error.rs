//! Error types for color conversion, palette generation and persistence.

use thiserror::Error;

use crate::store::StoreError;

/// Errors produced by the color model and its collaborators.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Input is not exactly six hex digits (with an optional leading `#`).
    #[error("invalid color format: '{0}' (expected #rrggbb)")]
    InvalidColorFormat(String),

    /// Palette size outside the supported range.
    #[error("invalid color count {0} (must be between {min} and {max})", min = crate::MIN_COLORS, max = crate::MAX_COLORS)]
    InvalidCount(usize),

    /// Unknown generation strategy name.
    #[error("unknown strategy '{0}' (expected random, complementary, analogous, triadic or monochromatic)")]
    InvalidStrategy(String),

    /// A session operation referenced a slot the palette does not have.
    #[error("slot {index} is out of range for a palette of {len} colors")]
    SlotOutOfRange { index: usize, len: usize },

    /// An adjustment was requested with no selected slot.
    #[error("no color selected")]
    NoSelection,

    /// A share URL did not carry a usable `colors` parameter.
    #[error("invalid share url: {0}")]
    InvalidShareUrl(String),

    /// The base of a share link is not an absolute URL.
    #[error("invalid share base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Saved palette id not present in the library.
    #[error("saved palette {0} not found")]
    PaletteNotFound(u64),

    /// Failure in the key-value store.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for tinct operations.
pub type Result<T> = std::result::Result<T, ColorError>;
