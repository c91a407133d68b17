//! Glyph advance-width lookup.
//!
//! A font's best Unicode cmap gives each code point a glyph identifier and its
//! `hmtx` table gives each glyph an advance width. A character that is not
//! mapped, or whose glyph has no metrics, measures as `.notdef`.
//!
//! Font parsing is done by `ttf-parser`; font bytes come from any
//! [`FontSource`](nes_scratch_traits::FontSource).

pub mod cmap;
pub mod config;
pub mod error;
pub mod font;
pub mod glyphs;
pub mod lookup;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use cmap::{CMAP_PREFERENCE, CharacterMap};
pub use config::{DEFAULT_CHARACTER, DEFAULT_FONT_PATH, GlyphLookupConfig};
pub use error::GlyphError;
pub use font::FontResource;
pub use glyphs::{GlyphMetrics, GlyphSet, NOTDEF};
pub use lookup::{GlyphLookup, glyph_width, lookup, resolve};

use nes_scratch_traits::FontSource;

/// Loads the configured font from `source` and measures the configured character.
pub fn run(
    config: &GlyphLookupConfig,
    source: &dyn FontSource,
) -> Result<GlyphLookup, GlyphError> {
    let font = FontResource::load(source, &config.font_path)?;
    lookup(&font, config.character)
}
