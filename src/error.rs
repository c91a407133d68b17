use nes_scratch_duration::TableError;
use nes_scratch_glyph::GlyphError;
use nes_scratch_traits::FontSourceError;
use thiserror::Error;

/// Top-level error for both tools.
#[derive(Error, Debug)]
pub enum ScratchError {
    #[error("Duration table failed: {0}")]
    Table(#[from] TableError),

    #[error("Glyph lookup failed: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Font source failed: {0}")]
    Source(#[from] FontSourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
