use nes_scratch_traits::FontSourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Font source error: {0}")]
    Source(#[from] FontSourceError),

    #[error("Failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    #[error("Font defines no '.notdef' glyph to fall back on")]
    MissingNotdef,
}
