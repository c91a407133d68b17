use crate::cmap::CharacterMap;
use crate::error::GlyphError;
use crate::font::FontResource;
use crate::glyphs::{GlyphSet, NOTDEF};
use std::fmt;

/// Result of resolving one character against a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphLookup {
    pub character: char,
    /// Identifier of the glyph whose width was used.
    pub glyph: String,
    pub glyph_id: u16,
    pub width: u16,
    /// True when the character was unmapped and `.notdef` answered.
    pub fallback: bool,
}

impl fmt::Display for GlyphLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} (U+{:04X}) -> {} (gid {}) width {}",
            self.character,
            u32::from(self.character),
            self.glyph,
            self.glyph_id,
            self.width
        )?;
        if self.fallback {
            f.write_str(" [fallback]")?;
        }
        Ok(())
    }
}

/// Resolves `ch` to a glyph, falling back to `.notdef` when `ch` is unmapped
/// or its glyph has no metrics.
pub fn resolve(
    cmap: &CharacterMap,
    glyphs: &GlyphSet,
    ch: char,
) -> Result<GlyphLookup, GlyphError> {
    let code_point = u32::from(ch);

    if let Some(name) = cmap.get(code_point)
        && let Some(metrics) = glyphs.get(name)
    {
        return Ok(GlyphLookup {
            character: ch,
            glyph: name.to_string(),
            glyph_id: metrics.glyph_id,
            width: metrics.width,
            fallback: false,
        });
    }

    match cmap.get(code_point) {
        Some(name) => log::debug!("Glyph '{}' for U+{:04X} has no metrics", name, code_point),
        None => log::debug!("U+{:04X} is not in the character map", code_point),
    }

    let notdef = glyphs.get(NOTDEF).ok_or(GlyphError::MissingNotdef)?;
    Ok(GlyphLookup {
        character: ch,
        glyph: NOTDEF.to_string(),
        glyph_id: notdef.glyph_id,
        width: notdef.width,
        fallback: true,
    })
}

/// Advance width of `ch` in font design units.
pub fn glyph_width(cmap: &CharacterMap, glyphs: &GlyphSet, ch: char) -> Result<u16, GlyphError> {
    resolve(cmap, glyphs, ch).map(|hit| hit.width)
}

/// Extracts the best cmap and glyph set from `font` and resolves `ch`.
pub fn lookup(font: &FontResource, ch: char) -> Result<GlyphLookup, GlyphError> {
    let (cmap, glyphs) = font.cmap_and_glyphs()?;
    let hit = resolve(&cmap, &glyphs, ch)?;
    log::info!("{}", hit);
    Ok(hit)
}
