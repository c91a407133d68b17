//! Parsed font handle.
//!
//! `FontResource` keeps the raw bytes and hands out cheap `ttf_parser::Face`
//! views on demand, which avoids a self-referential struct.

use crate::cmap::{CharacterMap, platform_number, preference_rank};
use crate::error::GlyphError;
use crate::glyphs::{GlyphMetrics, GlyphSet, fallback_glyph_name, glyph_order};
use nes_scratch_traits::{FontSource, SharedFontData};

/// A font file that has been checked to parse.
pub struct FontResource {
    data: SharedFontData,
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontResource {
    /// Wraps font bytes, failing if they are not a parsable font.
    pub fn from_bytes(data: impl Into<SharedFontData>) -> Result<Self, GlyphError> {
        let font = Self { data: data.into() };
        let face = font.as_face()?;
        log::debug!(
            "Parsed font: {} glyphs, {} units per em",
            face.number_of_glyphs(),
            face.units_per_em()
        );
        Ok(font)
    }

    /// Loads and parses the font stored under `path` in `source`.
    pub fn load(source: &dyn FontSource, path: &str) -> Result<Self, GlyphError> {
        log::debug!("Loading font '{}' via {}", path, source.name());
        let data = source.load(path)?;
        Self::from_bytes(data)
    }

    /// Creates a lightweight Face view over the font data.
    pub fn as_face(&self) -> Result<ttf_parser::Face<'_>, GlyphError> {
        Ok(ttf_parser::Face::parse(&self.data, 0)?)
    }

    /// Parses the face once and extracts both the best character map and
    /// the glyph set.
    pub fn cmap_and_glyphs(&self) -> Result<(CharacterMap, GlyphSet), GlyphError> {
        let face = self.as_face()?;
        let order = glyph_order(&face);
        Ok((best_cmap(&face, &order), glyph_set(&face, order)))
    }
}

/// Builds the character map from the preferred Unicode cmap subtable of `face`.
///
/// `order` names each glyph id. Returns an empty map when the font has no
/// Unicode subtable.
pub fn best_cmap(face: &ttf_parser::Face<'_>, order: &[String]) -> CharacterMap {
    let mut map = CharacterMap::new();

    let Some(table) = face.tables().cmap else {
        log::warn!("Font has no cmap table");
        return map;
    };

    let best = table
        .subtables
        .into_iter()
        .filter_map(|subtable| {
            let platform = platform_number(subtable.platform_id);
            preference_rank(platform, subtable.encoding_id).map(|rank| (rank, platform, subtable))
        })
        .min_by_key(|(rank, _, _)| *rank);

    let Some((_, platform, subtable)) = best else {
        log::warn!("Font has no Unicode cmap subtable");
        return map;
    };

    subtable.codepoints(|code_point| {
        if let Some(gid) = subtable.glyph_index(code_point) {
            let name = order
                .get(usize::from(gid.0))
                .cloned()
                .unwrap_or_else(|| fallback_glyph_name(gid.0));
            map.insert(code_point, name);
        }
    });

    log::debug!(
        "Best cmap is ({}, {}) with {} code points",
        platform,
        subtable.encoding_id,
        map.len()
    );
    map
}

/// Collects the advance width of every glyph of `face` that has one, keyed by
/// the matching name in `order`.
pub fn glyph_set(face: &ttf_parser::Face<'_>, order: Vec<String>) -> GlyphSet {
    let mut set = GlyphSet::new();
    for (gid, name) in (0..face.number_of_glyphs()).zip(order) {
        if let Some(width) = face.glyph_hor_advance(ttf_parser::GlyphId(gid)) {
            set.insert(name, GlyphMetrics::new(gid, width));
        }
    }
    log::debug!("Collected advance widths for {} glyphs", set.len());
    set
}
