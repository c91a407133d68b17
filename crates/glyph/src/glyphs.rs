use std::collections::HashMap;

/// Identifier of the missing-glyph placeholder, always glyph 0.
pub const NOTDEF: &str = ".notdef";

/// Horizontal metrics of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub glyph_id: u16,
    /// Advance width in font design units.
    pub width: u16,
}

impl GlyphMetrics {
    pub fn new(glyph_id: u16, width: u16) -> Self {
        Self { glyph_id, width }
    }
}

/// Glyph identifier to metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSet {
    glyphs: HashMap<String, GlyphMetrics>,
}

impl GlyphSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, metrics: GlyphMetrics) {
        self.glyphs.insert(name.into(), metrics);
    }

    pub fn get(&self, name: &str) -> Option<&GlyphMetrics> {
        self.glyphs.get(name)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, GlyphMetrics)> for GlyphSet {
    fn from_iter<I: IntoIterator<Item = (N, GlyphMetrics)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, metrics) in iter {
            set.insert(name, metrics);
        }
        set
    }
}

/// Name for a glyph id that has no entry in the glyph order.
pub fn fallback_glyph_name(glyph_id: u16) -> String {
    if glyph_id == 0 {
        NOTDEF.to_string()
    } else {
        format!("glyph{glyph_id:05}")
    }
}

/// Assigns a unique identifier to every glyph of `face`.
///
/// Glyph 0 is `.notdef`; others take their `post` name, else `glyphNNNNN`.
/// Repeated names get a `#n` suffix.
pub(crate) fn glyph_order(face: &ttf_parser::Face<'_>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    (0..face.number_of_glyphs())
        .map(|gid| {
            let base = match gid {
                0 => NOTDEF.to_string(),
                _ => face
                    .glyph_name(ttf_parser::GlyphId(gid))
                    .map_or_else(|| fallback_glyph_name(gid), str::to_string),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}#{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_glyph_name() {
        assert_eq!(fallback_glyph_name(0), ".notdef");
        assert_eq!(fallback_glyph_name(7), "glyph00007");
        assert_eq!(fallback_glyph_name(12345), "glyph12345");
    }

    #[test]
    fn test_glyph_set_lookup() {
        let set: GlyphSet = [
            ("glyphA", GlyphMetrics::new(1, 600)),
            (NOTDEF, GlyphMetrics::new(0, 500)),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(NOTDEF).map(|m| m.glyph_id), Some(0));
        assert_eq!(set.get("glyphA").map(|m| m.width), Some(600));
        assert!(set.get("glyphB").is_none());
    }
}
