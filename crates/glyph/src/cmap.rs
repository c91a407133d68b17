//! Character map: Unicode code point to glyph identifier.

use std::collections::BTreeMap;

/// Unicode (platform, encoding) pairs in the order a "best" cmap is chosen.
///
/// Full-repertoire tables win over BMP-only ones; Windows tables are preferred
/// over the equivalent Unicode-platform table.
pub const CMAP_PREFERENCE: [(u16, u16); 8] = [
    (3, 10),
    (0, 6),
    (0, 4),
    (3, 1),
    (0, 3),
    (0, 2),
    (0, 1),
    (0, 0),
];

/// Maps code points to glyph identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: BTreeMap<u32, String>,
}

impl CharacterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code_point: u32, glyph: impl Into<String>) {
        self.entries.insert(code_point, glyph.into());
    }

    /// Returns the glyph identifier mapped to `code_point`.
    pub fn get(&self, code_point: u32) -> Option<&str> {
        self.entries.get(&code_point).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(u32, N)> for CharacterMap {
    fn from_iter<I: IntoIterator<Item = (u32, N)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code_point, glyph) in iter {
            map.insert(code_point, glyph);
        }
        map
    }
}

/// Position of `(platform, encoding)` in [`CMAP_PREFERENCE`], lower is better.
pub(crate) fn preference_rank(platform: u16, encoding: u16) -> Option<usize> {
    CMAP_PREFERENCE
        .iter()
        .position(|&pair| pair == (platform, encoding))
}

pub(crate) fn platform_number(platform: ttf_parser::PlatformId) -> u16 {
    use ttf_parser::PlatformId;
    match platform {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}
