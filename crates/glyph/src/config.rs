/// Font read when no path is given, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "src/fonts/Retro Gaming.ttf";

/// Character measured when none is given.
pub const DEFAULT_CHARACTER: char = 'A';

/// Settings for one glyph-width lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphLookupConfig {
    /// Path handed to the `FontSource`.
    ///
    /// Defaults to `src/fonts/Retro Gaming.ttf`.
    pub font_path: String,
    /// Defaults to `'A'`.
    pub character: char,
}

impl Default for GlyphLookupConfig {
    fn default() -> Self {
        Self {
            font_path: DEFAULT_FONT_PATH.to_string(),
            character: DEFAULT_CHARACTER,
        }
    }
}
