//! Where font bytes come from.
//!
//! `glyph-width` reads its font from disk relative to the working directory,
//! while tests hand it fonts built in memory. Both go through [`FontSource`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontSourceError {
    #[error("No font at '{0}'")]
    NotFound(String),

    #[error("Cannot read font '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot determine the working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}

/// Font file contents, shared without copying.
pub type SharedFontData = Arc<Vec<u8>>;

/// Supplies the bytes of a font file named by a path.
pub trait FontSource: Send + Sync + Debug {
    fn load(&self, path: &str) -> Result<SharedFontData, FontSourceError>;

    /// Short label used in log lines.
    fn name(&self) -> &'static str;
}

/// Fonts registered up front under a path, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryFontSource {
    fonts: HashMap<String, SharedFontData>,
}

impl InMemoryFontSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `data` under `path`, replacing any earlier font there.
    pub fn add(&mut self, path: impl Into<String>, data: Vec<u8>) {
        self.fonts.insert(path.into(), Arc::new(data));
    }
}

impl FontSource for InMemoryFontSource {
    fn load(&self, path: &str) -> Result<SharedFontData, FontSourceError> {
        self.fonts
            .get(path)
            .cloned()
            .ok_or_else(|| FontSourceError::NotFound(path.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryFontSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_source_load() {
        let mut source = InMemoryFontSource::new();
        source.add("fonts/test.ttf", vec![0, 1, 0, 0]);

        let data = source.load("fonts/test.ttf").unwrap();
        assert_eq!(&*data, &[0, 1, 0, 0]);
    }

    #[test]
    fn test_in_memory_source_not_found() {
        let source = InMemoryFontSource::new();
        assert!(matches!(
            source.load("missing.ttf"),
            Err(FontSourceError::NotFound(path)) if path == "missing.ttf"
        ));
    }

    #[test]
    fn test_in_memory_source_add_replaces() {
        let mut source = InMemoryFontSource::new();
        source.add("a.ttf", vec![1]);
        source.add("a.ttf", vec![2]);
        assert_eq!(&*source.load("a.ttf").unwrap(), &[2]);
    }
}
