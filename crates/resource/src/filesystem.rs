//! Filesystem-based font source for native platforms.
//!
//! Relative paths are resolved against a base directory, which for the CLI is
//! the current working directory. Absolute paths are read as given.

use nes_scratch_traits::{FontSource, FontSourceError, SharedFontData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A font source that reads font files from the local filesystem.
#[derive(Debug)]
pub struct FilesystemFontSource {
    base_path: PathBuf,
}

impl FilesystemFontSource {
    /// Creates a new filesystem source rooted at `base_path`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Creates a source rooted at the process's current directory.
    ///
    /// # Errors
    ///
    /// Returns `FontSourceError::WorkingDirectory` if the current directory is
    /// unavailable.
    pub fn current_dir() -> Result<Self, FontSourceError> {
        std::env::current_dir()
            .map(Self::new)
            .map_err(FontSourceError::WorkingDirectory)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_path.join(candidate)
        }
    }
}

impl FontSource for FilesystemFontSource {
    fn load(&self, path: &str) -> Result<SharedFontData, FontSourceError> {
        let full_path = self.resolve(path);
        log::debug!("Reading font from {}", full_path.display());

        std::fs::read(&full_path).map(Arc::new).map_err(|source| {
            let path = full_path.display().to_string();
            if source.kind() == std::io::ErrorKind::NotFound {
                FontSourceError::NotFound(path)
            } else {
                FontSourceError::Unreadable { path, source }
            }
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemFontSource"
    }
}
