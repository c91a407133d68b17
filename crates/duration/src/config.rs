use crate::error::TableError;
use crate::render::OutputFormat;
use crate::table::DEFAULT_TABLE;
use std::borrow::Cow;
use std::path::PathBuf;

/// Where the table text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableInput {
    /// The built-in [`DEFAULT_TABLE`].
    #[default]
    Embedded,
    /// A UTF-8 text file.
    File(PathBuf),
}

impl TableInput {
    /// Reads the table text.
    pub fn read(&self) -> Result<Cow<'static, str>, TableError> {
        match self {
            TableInput::Embedded => Ok(Cow::Borrowed(DEFAULT_TABLE)),
            TableInput::File(path) => {
                log::debug!("Reading table from {}", path.display());
                std::fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| TableError::Read {
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }
}

/// Settings for one run of the table tool. Defaults print the embedded
/// table as tuple lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableConfig {
    pub input: TableInput,
    pub format: OutputFormat,
}
