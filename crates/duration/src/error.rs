use thiserror::Error;

/// Errors raised while reading, parsing or rendering a duration table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid binary digit '{found}' in index prefix of line '{line}'")]
    InvalidDigit { line: String, found: char },

    #[error("Row '{line}' has no '=> <ticks>' value")]
    MissingTicks { line: String },

    #[error("Index {index} appears more than once in the table")]
    DuplicateIndex { index: u8 },

    #[error("Index {index} does not fit in the 32-entry length table")]
    IndexOutOfRange { index: u8 },

    #[error("No row defines index {index} of the length table")]
    MissingSlot { index: u8 },

    #[error("Unknown output format '{0}' (expected tuple, lookup or json)")]
    UnknownFormat(String),

    #[error("Failed to read table from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
