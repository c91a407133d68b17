//! Parser for the hand-written APU length-counter table.
//!
//! Rows look like `1 1001 (19) => 24`: a binary index written as `b bbbb`,
//! its hex form, and the tick count it selects. [`run`] reads a table,
//! sorts the rows by index and renders them.

pub mod config;
pub mod entry;
pub mod error;
pub mod lookup;
pub mod parser;
pub mod render;
pub mod table;

pub use config::{TableConfig, TableInput};
pub use entry::{DurationEntry, sort_entries};
pub use error::TableError;
pub use lookup::{LENGTH_TABLE_SIZE, LengthTable};
pub use parser::{is_row, parse_index, parse_row, parse_sorted, parse_table};
pub use render::{OutputFormat, python_repr, render, render_tuple};
pub use table::DEFAULT_TABLE;

/// Reads, parses, sorts and renders the table described by `config`.
pub fn run(config: &TableConfig) -> Result<String, TableError> {
    let text = config.input.read()?;
    let entries = parse_sorted(&text)?;
    log::debug!(
        "Rendering {} entries as {}",
        entries.len(),
        config.format
    );
    render(&entries, config.format)
}
