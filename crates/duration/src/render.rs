use crate::entry::DurationEntry;
use crate::error::TableError;
use crate::lookup::LengthTable;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;
use unicode_general_category::{GeneralCategory, get_general_category};

/// How the sorted table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `(index, 'line')` tuple per row.
    #[default]
    Tuple,
    /// A single `[ticks, ...]` array indexed by row index.
    Lookup,
    /// A JSON array of entries.
    Json,
}

impl FromStr for OutputFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tuple" => Ok(OutputFormat::Tuple),
            "lookup" => Ok(OutputFormat::Lookup),
            "json" => Ok(OutputFormat::Json),
            other => Err(TableError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Tuple => "tuple",
            OutputFormat::Lookup => "lookup",
            OutputFormat::Json => "json",
        })
    }
}

/// Quotes `s` the way Python's `repr()` quotes a `str`.
pub fn python_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => push_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Python's `str.isprintable` rule: categories "Other" and "Separator" are
/// not printable, except the ASCII space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

fn push_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    let _ = match code {
        0..=0xff => write!(out, "\\x{:02x}", code),
        0x100..=0xffff => write!(out, "\\u{:04x}", code),
        _ => write!(out, "\\U{:08x}", code),
    };
}

/// Renders one entry as `(index, 'line')`.
pub fn render_tuple(entry: &DurationEntry) -> String {
    format!("({}, {})", entry.index, python_repr(&entry.line))
}

/// Renders already-sorted entries in the requested format, newline-terminated.
pub fn render(entries: &[DurationEntry], format: OutputFormat) -> Result<String, TableError> {
    let mut out = match format {
        OutputFormat::Tuple => entries
            .iter()
            .map(render_tuple)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Lookup => LengthTable::from_entries(entries)?.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(entries)?,
    };
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}
