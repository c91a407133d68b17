//! Row parsing for the duration table.
//!
//! A row is any line starting with `0` or `1`. Its index comes from the
//! first six characters; the rest of the line is read leniently with `nom`
//! for the hex annotation, tick count and trailing note.
use crate::entry::{DurationEntry, sort_entries};
use crate::error::TableError;
use nom::{
    IResult, Parser,
    bytes::complete::{is_not, tag},
    character::complete::{char, hex_digit1, space0, u16 as nom_u16},
    combinator::{map_res, opt},
    sequence::{delimited, preceded},
};

/// Number of leading characters that hold the binary index (`b bbbb` plus slack).
pub const INDEX_WIDTH: usize = 6;

/// Returns true when the line is a table row rather than a heading.
pub fn is_row(line: &str) -> bool {
    matches!(line.chars().next(), Some('0' | '1'))
}

/// Parses the binary index held in the first six characters of `line`.
///
/// Spaces are ignored; any other non-binary character is an error.
pub fn parse_index(line: &str) -> Result<u8, TableError> {
    line.chars()
        .take(INDEX_WIDTH)
        .filter(|c| *c != ' ')
        .try_fold(0u8, |acc, c| match c {
            '0' => Ok(acc << 1),
            '1' => Ok((acc << 1) | 1),
            found => Err(TableError::InvalidDigit {
                line: line.to_string(),
                found,
            }),
        })
}

// --- Annotation parsers ---

fn hex_annotation(input: &str) -> IResult<&str, u8> {
    preceded(
        space0,
        delimited(
            char('('),
            map_res(hex_digit1, |s: &str| u8::from_str_radix(s, 16)),
            char(')'),
        ),
    )
    .parse(input)
}

fn ticks(input: &str) -> IResult<&str, u16> {
    preceded((space0, tag("=>"), space0), nom_u16).parse(input)
}

fn note(input: &str) -> IResult<&str, &str> {
    preceded(space0, delimited(char('('), is_not(")"), char(')'))).parse(input)
}

type Annotations<'a> = (Option<u8>, Option<u16>, Option<&'a str>);

fn annotations(input: &str) -> IResult<&str, Annotations<'_>> {
    (opt(hex_annotation), opt(ticks), opt(note)).parse(input)
}

fn prefix_end(line: &str) -> usize {
    line.char_indices()
        .nth(INDEX_WIDTH)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Parses a single row into an entry. The caller sets `section`.
pub fn parse_row(line: &str) -> Result<DurationEntry, TableError> {
    let index = parse_index(line)?;
    let rest = &line[prefix_end(line)..];
    let (hex, ticks, note) = annotations(rest)
        .map(|(_, parsed)| parsed)
        .unwrap_or((None, None, None));

    if let Some(hex) = hex
        && hex != index
    {
        log::warn!(
            "Row '{}' is annotated ({:02X}) but its binary index is {}",
            line,
            hex,
            index
        );
    }

    Ok(DurationEntry {
        index,
        line: line.to_string(),
        hex,
        ticks,
        note: note.map(|n| n.trim().to_string()),
        section: None,
    })
}

/// Parses every row of `text` in source order.
///
/// Lines are split on `\n` only, so a trailing `\r` stays part of the row.
pub fn parse_table(text: &str) -> Result<Vec<DurationEntry>, TableError> {
    let mut entries = Vec::new();
    let mut section: Option<&str> = None;

    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }
        if !is_row(line) {
            let heading = line.trim();
            if !heading.is_empty() {
                section = Some(heading);
            }
            continue;
        }

        let mut entry = parse_row(line)?;
        entry.section = section.map(str::to_string);
        entries.push(entry);
    }

    log::debug!("Parsed {} table rows", entries.len());
    Ok(entries)
}

/// Parses `text` and sorts the rows by ascending index.
pub fn parse_sorted(text: &str) -> Result<Vec<DurationEntry>, TableError> {
    let mut entries = parse_table(text)?;
    sort_entries(&mut entries);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DEFAULT_TABLE;

    #[test]
    fn test_parse_index_strips_space() {
        assert_eq!(parse_index("0 0001 (01) => 254").unwrap(), 1);
        assert_eq!(parse_index("0 0011 (03) => 2").unwrap(), 3);
        assert_eq!(parse_index("1 1111 (1F) => 30").unwrap(), 31);
    }

    #[test]
    fn test_parse_index_short_line() {
        assert_eq!(parse_index("1").unwrap(), 1);
        assert_eq!(parse_index("1 01").unwrap(), 5);
    }

    #[test]
    fn test_parse_index_six_digits() {
        assert_eq!(parse_index("111111 => 1").unwrap(), 63);
    }

    #[test]
    fn test_parse_index_rejects_non_binary() {
        let err = parse_index("1 1x11 (1B) => 26").unwrap_err();
        assert!(matches!(err, TableError::InvalidDigit { found: 'x', .. }));
    }

    #[test]
    fn test_parse_index_only_strips_spaces() {
        // A short CRLF row keeps its '\r' inside the prefix.
        assert!(matches!(
            parse_index("0 01\r"),
            Err(TableError::InvalidDigit { found: '\r', .. })
        ));
        assert!(matches!(
            parse_index("0_0001"),
            Err(TableError::InvalidDigit { found: '_', .. })
        ));
        assert!(matches!(
            parse_index("0\t0001"),
            Err(TableError::InvalidDigit { found: '\t', .. })
        ));
        // A full-width CRLF row is fine: the '\r' sits past the prefix.
        assert_eq!(parse_index("0 0001 (01) => 254\r").unwrap(), 1);
    }

    #[test]
    fn test_parse_index_ignores_text_past_prefix() {
        // Only the first six characters are considered.
        assert_eq!(parse_index("0 0101xyz").unwrap(), 5);
    }

    #[test]
    fn test_parse_row_annotations() {
        let entry = parse_row("1 1000 (18) => 192 (Whole note)").unwrap();
        assert_eq!(entry.index, 24);
        assert_eq!(entry.hex, Some(0x18));
        assert_eq!(entry.ticks, Some(192));
        assert_eq!(entry.note.as_deref(), Some("Whole note"));
    }

    #[test]
    fn test_parse_row_note_starting_with_hex_letter() {
        let entry =
            parse_row("0 1110 (0E) => 26  (Approx. 80 times 1/3, quarter note triplet)").unwrap();
        assert_eq!(entry.ticks, Some(26));
        assert_eq!(
            entry.note.as_deref(),
            Some("Approx. 80 times 1/3, quarter note triplet")
        );
    }

    #[test]
    fn test_parse_row_without_arrow_is_accepted() {
        let entry = parse_row("0 0110").unwrap();
        assert_eq!(entry.index, 6);
        assert_eq!(entry.hex, None);
        assert_eq!(entry.ticks, None);
        assert_eq!(entry.note, None);
    }

    #[test]
    fn test_parse_row_keeps_mismatched_hex() {
        let entry = parse_row("0 0001 (02) => 254").unwrap();
        assert_eq!(entry.index, 1);
        assert_eq!(entry.hex, Some(2));
    }

    #[test]
    fn test_parse_table_filters_headings_and_blank_lines() {
        let text = "Header line\n\n0 0011 (03) => 2\n  indented note\n0 0001 (01) => 254\n";
        let entries = parse_table(text).unwrap();
        let indices: Vec<u8> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, [3, 1]);
        assert_eq!(entries[0].section.as_deref(), Some("Header line"));
        assert_eq!(entries[1].section.as_deref(), Some("indented note"));
    }

    #[test]
    fn test_parse_table_aborts_on_malformed_row() {
        let text = "0 0001 (01) => 254\n1 2000 (10) => 12\n";
        assert!(matches!(
            parse_table(text),
            Err(TableError::InvalidDigit { found: '2', .. })
        ));
    }

    #[test]
    fn test_parse_sorted_default_table() {
        let entries = parse_sorted(DEFAULT_TABLE).unwrap();
        assert_eq!(entries.len(), 32);
        for (expected, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index as usize, expected);
            assert_eq!(entry.hex, Some(entry.index));
        }
        assert_eq!(entries[1].line, "0 0001 (01) => 254");
        assert_eq!(entries[3].line, "0 0011 (03) => 2");
    }

    #[test]
    fn test_sections_follow_headings() {
        let entries = parse_sorted(DEFAULT_TABLE).unwrap();
        assert_eq!(entries[1].section, None);
        assert_eq!(
            entries[24].section.as_deref(),
            Some("Notes with base length 12 (4/4 at 75 bpm):")
        );
        assert!(
            entries[0]
                .section
                .as_deref()
                .is_some_and(|s| s.starts_with("Notes with base length 10"))
        );
    }
}
