use serde::Serialize;

/// One row of the duration table, keyed by its binary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationEntry {
    /// Value of the row's leading binary digits.
    pub index: u8,
    /// The row exactly as it appeared in the table.
    pub line: String,
    /// The `(XX)` hex annotation, if the row has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<u8>,
    /// Tick count written after `=>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<u16>,
    /// Trailing parenthesised remark, e.g. `Whole note`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Heading line the row appeared under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl DurationEntry {
    /// Creates an entry with only its index and source line set.
    pub fn new(index: u8, line: impl Into<String>) -> Self {
        Self {
            index,
            line: line.into(),
            hex: None,
            ticks: None,
            note: None,
            section: None,
        }
    }
}

/// Sorts entries by ascending index, keeping source order for equal indices.
pub fn sort_entries(entries: &mut [DurationEntry]) {
    entries.sort_by_key(|entry| entry.index);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable_for_equal_indices() {
        let mut entries = vec![
            DurationEntry::new(3, "first three"),
            DurationEntry::new(1, "one"),
            DurationEntry::new(3, "second three"),
            DurationEntry::new(0, "zero"),
        ];
        sort_entries(&mut entries);

        let lines: Vec<&str> = entries.iter().map(|e| e.line.as_str()).collect();
        assert_eq!(lines, ["zero", "one", "first three", "second three"]);
    }
}
