use crate::entry::DurationEntry;
use crate::error::TableError;
use std::fmt;

/// Number of slots addressable by the 5-bit length-counter index.
pub const LENGTH_TABLE_SIZE: usize = 32;

/// The length-counter lookup: slot `i` holds the ticks of the row with index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthTable([u16; LENGTH_TABLE_SIZE]);

impl LengthTable {
    /// Builds the table from parsed rows.
    ///
    /// Every slot must be defined by exactly one row carrying a tick count.
    pub fn from_entries(entries: &[DurationEntry]) -> Result<Self, TableError> {
        let mut slots = [None; LENGTH_TABLE_SIZE];

        for entry in entries {
            let slot = slots
                .get_mut(entry.index as usize)
                .ok_or(TableError::IndexOutOfRange { index: entry.index })?;
            let ticks = entry.ticks.ok_or_else(|| TableError::MissingTicks {
                line: entry.line.clone(),
            })?;
            if slot.replace(ticks).is_some() {
                return Err(TableError::DuplicateIndex { index: entry.index });
            }
        }

        let mut table = [0u16; LENGTH_TABLE_SIZE];
        for (index, (dst, slot)) in table.iter_mut().zip(slots).enumerate() {
            *dst = slot.ok_or(TableError::MissingSlot {
                index: index as u8,
            })?;
        }
        Ok(Self(table))
    }
}

impl fmt::Display for LengthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, ticks) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ticks}")?;
        }
        f.write_str("]")
    }
}
