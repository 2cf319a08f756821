//! # Cell Locations
//!
//! A location is the decoded form of a cell name like `"b2"`: a single
//! lowercase column letter followed by a decimal row number. Decoding is a
//! pure function of the name: a location never references a board, and the
//! neighbor names it derives may well name cells that no board declares.
//! Resolution against an actual board happens once, at board construction.

use crate::position::Direction;

/// Decoded cell coordinates plus the 8 derived neighbor cell names.
///
/// Column letters map to 1-based numbers (`a` → 1). Only single-letter
/// columns are supported; an offset that would leave `a..=z` yields no
/// neighbor name rather than wrapping into a multi-letter scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1-based row parsed from the digit suffix.
    pub row: u32,
    /// 1-based column decoded from the letter prefix.
    pub column: u32,
    neighbors: [Option<String>; 8],
}

impl Location {
    /// Decodes a cell name.
    ///
    /// Returns `None` when the name does not match the `letter+digits`
    /// pattern; the caller treats this as "no such coordinate", never as a
    /// panic. Row numbers that overflow `u32` are rejected the same way.
    pub fn parse(name: &str) -> Option<Location> {
        let mut chars = name.chars();
        let column_char = chars.next().filter(char::is_ascii_lowercase)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row = digits.parse::<u32>().ok()?;

        let mut neighbors: [Option<String>; 8] = Default::default();
        for direction in Direction::ALL {
            let (row_offset, column_offset) = direction.offsets();
            neighbors[direction.index()] =
                offset_name(column_char, row, column_offset, row_offset);
        }

        Some(Location {
            row,
            column: (column_char as u32) - ('a' as u32) + 1,
            neighbors,
        })
    }

    /// The derived name of the neighboring cell in `direction`, if the
    /// offset stays within the single-letter column range.
    pub fn neighbor(&self, direction: Direction) -> Option<&str> {
        self.neighbors[direction.index()].as_deref()
    }
}

/// Builds the 1-based cell name for a column/row pair, or `None` outside
/// the single-letter column range.
pub fn cell_name(column: u32, row: u32) -> Option<String> {
    if !(1..=26).contains(&column) {
        return None;
    }
    let letter = (b'a' + (column - 1) as u8) as char;
    Some(format!("{letter}{row}"))
}

/// Applies ±1 offsets to an encoded letter/digit pair and re-encodes the
/// resulting name. Names with row 0 are produced (and simply never resolve
/// on a 1-based board); columns outside `a..=z` are not.
fn offset_name(column: char, row: u32, column_offset: i32, row_offset: i32) -> Option<String> {
    let column = char::from_u32((column as i32 + column_offset) as u32)?;
    if !column.is_ascii_lowercase() {
        return None;
    }
    let row = row as i64 + row_offset as i64;
    if row < 0 {
        return None;
    }
    Some(format!("{column}{row}"))
}
