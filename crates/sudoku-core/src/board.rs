//! Board representation and structural validation.
//!
//! A board is the 81-cell row-major form of a puzzle string: each cell is the
//! serialized byte `b'1'..=b'9'` for a placed digit or [`EMPTY`] for an open
//! cell. Structural validation is the sole gate before any placement or
//! solving logic runs; nothing here checks solvability.

use std::fmt;

/// Serialized marker for an open cell.
pub const EMPTY: u8 = b'.';

/// Number of cells on a board.
pub const CELL_COUNT: usize = 81;

/// Convert (row, col) to linear cell index
#[inline]
pub fn cell_index(row: usize, col: usize) -> usize {
    row * 9 + col
}

/// Convert linear cell index back to (row, col)
#[inline]
pub fn cell_pos(idx: usize) -> (usize, usize) {
    (idx / 9, idx % 9)
}

/// Check that a puzzle string is structurally valid: exactly 81 characters,
/// each a digit `1`-`9` or the `.` placeholder.
pub fn validate(puzzle: &str) -> bool {
    puzzle.len() == CELL_COUNT
        && puzzle
            .bytes()
            .all(|b| b == EMPTY || (b'1'..=b'9').contains(&b))
}

/// One cell address: row `A`-`I` crossed with column `1`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    /// Zero-based row (0 = row `A`)
    pub row: usize,
    /// Zero-based column (0 = column `1`)
    pub col: usize,
}

impl Coordinate {
    /// Parse the external two-character form, e.g. `"A1"` or `"I9"`.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let row = match bytes[0] {
            b @ b'A'..=b'I' => (b - b'A') as usize,
            _ => return None,
        };
        let col = match bytes[1] {
            b @ b'1'..=b'9' => (b - b'1') as usize,
            _ => return None,
        };
        Some(Self { row, col })
    }

    /// Linear index of this cell (row-major).
    #[inline]
    pub fn index(&self) -> usize {
        cell_index(self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'A' + self.row as u8) as char,
            (b'1' + self.col as u8) as char
        )
    }
}

/// An owned, mutable 81-cell board. Built per solve call and discarded
/// afterwards; the engine never shares one between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// Parse a puzzle string, returning `None` if it fails [`validate`].
    pub fn from_string(puzzle: &str) -> Option<Self> {
        if !validate(puzzle) {
            return None;
        }
        let mut cells = [EMPTY; CELL_COUNT];
        cells.copy_from_slice(puzzle.as_bytes());
        Some(Self { cells })
    }

    /// Serialized byte at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> u8 {
        self.cells[idx]
    }

    /// Overwrite the cell at `idx` with a serialized byte.
    #[inline]
    pub fn set(&mut self, idx: usize, value: u8) {
        self.cells[idx] = value;
    }

    /// The raw serialized cells.
    #[inline]
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Lowest index holding the placeholder, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&b| b == EMPTY)
    }

    /// True when no cell is open.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Number of open cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b == EMPTY).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells only ever hold bytes from a validated puzzle string.
        f.write_str(std::str::from_utf8(&self.cells).map_err(|_| fmt::Error)?)
    }
}
