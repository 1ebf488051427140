//! Placement conflict scopes and the scans behind the placement predicates.
//!
//! The scan helpers operate on the serialized cells of a board and cover the
//! whole scope, target cell included: during solving the target cell is
//! empty, and the aggregate check short-circuits on an equal value before
//! any scan runs.

use crate::board::cell_index;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope in which a proposed placement collides with an existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {
    Row,
    Column,
    Region,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Row => write!(f, "row"),
            Conflict::Column => write!(f, "column"),
            Conflict::Region => write!(f, "region"),
        }
    }
}

/// Outcome of checking one proposed placement against all scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementCheck {
    /// No scope rejects the placement, or the cell already holds the value.
    Valid,
    /// The scopes that already contain the value, in row/column/region order.
    Conflicts(Vec<Conflict>),
}

impl PlacementCheck {
    /// True for [`PlacementCheck::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, PlacementCheck::Valid)
    }
}

/// True when no cell in `row` holds the serialized `digit`.
pub(crate) fn row_allows(cells: &[u8], row: usize, digit: u8) -> bool {
    let start = row * 9;
    !cells[start..start + 9].contains(&digit)
}

/// True when no cell in `col` holds the serialized `digit`.
pub(crate) fn col_allows(cells: &[u8], col: usize, digit: u8) -> bool {
    (0..9).all(|row| cells[cell_index(row, col)] != digit)
}

/// True when no cell in the 3x3 region containing (`row`, `col`) holds the
/// serialized `digit`.
pub(crate) fn region_allows(cells: &[u8], row: usize, col: usize, digit: u8) -> bool {
    let base_row = row / 3 * 3;
    let base_col = col / 3 * 3;
    (0..9).all(|i| cells[cell_index(base_row + i / 3, base_col + i % 3)] != digit)
}
