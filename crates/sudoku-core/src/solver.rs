//! Backtracking solver and the public checking surface.

use crate::board::{cell_pos, validate, Board, Coordinate, EMPTY};
use crate::placement::{col_allows, region_allows, row_allows, Conflict, PlacementCheck};

/// Stateless engine: every call builds and owns its working data, so a single
/// instance can serve any number of concurrent callers.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Structural validation of a puzzle string. See [`crate::board::validate`].
    pub fn validate(&self, puzzle: &str) -> bool {
        validate(puzzle)
    }

    /// True when placing `value` (a digit 1-9) at `coord` collides with no
    /// entry in the coordinate's row.
    ///
    /// The scan covers the whole row, target cell included; callers probing a
    /// pre-filled cell handle the equal-value case themselves, as
    /// [`Solver::check_placement`] does.
    pub fn check_row_placement(&self, puzzle: &str, coord: Coordinate, value: u8) -> bool {
        row_allows(puzzle.as_bytes(), coord.row, digit_byte(value))
    }

    /// True when placing `value` at `coord` collides with no entry in the
    /// coordinate's column. Same scan rule as the row predicate.
    pub fn check_col_placement(&self, puzzle: &str, coord: Coordinate, value: u8) -> bool {
        col_allows(puzzle.as_bytes(), coord.col, digit_byte(value))
    }

    /// True when placing `value` at `coord` collides with no entry in the
    /// coordinate's 3x3 region. Same scan rule as the row predicate.
    pub fn check_region_placement(&self, puzzle: &str, coord: Coordinate, value: u8) -> bool {
        region_allows(puzzle.as_bytes(), coord.row, coord.col, digit_byte(value))
    }

    /// Check one proposed placement against all three scopes.
    ///
    /// If the cell already holds exactly `value`, the placement is valid and
    /// no scan runs. Otherwise failing scopes are collected in row, column,
    /// region order. Assumes a structurally valid puzzle; validation happens
    /// once at the boundary.
    pub fn check_placement(&self, puzzle: &str, coord: Coordinate, value: u8) -> PlacementCheck {
        if puzzle.as_bytes()[coord.index()] == digit_byte(value) {
            return PlacementCheck::Valid;
        }

        let mut conflicts = Vec::new();
        if !self.check_row_placement(puzzle, coord, value) {
            conflicts.push(Conflict::Row);
        }
        if !self.check_col_placement(puzzle, coord, value) {
            conflicts.push(Conflict::Column);
        }
        if !self.check_region_placement(puzzle, coord, value) {
            conflicts.push(Conflict::Region);
        }

        if conflicts.is_empty() {
            PlacementCheck::Valid
        } else {
            PlacementCheck::Conflicts(conflicts)
        }
    }

    /// Solve the puzzle, returning the 81-digit solution string if one
    /// exists.
    ///
    /// Structurally invalid input is rejected up front. The search is
    /// deterministic: candidates are tried in ascending order at the first
    /// open cell, and the first completion found is returned.
    pub fn solve(&self, puzzle: &str) -> Option<String> {
        let mut board = Board::from_string(puzzle)?;
        if solve_cells(&mut board) {
            Some(board.to_string())
        } else {
            None
        }
    }
}

/// Serialized form of a digit 1-9.
#[inline]
fn digit_byte(value: u8) -> u8 {
    b'0' + value
}

/// Depth-first backtracking over the first open cell. Each level owns one
/// tentative placement and reverts it before trying the next candidate, so
/// the board is unchanged whenever `false` comes back.
///
/// The admissibility test runs directly on the indexed cells instead of a
/// re-serialized string; the target cell is empty here, so the result matches
/// the string predicates exactly.
fn solve_cells(board: &mut Board) -> bool {
    let idx = match board.first_empty() {
        Some(idx) => idx,
        None => return true, // complete
    };
    let (row, col) = cell_pos(idx);

    for digit in b'1'..=b'9' {
        let cells = board.cells();
        if row_allows(cells, row, digit)
            && col_allows(cells, col, digit)
            && region_allows(cells, row, col, digit)
        {
            board.set(idx, digit);
            if solve_cells(board) {
                return true;
            }
            board.set(idx, EMPTY);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    const SOLUTION: &str =
        "135762984946381257728459613694517832812936745357824196473298561581673429269145378";
    const UNSOLVABLE: &str =
        "1.5..2.84..63.12.7.2..5.....7..1....8.2.3674.3.7.2..9.47...8..1..16....926914.378";

    fn coord(s: &str) -> Coordinate {
        Coordinate::parse(s).unwrap()
    }

    #[test]
    fn test_validate_valid_puzzle() {
        assert!(Solver::new().validate(PUZZLE));
    }

    #[test]
    fn test_validate_invalid_character() {
        let bad = format!("{}X", &PUZZLE[..80]);
        assert!(!Solver::new().validate(&bad));
    }

    #[test]
    fn test_validate_wrong_length() {
        assert!(!Solver::new().validate(&PUZZLE[..77]));
    }

    #[test]
    fn test_row_placement_valid() {
        assert!(Solver::new().check_row_placement(PUZZLE, coord("A2"), 3));
    }

    #[test]
    fn test_row_placement_invalid() {
        // Row A already holds a 1 at A1
        assert!(!Solver::new().check_row_placement(PUZZLE, coord("A2"), 1));
    }

    #[test]
    fn test_col_placement_valid() {
        assert!(Solver::new().check_col_placement(PUZZLE, coord("A2"), 3));
    }

    #[test]
    fn test_col_placement_invalid() {
        // Column 2 already holds a 9 at D2
        assert!(!Solver::new().check_col_placement(PUZZLE, coord("A2"), 9));
    }

    #[test]
    fn test_region_placement_valid() {
        assert!(Solver::new().check_region_placement(PUZZLE, coord("A2"), 3));
    }

    #[test]
    fn test_region_placement_invalid() {
        // The bottom-left region holds a 4 at G1
        assert!(!Solver::new().check_region_placement(PUZZLE, coord("H2"), 4));
    }

    #[test]
    fn test_row_placement_scans_target_cell() {
        // The target cell is not excluded from its own row scan, so probing a
        // pre-filled cell with its own value reports a conflict. The
        // aggregate check masks this with its equal-value short-circuit.
        assert!(!Solver::new().check_row_placement(PUZZLE, coord("A1"), 1));
        assert!(Solver::new()
            .check_placement(PUZZLE, coord("A1"), 1)
            .is_valid());
    }

    #[test]
    fn test_check_placement_no_conflict() {
        assert_eq!(
            Solver::new().check_placement(PUZZLE, coord("A2"), 3),
            PlacementCheck::Valid
        );
    }

    #[test]
    fn test_check_placement_row_conflict() {
        // Row A holds a 4 at A9; column 2 and the top-left region do not
        assert_eq!(
            Solver::new().check_placement(PUZZLE, coord("A2"), 4),
            PlacementCheck::Conflicts(vec![Conflict::Row])
        );
    }

    #[test]
    fn test_check_placement_row_and_region_conflict() {
        // Row A holds a 5 at A3, which also sits in A1's region
        assert_eq!(
            Solver::new().check_placement(PUZZLE, coord("A1"), 5),
            PlacementCheck::Conflicts(vec![Conflict::Row, Conflict::Region])
        );
    }

    #[test]
    fn test_check_placement_all_conflicts() {
        assert_eq!(
            Solver::new().check_placement(PUZZLE, coord("B1"), 1),
            PlacementCheck::Conflicts(vec![Conflict::Row, Conflict::Column, Conflict::Region])
        );
    }

    #[test]
    fn test_solve_valid_puzzle() {
        assert_eq!(Solver::new().solve(PUZZLE).as_deref(), Some(SOLUTION));
    }

    #[test]
    fn test_solve_rejects_invalid_character() {
        let bad = format!("{}X", &PUZZLE[..80]);
        assert_eq!(Solver::new().solve(&bad), None);
    }

    #[test]
    fn test_solve_rejects_wrong_length() {
        assert_eq!(Solver::new().solve(&PUZZLE[..80]), None);
    }

    #[test]
    fn test_solve_unsolvable_puzzle() {
        assert_eq!(Solver::new().solve(UNSOLVABLE), None);
    }

    #[test]
    fn test_solve_no_candidate_for_open_cell() {
        // A9 is open, row A pins digits 1-8, and B9 pins the 9.
        let puzzle = format!("12345678.........9{}", ".".repeat(63));
        assert_eq!(Solver::new().solve(&puzzle), None);
    }

    #[test]
    fn test_solve_complete_board_is_identity() {
        // Every cell pre-filled: the first-open-cell search comes up empty
        // and the input is returned unchanged.
        assert_eq!(Solver::new().solve(SOLUTION).as_deref(), Some(SOLUTION));
    }

    #[test]
    fn test_solution_shape() {
        let solution = Solver::new().solve(PUZZLE).unwrap();
        assert_eq!(solution.len(), 81);
        assert!(solution.bytes().all(|b| (b'1'..=b'9').contains(&b)));
    }

    #[test]
    fn test_solution_preserves_givens() {
        let solution = Solver::new().solve(PUZZLE).unwrap();
        for (given, solved) in PUZZLE.bytes().zip(solution.bytes()) {
            if given != EMPTY {
                assert_eq!(given, solved);
            }
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let solver = Solver::new();
        assert_eq!(solver.solve(PUZZLE), solver.solve(PUZZLE));
    }
}
