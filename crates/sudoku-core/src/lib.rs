//! Core Sudoku engine.
//!
//! Validates 81-character puzzle strings, checks proposed placements against
//! row/column/region constraints, and completes puzzles with depth-first
//! backtracking. The engine is synchronous and stateless: every call builds
//! and owns its working data, so concurrent callers share nothing.

pub mod board;
pub mod placement;
pub mod solver;

pub use board::{cell_index, cell_pos, validate, Board, Coordinate};
pub use placement::{Conflict, PlacementCheck};
pub use solver::Solver;
