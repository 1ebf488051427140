//! The two JSON endpoints: `/api/solve` and `/api/check`.
//!
//! Every response is HTTP 200; failures travel in the payload as fixed error
//! strings that clients match on exactly. Validation order is fixed: field
//! presence, then puzzle length, puzzle characters, coordinate, value.
//!
//! The endpoint cores are plain functions over the request/response types so
//! the functional suite exercises them without HTTP plumbing; the axum
//! handlers only unwrap the body and log the outcome.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sudoku_core::{validate, Conflict, Coordinate, PlacementCheck, Solver};

pub const MISSING_FIELD: &str = "Required field missing";
pub const MISSING_FIELDS: &str = "Required field(s) missing";
pub const BAD_LENGTH: &str = "Expected puzzle to be 81 characters long";
pub const BAD_CHARACTERS: &str = "Invalid characters in puzzle";
pub const UNSOLVABLE: &str = "Puzzle cannot be solved";
pub const BAD_COORDINATE: &str = "Invalid coordinate";
pub const BAD_VALUE: &str = "Invalid value";

#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    pub puzzle: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    pub puzzle: Option<String>,
    pub coordinate: Option<String>,
    /// Accepted as a JSON string or number; anything else fails the
    /// single-digit check.
    pub value: Option<Value>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Solution { solution: String },
    Error { error: &'static str },
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    Result {
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        conflict: Option<Vec<Conflict>>,
    },
    Error {
        error: &'static str,
    },
}

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/check", post(check))
}

async fn solve(body: Result<Json<SolveRequest>, JsonRejection>) -> Json<SolveResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let response = solve_puzzle(&req);
    if let SolveResponse::Error { error } = &response {
        log::debug!("solve rejected: {error}");
    }
    Json(response)
}

async fn check(body: Result<Json<CheckRequest>, JsonRejection>) -> Json<CheckResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let response = check_placement(&req);
    if let CheckResponse::Error { error } = &response {
        log::debug!("check rejected: {error}");
    }
    Json(response)
}

/// `/api/solve` core.
pub fn solve_puzzle(req: &SolveRequest) -> SolveResponse {
    let puzzle = match req.puzzle.as_deref().filter(|p| !p.is_empty()) {
        Some(puzzle) => puzzle,
        None => return SolveResponse::Error { error: MISSING_FIELD },
    };
    if let Some(error) = puzzle_error(puzzle) {
        return SolveResponse::Error { error };
    }

    match Solver::new().solve(puzzle) {
        Some(solution) => SolveResponse::Solution { solution },
        None => SolveResponse::Error { error: UNSOLVABLE },
    }
}

/// `/api/check` core.
pub fn check_placement(req: &CheckRequest) -> CheckResponse {
    let (puzzle, coordinate, value) = match required_fields(req) {
        Some(fields) => fields,
        None => return CheckResponse::Error { error: MISSING_FIELDS },
    };
    if let Some(error) = puzzle_error(puzzle) {
        return CheckResponse::Error { error };
    }
    let coord = match Coordinate::parse(coordinate) {
        Some(coord) => coord,
        None => return CheckResponse::Error { error: BAD_COORDINATE },
    };
    let value = match parse_value(value) {
        Some(value) => value,
        None => return CheckResponse::Error { error: BAD_VALUE },
    };

    match Solver::new().check_placement(puzzle, coord, value) {
        PlacementCheck::Valid => CheckResponse::Result {
            valid: true,
            conflict: None,
        },
        PlacementCheck::Conflicts(conflicts) => CheckResponse::Result {
            valid: false,
            conflict: Some(conflicts),
        },
    }
}

/// All three check fields, or `None` if any is missing or falsy.
fn required_fields(req: &CheckRequest) -> Option<(&str, &str, &Value)> {
    let puzzle = req.puzzle.as_deref().filter(|p| !p.is_empty())?;
    let coordinate = req.coordinate.as_deref().filter(|c| !c.is_empty())?;
    let value = req.value.as_ref().filter(|v| value_present(v))?;
    Some((puzzle, coordinate, value))
}

/// Two-stage structural diagnosis: length first, then characters.
fn puzzle_error(puzzle: &str) -> Option<&'static str> {
    if validate(puzzle) {
        None
    } else if puzzle.len() != 81 {
        Some(BAD_LENGTH)
    } else {
        Some(BAD_CHARACTERS)
    }
}

/// Falsy test for the `value` field: null, `false`, numeric zero, and the
/// empty string all count as missing.
fn value_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// A candidate digit 1-9, from a JSON string or number rendering to exactly
/// one digit character.
fn parse_value(value: &Value) -> Option<u8> {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let bytes = text.as_bytes();
    if bytes.len() == 1 && (b'1'..=b'9').contains(&bytes[0]) {
        Some(bytes[0] - b'0')
    } else {
        None
    }
}
