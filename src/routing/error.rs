use thiserror::Error;

use super::Pos;

/// Reasons a grid cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("grid row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("expected every grid row to have {expected} cells, but row {row} has {found}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The cost is negative or does not fit in a `u32`.
    #[error("invalid cost at row {row}, column {col}")]
    InvalidCost { row: usize, col: usize },

    #[error("could not parse grid: {0}")]
    Parse(String),
}

/// Which end of a query a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error(transparent)]
    InvalidGrid(#[from] GridError),

    #[error("{endpoint:?} (row {}, column {}) is outside the {rows}x{cols} grid", .pos.y, .pos.x)]
    InvalidCoordinates {
        endpoint: Endpoint,
        pos: Pos,
        rows: usize,
        cols: usize,
    },

    #[error("run bounds must satisfy 1 <= min <= max, got min {min} and max {max}")]
    InvalidRunBounds { min: u32, max: u32 },

    #[error("search gave up after expanding {limit} states")]
    ExpansionLimitExceeded { limit: usize },
}
