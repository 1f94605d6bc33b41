//! Cheapest routes through a grid of costs, when the route may only turn
//! after a minimum number of straight moves, must turn after a maximum number
//! of straight moves, and may never reverse.
//!
//! ```
//! use crucible::routing::{CostGrid, RunBounds, Router};
//!
//! let grid = CostGrid::parse("111\n991\n991").unwrap();
//! let router = Router::new(&grid, grid.top_left(), grid.bottom_right(), RunBounds::CRUCIBLE)
//!     .unwrap();
//! assert_eq!(router.minimum_cost(), Ok(Some(4)));
//! ```

mod bounds;
mod direction;
mod error;
mod frontier;
mod grid;
mod search;
mod state;

pub use bounds::RunBounds;
pub use direction::Direction;
pub use error::{Endpoint, GridError, RouteError};
pub use frontier::{Entry, Frontier};
pub use grid::CostGrid;
pub use search::{Route, Router};
pub use state::SearchState;

/// A cell position, with `x` as the column and `y` as the row.
pub type Pos = glam::UVec2;

/// Returns the position of the cell at `row`, `col`.
#[inline]
pub fn pos(row: u32, col: u32) -> Pos {
    Pos { x: col, y: row }
}

/// Returns the cheapest cost of getting from `start` to `goal`, moving at
/// least `min_run` and at most `max_run` times in a straight line between
/// turns.
///
/// Returns `Ok(None)` if no legal route exists.
pub fn minimum_cost(
    grid: &CostGrid,
    start: Pos,
    goal: Pos,
    min_run: u32,
    max_run: u32,
) -> Result<Option<u64>, RouteError> {
    let bounds = RunBounds::new(min_run, max_run)?;
    Router::new(grid, start, goal, bounds)?.minimum_cost()
}
