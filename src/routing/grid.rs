use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::helpers::parse;

use super::{Direction, GridError, Pos};

/// An immutable rectangular grid of movement costs.
///
/// The cost of a cell is paid when a move *enters* it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: grid::Grid<u32>,
    /// The cost of the cheapest cell, used to scale the search heuristic.
    cheapest: u32,
}

impl CostGrid {
    /// Builds a grid from rows of costs.
    ///
    /// Every row must have the same, non-zero number of cells, and every cost
    /// must be a non-negative value that fits in a `u32`.
    pub fn try_from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = C>,
        C: ToPrimitive,
    {
        let mut cells = Vec::new();
        let mut n_cols = None;

        for (row, costs) in rows.into_iter().enumerate() {
            let row_start = cells.len();
            for (col, cost) in costs.into_iter().enumerate() {
                let cost = cost
                    .to_u32()
                    .ok_or(GridError::InvalidCost { row, col })?;
                cells.push(cost);
            }

            let found = cells.len() - row_start;
            if found == 0 {
                return Err(GridError::EmptyRow { row });
            }
            match n_cols {
                None => n_cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Jagged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }

        let Some(n_cols) = n_cols else {
            return Err(GridError::Empty);
        };
        let cheapest = cells.iter().copied().min().unwrap_or_default();

        Ok(Self {
            cells: grid::Grid::from_vec(cells, n_cols),
            cheapest,
        })
    }

    /// Parses a grid of single-digit costs, one row per line.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows = parse::from_str(input.trim_end(), parse::digit_rows())
            .map_err(|err| GridError::Parse(err.to_string()))?;
        Self::try_from_rows(rows)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Returns the cost of entering the given position, or `None` if the
    /// position is not in the grid.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<u32> {
        let (row, col) = Self::make_row_col(pos);
        self.cells.get(row, col).copied()
    }

    /// Returns true if the position is in the grid.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let (row, col) = Self::make_row_col(pos);
        row < self.rows() && col < self.cols()
    }

    /// Returns the position one step away in `dir`, or `None` if that step
    /// leaves the grid.
    #[inline]
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let next = pos.as_ivec2() + dir.offset();
        if next.x < 0 || next.y < 0 {
            return None;
        }
        let next = next.as_uvec2();
        self.contains(next).then_some(next)
    }

    /// The cost of the cheapest cell in the grid.
    #[inline]
    pub fn cheapest_cost(&self) -> u32 {
        self.cheapest
    }

    #[inline]
    pub fn top_left(&self) -> Pos {
        Pos::ZERO
    }

    #[inline]
    pub fn bottom_right(&self) -> Pos {
        Self::make_pos(self.rows() - 1, self.cols() - 1)
    }

    #[inline(always)]
    pub(super) fn make_pos(row: usize, col: usize) -> Pos {
        Pos {
            x: col as u32,
            y: row as u32,
        }
    }

    #[inline(always)]
    fn make_row_col(pos: Pos) -> (usize, usize) {
        (pos.y as usize, pos.x as usize)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first_row = true;
        for row in 0..self.rows() {
            if !first_row {
                writeln!(f)?;
            }

            for cost in self.cells.iter_row(row) {
                write!(f, "{cost}")?;
            }

            first_row = false;
        }
        Ok(())
    }
}
