use smallvec::SmallVec;

use super::{CostGrid, Direction, Pos, RunBounds};

/// A node of the search graph: where we are, which way we last moved and for
/// how many moves in a row.
///
/// The start state has no heading and a run of 0. Every other state has a
/// heading and a run between 1 and the maximum run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub pos: Pos,
    pub heading: Option<Direction>,
    pub run: u32,
}

impl SearchState {
    pub fn start(pos: Pos) -> Self {
        Self {
            pos,
            heading: None,
            run: 0,
        }
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.heading.is_none()
    }

    /// Returns true if a route may end in this state.
    #[inline]
    pub fn can_stop(&self, bounds: RunBounds) -> bool {
        self.is_start() || bounds.can_turn(self.run)
    }

    /// Returns the run length after moving in `dir`, or `None` if the move is
    /// not allowed from this state.
    #[inline]
    fn next_run(&self, dir: Direction, bounds: RunBounds) -> Option<u32> {
        match self.heading {
            // The first move may go anywhere.
            None => Some(1),
            Some(heading) if heading == dir => bounds.can_continue(self.run).then_some(self.run + 1),
            Some(heading) if heading.is_opposite(dir) => None,
            Some(_) => bounds.can_turn(self.run).then_some(1),
        }
    }

    /// Returns every state reachable with a single legal move.
    pub fn successors(&self, grid: &CostGrid, bounds: RunBounds) -> SmallVec<[Self; 4]> {
        Direction::iter()
            .filter_map(|dir| {
                let run = self.next_run(dir, bounds)?;
                let pos = grid.step(self.pos, dir)?;
                Some(Self {
                    pos,
                    heading: Some(dir),
                    run,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::routing::pos;

    fn open_grid() -> CostGrid {
        CostGrid::try_from_rows(vec![vec![1u32; 5]; 5]).unwrap()
    }

    fn moving(row: u32, col: u32, dir: Direction, run: u32) -> SearchState {
        SearchState {
            pos: pos(row, col),
            heading: Some(dir),
            run,
        }
    }

    #[track_caller]
    fn do_test(state: SearchState, bounds: RunBounds, expected: &[SearchState]) {
        let grid = open_grid();
        let actual = state.successors(&grid, bounds);
        assert_eq!(actual.as_slice(), expected);
        for next in actual {
            assert!(next.run >= 1 && next.run <= bounds.max());
        }
    }

    #[test]
    fn start_moves_anywhere() {
        use Direction::*;

        do_test(
            SearchState::start(pos(2, 2)),
            RunBounds::ULTRA_CRUCIBLE,
            &[
                moving(1, 2, North, 1),
                moving(2, 3, East, 1),
                moving(3, 2, South, 1),
                moving(2, 1, West, 1),
            ],
        );
        do_test(
            SearchState::start(pos(0, 0)),
            RunBounds::CRUCIBLE,
            &[moving(0, 1, East, 1), moving(1, 0, South, 1)],
        );
    }

    #[test]
    fn never_reverses() {
        use Direction::*;

        do_test(
            moving(2, 2, East, 1),
            RunBounds::CRUCIBLE,
            &[moving(1, 2, North, 1), moving(2, 3, East, 2), moving(3, 2, South, 1)],
        );
    }

    #[test]
    fn short_run_must_go_straight() {
        use Direction::*;

        do_test(
            moving(2, 2, South, 3),
            RunBounds::ULTRA_CRUCIBLE,
            &[moving(3, 2, South, 4)],
        );
        do_test(moving(4, 2, South, 3), RunBounds::ULTRA_CRUCIBLE, &[]);
    }

    #[test]
    fn long_run_must_turn() {
        use Direction::*;

        do_test(
            moving(2, 2, North, 3),
            RunBounds::CRUCIBLE,
            &[moving(2, 3, East, 1), moving(2, 1, West, 1)],
        );
    }

    #[test]
    fn stopping() {
        let bounds = RunBounds::ULTRA_CRUCIBLE;
        assert!(SearchState::start(pos(0, 0)).can_stop(bounds));
        assert!(!moving(0, 3, Direction::East, 3).can_stop(bounds));
        assert!(moving(0, 4, Direction::East, 4).can_stop(bounds));
    }
}
