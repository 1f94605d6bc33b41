use std::collections::HashMap;
use std::fmt::Write as _;

use itertools::Itertools;

use crate::debugln;

use super::error::Endpoint;
use super::frontier::{Entry, Frontier};
use super::{CostGrid, Direction, Pos, RouteError, RunBounds, SearchState};

/// A best-first (A*) search for the cheapest route between two cells of a
/// [`CostGrid`] under a pair of [`RunBounds`].
///
/// Routes never reverse. The cost of a route is the sum of the costs of the
/// cells it enters, so the start cell itself is free.
#[derive(Debug, Clone)]
pub struct Router<'a> {
    grid: &'a CostGrid,
    start: Pos,
    goal: Pos,
    bounds: RunBounds,
    expansion_limit: Option<usize>,
}

impl<'a> Router<'a> {
    pub fn new(
        grid: &'a CostGrid,
        start: Pos,
        goal: Pos,
        bounds: RunBounds,
    ) -> Result<Self, RouteError> {
        Self::check_contains(grid, Endpoint::Start, start)?;
        Self::check_contains(grid, Endpoint::Goal, goal)?;

        Ok(Self {
            grid,
            start,
            goal,
            bounds,
            expansion_limit: None,
        })
    }

    /// Makes the search fail with [`RouteError::ExpansionLimitExceeded`] once
    /// more than `limit` states have been expanded.
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Returns the cost of the cheapest legal route, or `None` if the goal
    /// cannot be reached.
    pub fn minimum_cost(&self) -> Result<Option<u64>, RouteError> {
        Ok(self.search()?.map(|(_, cost)| cost))
    }

    /// Like [`Router::minimum_cost`], but also returns the route itself.
    pub fn route(&self) -> Result<Option<Route>, RouteError> {
        let mut search = Search::new(self);
        let Some((end, cost)) = search.execute()? else {
            return Ok(None);
        };

        let mut states = vec![end];
        let mut current = end;
        while let Some(&Some(parent)) = search.visited.get(&current) {
            states.push(parent);
            current = parent;
        }
        states.reverse();

        debug_assert_eq!(states.first().map(|state| state.pos), Some(self.start));
        Ok(Some(Route { cost, states }))
    }

    /// A lower bound on the cost of getting from `pos` to the goal.
    ///
    /// Every move enters exactly one cell and changes the Manhattan distance
    /// by exactly one, so the distance times the cheapest cell cost never
    /// overestimates.
    #[inline]
    pub fn heuristic(&self, pos: Pos) -> u64 {
        let distance = pos.x.abs_diff(self.goal.x) + pos.y.abs_diff(self.goal.y);
        u64::from(distance) * u64::from(self.grid.cheapest_cost())
    }

    fn search(&self) -> Result<Option<(SearchState, u64)>, RouteError> {
        Search::new(self).execute()
    }

    fn check_contains(grid: &CostGrid, endpoint: Endpoint, pos: Pos) -> Result<(), RouteError> {
        if grid.contains(pos) {
            return Ok(());
        }
        Err(RouteError::InvalidCoordinates {
            endpoint,
            pos,
            rows: grid.rows(),
            cols: grid.cols(),
        })
    }
}

/// The state of one run of the search. Dropped when the search returns.
struct Search<'r, 'a> {
    router: &'r Router<'a>,
    /// Each entry carries the state it was reached from.
    frontier: Frontier<(SearchState, Option<SearchState>)>,
    /// States that have been popped, mapped to the state they were reached
    /// from on the cheapest route.
    visited: HashMap<SearchState, Option<SearchState>>,
    expanded: usize,
}

impl<'r, 'a> Search<'r, 'a> {
    fn new(router: &'r Router<'a>) -> Self {
        Self {
            router,
            frontier: Frontier::new(),
            visited: HashMap::new(),
            expanded: 0,
        }
    }

    /// Runs the search to completion, returning the goal state and its cost.
    fn execute(&mut self) -> Result<Option<(SearchState, u64)>, RouteError> {
        let Router {
            grid, goal, bounds, ..
        } = *self.router;

        let start = SearchState::start(self.router.start);
        debugln!(
            "Routing {} -> {} with runs {bounds} on a {}x{} grid",
            start.pos,
            goal,
            grid.rows(),
            grid.cols()
        );
        self.frontier
            .push((start, None), 0, self.router.heuristic(start.pos));

        while let Some(Entry {
            item: (state, parent),
            cost,
            ..
        }) = self.frontier.pop()
        {
            if self.visited.contains_key(&state) {
                continue;
            }
            self.visited.insert(state, parent);

            if state.pos == goal && state.can_stop(bounds) {
                debugln!(
                    "Reached {goal} at cost {cost} after expanding {} states",
                    self.expanded
                );
                return Ok(Some((state, cost)));
            }

            self.expanded += 1;
            if let Some(limit) = self.router.expansion_limit {
                if self.expanded > limit {
                    debugln!("Giving up with {} states left", self.frontier.len());
                    return Err(RouteError::ExpansionLimitExceeded { limit });
                }
            }

            for next in state.successors(grid, bounds) {
                if self.visited.contains_key(&next) {
                    continue;
                }
                let Some(step_cost) = grid.get(next.pos) else {
                    continue;
                };
                let next_cost = cost + u64::from(step_cost);
                let priority = next_cost + self.router.heuristic(next.pos);
                self.frontier.push((next, Some(state)), next_cost, priority);
            }
        }

        debugln!(
            "{goal} is unreachable, expanded {} states",
            self.expanded
        );
        Ok(None)
    }
}

/// A cheapest route found by [`Router::route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cost: u64,
    /// Every state along the route, starting with the start state.
    states: Vec<SearchState>,
}

impl Route {
    pub fn states(&self) -> &[SearchState] {
        &self.states
    }

    /// Every cell visited, including the start.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.states.iter().map(|state| state.pos)
    }

    /// The direction of every move, in order.
    pub fn moves(&self) -> impl Iterator<Item = Direction> + '_ {
        self.states.iter().filter_map(|state| state.heading)
    }

    /// The maximal runs of moves in the same direction, with their lengths.
    pub fn runs(&self) -> Vec<(Direction, usize)> {
        let groups = self.moves().group_by(|&dir| dir);
        let runs = (&groups)
            .into_iter()
            .map(|(dir, run)| (dir, run.count()))
            .collect();
        runs
    }

    /// Draws the grid with every entered cell replaced by the arrow of the
    /// move that entered it.
    pub fn overlay(&self, grid: &CostGrid) -> String {
        let arrows: HashMap<Pos, Direction> = self
            .states
            .iter()
            .filter_map(|state| Some((state.pos, state.heading?)))
            .collect();

        let mut out = String::new();
        for row in 0..grid.rows() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..grid.cols() {
                let pos = CostGrid::make_pos(row, col);
                match (arrows.get(&pos), grid.get(pos)) {
                    (Some(dir), _) => out.push(dir.arrow()),
                    (None, Some(cost)) => {
                        let _ = write!(out, "{cost}");
                    }
                    (None, None) => {}
                }
            }
        }
        out
    }
}
