//! The outcome of a search.

use std::fmt;
use std::time::Duration;

use crate::traits::Problem;

/// A goal state and the cheapest known way to reach it.
pub struct Solution<P>
where
    P: Problem,
{
    pub state: P::State,
    pub actions: Vec<P::Action>,
    pub path_cost: P::Cost,
}

impl<P> fmt::Debug for Solution<P>
where
    P: Problem,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solution")
            .field("state", &self.state)
            .field("actions", &self.actions)
            .field("path_cost", &self.path_cost)
            .finish()
    }
}

/// Report produced by every search strategy.
///
/// When the goal can't be reached, `solution` is `None`, but the
/// counters and the elapsed time are still filled in.
pub struct SearchReport<P>
where
    P: Problem,
{
    pub solution: Option<Solution<P>>,

    /// Number of nodes which were expanded (goal nodes are not expanded).
    pub nodes_expanded: usize,

    /// Distinct states which were explored.
    pub states_explored: usize,

    /// Largest size reached by the frontier.
    pub frontier_high_water: usize,

    /// Wall clock time spent searching.
    pub elapsed: Duration,
}

impl<P> SearchReport<P>
where
    P: Problem,
{
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn solution_state(&self) -> Option<&P::State> {
        self.solution.as_ref().map(|s| &s.state)
    }

    pub fn solution_actions(&self) -> Option<&[P::Action]> {
        self.solution.as_ref().map(|s| s.actions.as_slice())
    }

    pub fn path_cost(&self) -> Option<P::Cost> {
        self.solution.as_ref().map(|s| s.path_cost)
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl<P> fmt::Debug for SearchReport<P>
where
    P: Problem,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchReport")
            .field("solution", &self.solution)
            .field("nodes_expanded", &self.nodes_expanded)
            .field("states_explored", &self.states_explored)
            .field("frontier_high_water", &self.frontier_high_water)
            .field("elapsed", &self.elapsed)
            .finish()
    }
}
