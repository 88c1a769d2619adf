//! Uniform-cost search

use num::Zero;

use super::cache::ExploredSet;
use super::SearchAlgorithm;
use crate::errors::Result;
use crate::report::SearchReport;
use crate::traits::Problem;

/// Heuristic function type used when there is no heuristic at all.
pub type Blind<P> = fn(&<P as Problem>::State) -> <P as Problem>::Cost;

fn blind<P>(_state: &P::State) -> P::Cost
where
    P: Problem,
{
    P::Cost::zero()
}

/// Search algorithm which always expands the cheapest path found so far.
pub type UniformCostSearch<'p, P> = SearchAlgorithm<
    'p,
    P,
    ExploredSet<<P as Problem>::State, <P as Problem>::Cost>,
    Blind<P>,
>;

/// Build a uniform-cost searcher, which can be configured before running.
pub fn build<P>(problem: &P) -> UniformCostSearch<'_, P>
where
    P: Problem,
{
    SearchAlgorithm::new(problem, blind::<P> as Blind<P>)
}

/// Perform a uniform-cost search.
///
/// Uniform-cost search behaves like a breadth first search, but orders
/// candidates by their accumulated path cost. Since costs never decrease
/// along a path, the first time a state is taken from the frontier it has
/// been reached as cheaply as possible, so each state is expanded at most
/// once.
pub fn ucs<P>(problem: &P) -> Result<SearchReport<P>>
where
    P: Problem,
{
    build(problem).run()
}
