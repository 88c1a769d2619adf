//! Bookkeeping of explored states, to avoid repeated expansion.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Defines the behavior required of an explored record.
pub trait Explored: Default {
    type State;
    type Cost;

    /// Called when a node is popped from the frontier. Returns
    /// whether the node should be expanded, and records it if so.
    fn finalize(&mut self, state: &Self::State, cost: Self::Cost) -> bool;

    /// Should a newly generated child be added to the frontier?
    fn admits(&self, state: &Self::State, cost: Self::Cost) -> bool;

    /// Number of distinct states recorded.
    fn len(&self) -> usize;
}

/// Every state is explored at most once, ever.
///
/// This is sufficient for uniform-cost search, where a state
/// is always popped at its cheapest cost first.
#[derive(Debug)]
pub struct ExploredSet<S, C> {
    explored: HashSet<S>,
    cost: std::marker::PhantomData<C>,
}

impl<S, C> Default for ExploredSet<S, C>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        ExploredSet {
            explored: HashSet::default(),
            cost: std::marker::PhantomData,
        }
    }
}

impl<S, C> Explored for ExploredSet<S, C>
where
    S: Debug + Clone + Eq + Hash,
{
    type State = S;
    type Cost = C;

    fn finalize(&mut self, state: &S, _cost: C) -> bool {
        if self.explored.contains(state) {
            return false;
        }
        self.explored.insert(state.clone())
    }

    fn admits(&self, state: &S, _cost: C) -> bool {
        !self.explored.contains(state)
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

/// Remembers the cheapest cost at which each state was explored.
///
/// A state may be explored again when a strictly cheaper path
/// to it turns up, which happens in A* whenever the heuristic
/// is admissible but not consistent.
#[derive(Debug)]
pub struct BestCost<S, C> {
    explored: HashMap<S, C>,
}

impl<S, C> Default for BestCost<S, C>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        BestCost {
            explored: HashMap::default(),
        }
    }
}

impl<S, C> BestCost<S, C>
where
    S: Eq + Hash,
    C: Copy,
{
    #[cfg(test)]
    fn best(&self, state: &S) -> Option<C> {
        self.explored.get(state).copied()
    }
}

impl<S, C> Explored for BestCost<S, C>
where
    S: Debug + Clone + Eq + Hash,
    C: Debug + Copy + PartialOrd,
{
    type State = S;
    type Cost = C;

    fn finalize(&mut self, state: &S, cost: C) -> bool {
        // (a) States which are not recorded yet are added.
        // (b) Recorded states with a cost no worse than this one are skipped.
        // (c) Recorded states with a worse cost are replaced.
        match self.explored.get_mut(state) {
            Some(best) if cost < *best => {
                *best = cost;
                true
            }
            Some(_) => false,
            None => {
                self.explored.insert(state.clone(), cost);
                true
            }
        }
    }

    fn admits(&self, state: &S, cost: C) -> bool {
        match self.explored.get(state) {
            Some(best) => cost < *best,
            None => true,
        }
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explored_set_finalizes_once() {
        let mut explored: ExploredSet<&str, usize> = ExploredSet::default();

        assert!(explored.admits(&"a", 5));
        assert!(explored.finalize(&"a", 5));
        assert!(!explored.finalize(&"a", 1));
        assert!(!explored.admits(&"a", 0));
        assert!(explored.admits(&"b", 10));
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn best_cost_allows_cheaper_reexpansion() {
        let mut explored: BestCost<&str, f64> = BestCost::default();

        assert!(explored.finalize(&"a", 4.0));
        assert_eq!(explored.best(&"a"), Some(4.0));

        assert!(!explored.finalize(&"a", 4.0));
        assert!(!explored.finalize(&"a", 6.0));
        assert!(!explored.admits(&"a", 4.0));

        assert!(explored.admits(&"a", 2.0));
        assert!(explored.finalize(&"a", 2.0));
        assert_eq!(explored.best(&"a"), Some(2.0));
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn best_cost_unknown_state() {
        let explored: BestCost<u8, usize> = BestCost::default();
        assert_eq!(explored.best(&3), None);
        assert!(explored.admits(&3, usize::MAX));
    }
}
